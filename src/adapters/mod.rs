// Adapters layer: the gateway mapping, the Lambda runtime bootstrap and count provider backends.

pub mod gateway;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod provider;
