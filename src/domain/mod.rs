// Domain layer: models and ports. No transport or runtime concerns here.

pub mod model;
pub mod ports;
