use crate::core::use_case::GoodCountUseCase;
use crate::core::{ArticleId, CountProvider};
use crate::domain::model::{ErrorCategory, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const ARTICLE_ID_PARAM: &str = "article_id";

/// Headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// The part of an API Gateway proxy event the handler reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
}

impl GatewayRequest {
    pub fn with_article_id(id: impl Into<String>) -> Self {
        Self {
            path_parameters: Some(HashMap::from([(ARTICLE_ID_PARAM.to_string(), id.into())])),
        }
    }

    pub fn article_id(&self) -> &str {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(ARTICLE_ID_PARAM))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl GatewayResponse {
    fn new(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            headers: cors_headers(),
            body,
        }
    }

    pub fn success(body: String) -> Self {
        Self::new(200, body)
    }

    pub fn error(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self::error_with(category, message.into(), |envelope| {
            serde_json::to_string(envelope)
        })
    }

    /// Encodes an error envelope, falling back to a raw 500 if encoding fails.
    fn error_with<E>(category: ErrorCategory, message: String, encode: E) -> Self
    where
        E: FnOnce(&ErrorEnvelope) -> serde_json::Result<String>,
    {
        let envelope = ErrorEnvelope {
            error: category,
            message,
        };

        match encode(&envelope) {
            Ok(body) => Self::new(category.status_code(), body),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode error envelope");
                Self::new(500, e.to_string())
            }
        }
    }
}

pub fn cors_headers() -> BTreeMap<String, String> {
    CORS_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Maps gateway requests onto the good-count use-case.
pub struct GatewayHandler<P: CountProvider> {
    use_case: GoodCountUseCase<P>,
}

impl<P: CountProvider> GatewayHandler<P> {
    pub fn new(use_case: GoodCountUseCase<P>) -> Self {
        Self { use_case }
    }

    pub async fn handle(&self, request: GatewayRequest) -> GatewayResponse {
        let article_id = match ArticleId::new(request.article_id()) {
            Ok(id) => id,
            Err(e) => {
                tracing::info!("rejecting request: {}", e);
                return GatewayResponse::error(ErrorCategory::BadRequest, e.to_string());
            }
        };

        match self.use_case.execute(&article_id).await {
            Ok(body) => GatewayResponse::success(body),
            Err(e) => {
                tracing::error!(article_id = %article_id, error = %e, "request failed");
                GatewayResponse::error(ErrorCategory::InternalServerError, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_request_from_proxy_event() {
        let event = serde_json::json!({
            "resource": "/articles/{article_id}/goods",
            "httpMethod": "GET",
            "pathParameters": { "article_id": "abc" },
            "headers": { "Accept": "application/json" }
        });
        let request: GatewayRequest = serde_json::from_value(event).unwrap();
        assert_eq!(request.article_id(), "abc");
    }

    #[test]
    fn test_request_with_null_path_parameters() {
        let event = serde_json::json!({ "pathParameters": null });
        let request: GatewayRequest = serde_json::from_value(event).unwrap();
        assert_eq!(request.article_id(), "");
    }

    #[test]
    fn test_response_wire_shape() {
        let response = GatewayResponse::success(r#"{"goodCount":3}"#.to_string());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(value["body"], r#"{"goodCount":3}"#);
    }

    #[test]
    fn test_error_encoding_failure_falls_back_to_raw_500() {
        let response = GatewayResponse::error_with(
            ErrorCategory::BadRequest,
            "article_id is empty".to_string(),
            |_| Err(serde_json::Error::custom("encoder exploded")),
        );
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "encoder exploded");
        assert_eq!(response.headers, cors_headers());
    }
}
