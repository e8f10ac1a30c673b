use crate::domain::model::{ApiRequest, ApiResponse};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API Gateway proxy event. Covers both the REST (v1) shape and the
/// HTTP API / Function URL (v2) shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    // v1
    pub http_method: Option<String>,
    pub path: Option<String>,
    // v2
    pub raw_path: Option<String>,
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    pub method: Option<String>,
    pub path: Option<String>,
}

impl GatewayRequest {
    fn http_context(&self) -> Option<&HttpContext> {
        self.request_context.as_ref().and_then(|ctx| ctx.http.as_ref())
    }

    pub fn method(&self) -> Method {
        let raw = self
            .http_method
            .as_deref()
            .or_else(|| self.http_context().and_then(|http| http.method.as_deref()));

        match raw {
            Some(name) => Method::from_bytes(name.to_ascii_uppercase().as_bytes())
                .unwrap_or_else(|_| {
                    tracing::warn!("Método HTTP inválido '{}', tratando como GET", name);
                    Method::GET
                }),
            None => Method::GET,
        }
    }

    pub fn path(&self) -> String {
        self.path
            .as_deref()
            .or(self.raw_path.as_deref())
            .or_else(|| self.http_context().and_then(|http| http.path.as_deref()))
            .unwrap_or("/")
            .to_string()
    }

    pub fn to_api_request(&self) -> ApiRequest {
        ApiRequest::new(self.method(), self.path())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

impl From<ApiResponse> for GatewayResponse {
    fn from(response: ApiResponse) -> Self {
        let headers = response
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        Self {
            status_code: response.status.as_u16(),
            headers,
            body: response.body,
            is_base64_encoded: false,
        }
    }
}
