use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
};
use serde_json::{Value, json};

use crate::WeatherWiseError;
use crate::advisor::{TipsAdvisor, TipsRequest, TipsResponse};

/// Error returned by the HTTP handlers
#[derive(Debug)]
pub struct ApiError(WeatherWiseError);

impl From<WeatherWiseError> for ApiError {
    fn from(err: WeatherWiseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.0, "Tips request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

pub fn router(advisor: TipsAdvisor) -> Router {
    Router::new()
        .route("/tips", post(post_tips))
        .with_state(Arc::new(advisor))
}

/// Parse the body without insisting on a JSON content type. Empty or `null` means `{}`.
fn parse_request(body: &[u8]) -> Result<TipsRequest, WeatherWiseError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TipsRequest::default());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| WeatherWiseError::validation(format!("Invalid JSON body: {e}")))?;
    if value.is_null() {
        return Ok(TipsRequest::default());
    }

    serde_json::from_value(value)
        .map_err(|e| WeatherWiseError::validation(format!("Invalid request body: {e}")))
}

async fn post_tips(
    State(advisor): State<Arc<TipsAdvisor>>,
    body: Bytes,
) -> Result<Json<TipsResponse>, ApiError> {
    let request = parse_request(&body)?;
    let response = advisor.advise(&request).await?;
    Ok(Json(response))
}
