use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CareError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("SMS gateway rejected the request with status {0}")]
    SmsStatus(StatusCode),
}

/// USSD gateways expect a plain-text body on every response, so errors are
/// rendered as text rather than JSON. A failing store means no menu state
/// can be trusted, hence 500; upstream SMS trouble is a gateway problem.
impl IntoResponse for CareError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            CareError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "END Service temporarily unavailable. Please try again later.",
            ),
            CareError::Reqwest(_) | CareError::UrlParse(_) | CareError::SmsStatus(_) => {
                (StatusCode::BAD_GATEWAY, "END Service temporarily unavailable.")
            }
            CareError::Json(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "END Service temporarily unavailable.",
            ),
        };
        (status, body).into_response()
    }
}
