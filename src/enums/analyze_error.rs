use thiserror::Error;
use warp::http::StatusCode;
use crate::enums::ai_provider_error::AiProviderError;

/// Failure of a single `/api/analyze` call.
///
/// The first two variants are caller mistakes and map to `400`; everything that
/// goes wrong after the payload has been decoded maps to `500` and carries the
/// provider's own message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("No image data provided")]
    NoImageData,
    #[error("Invalid base64 image data")]
    InvalidBase64,
    #[error("{0}")]
    Upstream(#[from] AiProviderError),
}

impl AnalyzeError {
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::NoImageData | Self::InvalidBase64)
    }

    pub const fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
