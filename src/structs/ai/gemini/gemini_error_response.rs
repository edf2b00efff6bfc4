use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorBody,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeminiErrorBody {
    pub message: String,
    pub status: Option<String>,
}
