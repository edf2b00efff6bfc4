use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AnalyzeRequest {
    /// Base64 text of a PNG image. `null` and a missing field read as empty.
    #[serde(default)]
    pub image: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
        }
    }

    pub fn image_data(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }
}
