/// One piece of content inside a [`Turn`](crate::structs::generation::turn::Turn).
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    Bytes { mime_type: String, data: Vec<u8> },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn bytes(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self::Bytes {
            mime_type: mime_type.into(),
            data,
        }
    }
}
