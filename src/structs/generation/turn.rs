use crate::enums::part::Part;

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: String,
    pub parts: Vec<Part>,
}
