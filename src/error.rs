use std::fmt::{self, Display};

#[derive(Debug, Clone)]
pub struct JsonSmithError {
    pub message: String,
}

impl JsonSmithError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for JsonSmithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for JsonSmithError {}
