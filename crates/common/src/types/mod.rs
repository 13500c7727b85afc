use serde::{Deserialize, Serialize};

/// Body returned by the root liveness route.
pub const AWAKE: &str = "The API is awake!";

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Every error response carries a single human readable message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error_message: message.into() }
    }
}

/// Confirmation body for successful deletes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub message: String,
}
