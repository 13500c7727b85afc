pub mod errors;
pub mod db;
pub mod friend;
pub mod post;

use uuid::Uuid;

/// Parse a document id taken from a request path.
pub fn parse_id(raw: &str) -> Result<Uuid, errors::ModelError> {
    Uuid::parse_str(raw.trim()).map_err(|_| errors::ModelError::InvalidId(raw.to_string()))
}
