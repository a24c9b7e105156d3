pub mod auth_service;
pub mod product_service;

use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Relaxed extended JSON: plain numbers and strings for the common BSON types.
pub(crate) fn document_to_json(document: Document) -> Value {
    Bson::Document(document).into_relaxed_extjson()
}
