use mongodb::bson::{doc, to_bson, Bson, Document};
use serde_json::Value;

use super::document_to_json;
use crate::{
    database::{Collection, DocumentStore},
    models::AddProductRequest,
    utils::{decode_image, encode_image, AppError, AppResult},
};

const IMAGE_FIELD: &str = "product_image";

/// `null`, blank strings and empty containers count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Validates, stores and returns a new product.
///
/// The image is decoded and stored as the re-encoding of the same bytes, so a
/// data-URI prefix is dropped but the content is never transformed.
pub async fn add_product(store: &dyn DocumentStore, request: AddProductRequest) -> AppResult<Value> {
    let (fields, image) = request.into_parts();

    let mut document = Document::new();
    for (name, value) in fields {
        let value = value
            .filter(|v| !is_blank(v))
            .ok_or_else(|| AppError::MissingField(name.to_string()))?;
        let value = to_bson(&value).map_err(|e| AppError::InvalidRequest(e.to_string()))?;
        document.insert(name, value);
    }

    let image = image
        .filter(|payload| !payload.trim().is_empty())
        .ok_or_else(|| AppError::MissingField(IMAGE_FIELD.to_string()))?;
    let bytes = decode_image(&image)?;
    document.insert(IMAGE_FIELD, encode_image(&bytes));

    let id = store.insert(Collection::Products, document.clone()).await?;
    log::info!("✅ Product stored: {} ({} image bytes)", id, bytes.len());
    document.insert("_id", id);

    Ok(document_to_json(document))
}

/// Every product, with binary images re-encoded as base64 strings.
pub async fn list_products(store: &dyn DocumentStore) -> AppResult<Vec<Value>> {
    let documents = store.find_many(Collection::Products, doc! {}).await?;

    Ok(documents
        .into_iter()
        .map(normalize_image)
        .map(document_to_json)
        .collect())
}

fn normalize_image(mut document: Document) -> Document {
    let encoded = match document.get(IMAGE_FIELD) {
        Some(Bson::Binary(binary)) => Some(encode_image(&binary.bytes)),
        _ => None,
    };
    if let Some(encoded) = encoded {
        document.insert(IMAGE_FIELD, encoded);
    }
    document
}
