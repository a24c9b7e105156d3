use actix_multipart::form::{text::Text, MultipartForm};
use serde::Deserialize;
use serde_json::Value;

/// Add-product body, sent as JSON, a URL-encoded form or multipart text fields.
///
/// Text fields keep whatever JSON type the client used; form posts yield strings.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct AddProductRequest {
    pub product_name: Option<Value>,
    pub product_price: Option<Value>,
    pub discount: Option<Value>,
    pub description: Option<Value>,
    /// Raw base64 or a `data:image/...;base64,` URI
    pub product_image: Option<String>,
}

impl AddProductRequest {
    /// Required text fields in validation order, then the image.
    pub fn into_parts(self) -> ([(&'static str, Option<Value>); 4], Option<String>) {
        (
            [
                ("product_name", self.product_name),
                ("product_price", self.product_price),
                ("discount", self.discount),
                ("description", self.description),
            ],
            self.product_image,
        )
    }
}

/// Add-product body as posted by a browser `FormData` (`multipart/form-data`).
#[derive(MultipartForm)]
pub struct AddProductForm {
    pub product_name: Option<Text<String>>,
    pub product_price: Option<Text<String>>,
    pub discount: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub product_image: Option<Text<String>>,
}

impl From<AddProductForm> for AddProductRequest {
    fn from(form: AddProductForm) -> Self {
        let text = |field: Option<Text<String>>| field.map(|t| Value::String(t.into_inner()));

        Self {
            product_name: text(form.product_name),
            product_price: text(form.product_price),
            discount: text(form.discount),
            description: text(form.description),
            product_image: form.product_image.map(Text::into_inner),
        }
    }
}
