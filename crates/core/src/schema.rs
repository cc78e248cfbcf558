//! Shape check for shop documents coming from outside the process.
//!
//! Used for persisted copies and imported files. A document is accepted only
//! if it is an object with a `shopInfo` object and a `menuItems` array, and
//! the whole value deserializes into [`ShopData`].

use serde::Deserialize as _;
use serde_json::Value;
use thiserror::Error;

use crate::types::ShopData;

/// Why a document was rejected.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The text is not valid JSON.
    #[error("could not parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The top-level value is not an object.
    #[error("invalid JSON format: expected {{ shopInfo, menuItems }}")]
    NotAnObject,

    /// `shopInfo` is absent or not an object.
    #[error("invalid JSON format: `shopInfo` must be an object")]
    MissingShopInfo,

    /// `menuItems` is absent or not an array.
    #[error("invalid JSON format: `menuItems` must be an array")]
    MenuItemsNotSequence,

    /// The fields are present but a value has the wrong type.
    #[error("malformed shop document: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Check the shape of a JSON value and convert it into a [`ShopData`].
///
/// # Errors
///
/// Returns the first [`ShapeError`] found.
pub fn check_shape(value: &Value) -> Result<ShopData, ShapeError> {
    let object = value.as_object().ok_or(ShapeError::NotAnObject)?;

    if !object.get("shopInfo").is_some_and(Value::is_object) {
        return Err(ShapeError::MissingShopInfo);
    }
    if !object.get("menuItems").is_some_and(Value::is_array) {
        return Err(ShapeError::MenuItemsNotSequence);
    }

    ShopData::deserialize(value).map_err(ShapeError::Malformed)
}

/// Parse JSON text and check its shape.
///
/// # Errors
///
/// Returns [`ShapeError::Parse`] for invalid JSON, otherwise as [`check_shape`].
pub fn parse_document(raw: &str) -> Result<ShopData, ShapeError> {
    let value: Value = serde_json::from_str(raw).map_err(ShapeError::Parse)?;
    check_shape(&value)
}
