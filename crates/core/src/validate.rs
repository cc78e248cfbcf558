//! Commit-time validation of the menu.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{MenuItem, MenuItemId};

/// Reasons a menu cannot be committed or an item cannot be added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A menu item has an empty id.
    #[error("all dishes must have an id (item #{} has none)", index + 1)]
    EmptyId {
        /// Zero-based position of the offending item.
        index: usize,
    },

    /// Two menu items share the same id.
    #[error("duplicate id detected: {0}")]
    DuplicateId(MenuItemId),

    /// A required field of a new item is empty.
    #[error("please fill at least id and name for the new dish ({field} is empty)")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },
}

/// Check that every id is non-empty and unique.
///
/// Reports the first violation in menu order.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyId`] or [`ValidationError::DuplicateId`].
pub fn validate_menu_items(items: &[MenuItem]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.id.is_blank() {
            return Err(ValidationError::EmptyId { index });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ValidationError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

/// Check the fields required before a new item joins the draft.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when `id` or `name` is empty.
pub fn validate_new_item(item: &MenuItem) -> Result<(), ValidationError> {
    if item.id.is_blank() {
        return Err(ValidationError::MissingField { field: "id" });
    }
    if item.name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_string(),
            ..MenuItem::default()
        }
    }

    #[test]
    fn test_unique_ids_pass() {
        let items = vec![item("a", "A"), item("b", "B")];
        assert!(validate_menu_items(&items).is_ok());
        assert!(validate_menu_items(&[]).is_ok());
    }

    #[test]
    fn test_empty_id_reports_position() {
        let items = vec![item("a", "A"), item(" ", "B")];
        assert_eq!(
            validate_menu_items(&items),
            Err(ValidationError::EmptyId { index: 1 })
        );
    }

    #[test]
    fn test_duplicate_id_reports_id() {
        let items = vec![
            item("momo-1", "Veg Momos"),
            item("roll-1", "Roll"),
            item("momo-1", "Chicken Momos"),
        ];
        let err = validate_menu_items(&items).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateId(MenuItemId::new("momo-1")));
        assert_eq!(err.to_string(), "duplicate id detected: momo-1");
    }

    #[test]
    fn test_new_item_requires_id_and_name() {
        assert_eq!(
            validate_new_item(&item("", "Name")),
            Err(ValidationError::MissingField { field: "id" })
        );
        assert_eq!(
            validate_new_item(&item("x", "")),
            Err(ValidationError::MissingField { field: "name" })
        );
        assert!(validate_new_item(&item("x", "Name")).is_ok());
    }

    #[test]
    fn test_whitespace_only_id_counts_as_empty() {
        assert_eq!(
            validate_new_item(&item(" \t", "Name")),
            Err(ValidationError::MissingField { field: "id" })
        );
        assert_eq!(
            validate_menu_items(&[item("\n", "A")]),
            Err(ValidationError::EmptyId { index: 0 })
        );
    }
}
