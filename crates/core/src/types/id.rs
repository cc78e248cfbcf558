//! String newtypes for menu identifiers.
//!
//! Use the `define_string_id!` macro to create type-safe wrappers that keep
//! item ids and image slugs from being mixed up.

/// Macro to define a type-safe string identifier.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Default`
/// - Accessors: `new()`, `as_str()`, `into_inner()`, `is_blank()`
/// - `From<&str>`, `From<String>`, `Display` and `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use swift_menu_core::define_string_id;
/// define_string_id!(DishId);
/// define_string_id!(TableId);
///
/// let dish = DishId::new("momo-1");
/// let table = TableId::new("momo-1");
///
/// // These are different types, so this won't compile:
/// // let _: DishId = table;
/// assert_eq!(dish.as_str(), table.as_str());
/// ```
#[macro_export]
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the identifier is empty or only whitespace.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(MenuItemId);
define_string_id!(ImageSlug);

impl ImageSlug {
    /// Whether the slug can be used as a bare file stem.
    ///
    /// Rejects blank slugs, path separators and anything starting with a dot.
    #[must_use]
    pub fn is_file_safe(&self) -> bool {
        let slug = self.as_str();
        !self.is_blank()
            && !slug.starts_with('.')
            && !slug.contains(['/', '\\'])
            && !slug.contains("..")
    }
}
