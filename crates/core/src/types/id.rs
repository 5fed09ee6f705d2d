//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `generate()` producing a prefixed random ID (collision-safe under
///   rapid sequential calls, unlike wall-clock timestamps)
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use bizfolio_core::define_id;
/// define_id!(FolderId, "f");
/// define_id!(ProductId, "p");
///
/// let folder_id = FolderId::new("f1");
/// let generated = ProductId::generate();
/// assert!(generated.as_str().starts_with("p-"));
///
/// // These are different types, so this won't compile:
/// // let _: FolderId = generated;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh prefixed ID with a random unique suffix.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, ::uuid::Uuid::new_v4().simple()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
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
    };
}

// Define standard entity IDs
define_id!(UserId, "u");
define_id!(CompanyId, "c");
define_id!(FolderId, "f");
define_id!(ProductId, "p");
define_id!(ImageId, "img");
define_id!(VariantId, "v");
