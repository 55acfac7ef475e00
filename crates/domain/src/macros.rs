//! Macro for implementing Display and FromStr for named operation enums
//!
//! Upstream names are matched exactly as they appear in input documents, so
//! parsing is case-sensitive: `"Item"` is accepted, `"item"` is not.
//!
//! # Example
//!
//! ```rust
//! use acctdoc_domain::impl_exact_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Entity {
//!     Header,
//!     Item,
//! }
//!
//! impl_exact_name_conversions!(Entity {
//!     Header => "Header",
//!     Item => "Item",
//! });
//!
//! assert_eq!(Entity::Item.as_str(), "Item");
//! assert!("item".parse::<Entity>().is_err());
//! ```

/// Implements `as_str`, Display and FromStr for an enum with fixed names.
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their exact names
#[macro_export]
macro_rules! impl_exact_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Exact upstream name of this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Unknown {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestEntity {
        Header,
        Item,
    }

    impl_exact_name_conversions!(TestEntity {
        Header => "Header",
        Item => "Item",
    });

    #[test]
    fn display_uses_exact_name() {
        assert_eq!(TestEntity::Header.to_string(), "Header");
        assert_eq!(TestEntity::Item.to_string(), "Item");
    }

    #[test]
    fn parses_exact_name() {
        assert_eq!(TestEntity::from_str("Item").unwrap(), TestEntity::Item);
        assert_eq!(TestEntity::from_str("Header").unwrap(), TestEntity::Header);
    }

    #[test]
    fn rejects_other_casing() {
        assert!(TestEntity::from_str("item").is_err());
        assert!(TestEntity::from_str("ITEM").is_err());
    }

    #[test]
    fn rejects_unknown_and_empty() {
        let result = TestEntity::from_str("Partner");
        assert!(result.unwrap_err().contains("Unknown TestEntity: Partner"));
        assert!(TestEntity::from_str("").is_err());
    }
}
