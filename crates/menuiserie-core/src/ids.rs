//! Newtype IDs for type-safe identifiers.
//!
//! Keeps a product id from being passed where an option id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(ProductId);
define_id!(OptionId);
define_id!(SelectionId);
define_id!(OrderId);

impl SelectionId {
    /// Generate a new session-unique ID.
    pub fn generate() -> Self {
        Self(generate_id())
    }
}

/// Timestamp mixed with a process-wide counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("sel-{:x}-{:x}", timestamp, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("fenetre-1");
        assert_eq!(id.as_str(), "fenetre-1");
        assert_eq!(id, "fenetre-1");
    }

    #[test]
    fn test_selection_id_generation() {
        let id1 = SelectionId::generate();
        let id2 = SelectionId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("sel-"));
    }

    #[test]
    fn test_id_from_string() {
        let id: OptionId = "judas".into();
        assert_eq!(id.as_str(), "judas");
        assert_eq!(format!("{}", id), "judas");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = OptionId::new("aluminium");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"aluminium\"");
    }
}
