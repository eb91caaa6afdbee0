use serde::{Deserialize, Serialize};

/// A shop user
///
/// The email is carried as opaque text; format validation is the
/// boundary's concern, not the catalog's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl User {
    /// Creates a new user record
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
