//! User entity model.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Numeric user identifier as stored in the user dataset.
pub type UserId = i64;

/// A registered user as stored in `users.json`.
///
/// Only the keys authentication depends on are typed. Profile data such as
/// `name`, `house`, `points` or `lastActive` stays in `fields` exactly as it
/// was written, so a loosely typed record never makes the dataset unreadable
/// and rewriting it never drops anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address, unique ignoring case.
    pub email: String,
    /// Argon2id PHC string. Stored under the dataset's `password` key.
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Every other field of the record.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    /// Case-insensitive email comparison.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// Display name, empty when absent or not a string.
    pub fn name(&self) -> &str {
        self.str_field("name")
    }

    /// Assigned house name, empty when absent or not a string.
    pub fn house(&self) -> &str {
        self.str_field("house")
    }

    /// The minimal identity returned after a successful login.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            email: self.email.clone(),
            name: self.name().to_string(),
        }
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

/// A user record with the password removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            fields: user.fields,
        }
    }
}

/// Sanitized identity returned by credential verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// House the user joins.
    pub house: String,
}

impl NewUser {
    /// Build the stored record for a freshly signed-up user.
    pub fn into_user(self, id: UserId, now: DateTime<Utc>) -> User {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("house".to_string(), json!(self.house));
        fields.insert("points".to_string(), json!(0));
        fields.insert("level".to_string(), json!(1));
        fields.insert("streak".to_string(), json!(0));
        fields.insert("badges".to_string(), json!([]));
        fields.insert(
            "lastActive".to_string(),
            json!(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            fields,
        }
    }
}
