//! Email/password verification.

use std::sync::Arc;

use tracing::{info, warn};

use househub_core::error::AppError;
use househub_core::result::AppResult;
use househub_entity::user::UserIdentity;
use househub_storage::repositories::UserRepository;

use crate::password::PasswordHasher;

/// The one message every failed verification carries.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Checks an email/password pair against the user dataset.
///
/// An unknown email and a wrong password produce the same
/// [`INVALID_CREDENTIALS`] authentication error, and both paths perform one
/// Argon2 verification, so neither the response nor its timing tells them apart.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    /// User dataset.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Hash verified against when the email is unknown.
    decoy_hash: String,
}

impl CredentialVerifier {
    /// Creates a verifier. Computes the decoy hash up front.
    pub fn new(users: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> AppResult<Self> {
        let decoy_hash = hasher.hash_password("househub-decoy-password")?;
        Ok(Self {
            users,
            hasher,
            decoy_hash,
        })
    }

    /// Verifies the credentials and returns the sanitized identity.
    ///
    /// Storage failures propagate as server errors; every credential
    /// mismatch is [`INVALID_CREDENTIALS`].
    pub async fn verify(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        let user = self.users.find_by_email(email).await?;

        let stored = match &user {
            Some(u) if self.hasher.is_hash(&u.password_hash) => u.password_hash.clone(),
            Some(u) => {
                warn!(user_id = u.id, "Stored password is not a hash; rejecting login");
                self.decoy_hash.clone()
            }
            None => self.decoy_hash.clone(),
        };

        let matches = self
            .hasher
            .verify_blocking(password.to_string(), stored)
            .await?;

        match user {
            Some(u) if matches && self.hasher.is_hash(&u.password_hash) => {
                info!(user_id = u.id, "Credentials verified");
                Ok(u.identity())
            }
            _ => {
                info!(email = %email, "Credential verification failed");
                Err(AppError::authentication(INVALID_CREDENTIALS))
            }
        }
    }
}
