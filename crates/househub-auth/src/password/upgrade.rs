//! One-time upgrade of plaintext passwords left in the user dataset.

use std::collections::HashMap;

use tracing::{info, warn};

use househub_core::result::AppResult;
use househub_entity::user::UserId;
use househub_storage::repositories::UserRepository;

use super::hasher::PasswordHasher;

/// Replaces every stored password that is not a PHC hash with its Argon2id hash.
///
/// Hashing happens outside the repository's write lock; the write cycle only
/// swaps values that still hold the plaintext that was hashed. Returns the
/// number of records rewritten.
pub async fn upgrade_plaintext_passwords(
    users: &UserRepository,
    hasher: &PasswordHasher,
) -> AppResult<usize> {
    let legacy: Vec<(UserId, String)> = users
        .find_all()
        .await?
        .into_iter()
        .filter(|u| !hasher.is_hash(&u.password_hash))
        .map(|u| (u.id, u.password_hash))
        .collect();

    if legacy.is_empty() {
        return Ok(0);
    }

    warn!(count = legacy.len(), "Found plaintext passwords in user dataset");

    let mut replacements: HashMap<UserId, (String, String)> = HashMap::new();
    for (id, plaintext) in legacy {
        let hash = hasher.hash_blocking(plaintext.clone()).await?;
        replacements.insert(id, (plaintext, hash));
    }

    let changed = users
        .update_each(|user| match replacements.get(&user.id) {
            Some((plaintext, hash)) if user.password_hash == *plaintext => {
                user.password_hash = hash.clone();
                true
            }
            _ => false,
        })
        .await?;

    info!(count = changed, "Upgraded plaintext passwords to Argon2id");
    Ok(changed)
}
