//! Password hashing and the legacy plaintext upgrade.

pub mod hasher;
pub mod upgrade;

pub use hasher::PasswordHasher;
pub use upgrade::upgrade_plaintext_passwords;
