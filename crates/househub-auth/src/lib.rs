//! # househub-auth
//!
//! Authentication and session handling for HouseHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and the plaintext upgrade pass
//! - `credentials`: email/password verification with a single failure kind
//! - `session`: the in-memory token → user id registry
//! - `gate`: allow/redirect decisions for protected pages

pub mod credentials;
pub mod gate;
pub mod password;
pub mod session;

pub use credentials::{CredentialVerifier, INVALID_CREDENTIALS};
pub use gate::{GateDecision, RouteGate};
pub use password::PasswordHasher;
pub use session::{MemorySessionRegistry, SessionRegistry, SessionToken};
