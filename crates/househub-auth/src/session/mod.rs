//! Opaque session tokens and the in-memory registry that maps them to users.

pub mod registry;

pub use registry::{MemorySessionRegistry, SessionRegistry, SessionToken};
