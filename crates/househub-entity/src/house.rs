//! House entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A house users are sorted into, as stored in `houses.json`.
///
/// Only `name` is interpreted. `id`, `points`, `color` and anything else
/// are served back exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// Unique house name; signup requests refer to houses by name.
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
