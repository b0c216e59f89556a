//! Data models
//!
//! Wire types exchanged with the branch backend. Field names are camelCase
//! on the wire; read models tolerate missing optional fields.

pub mod branch;
pub mod dining_table;
pub mod menu;
pub mod reservation;
pub mod staff;
pub mod working_hour;

// Re-exports
pub use branch::*;
pub use dining_table::*;
pub use menu::*;
pub use reservation::*;
pub use staff::*;
pub use working_hour::*;

use serde::{Deserialize, Deserializer};

/// Accept either a JSON string or a JSON number and keep it as a string.
///
/// Table numbers are typed as free text in the form but some backends
/// store them as integers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
