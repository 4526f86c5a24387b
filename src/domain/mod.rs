pub mod order;
pub mod item;

pub use order::*;
pub use item::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any JSON scalar into the text a form field would show.
///
/// Numbers keep their JSON spelling, strings pass through untouched and
/// `null` becomes the empty string. Pair with `#[serde(default)]` so that
/// missing keys are empty too.
pub(crate) fn field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}
