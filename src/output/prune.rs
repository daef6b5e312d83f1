//! Empty-value pruning for JSON output.

use serde_json::{Map, Value};

/// Remove nulls, blank strings, and containers left empty after pruning.
///
/// The root never comes back as `null`: a tree that prunes away entirely
/// becomes an empty object.
pub fn prune_empty(value: Value) -> Value {
    prune(value).unwrap_or_else(|| Value::Object(Map::new()))
}

/// Bottom-up pruning; `None` means "drop this value from its parent".
pub fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Array(items) => {
            let kept: Vec<Value> = items.into_iter().filter_map(prune).collect();
            (!kept.is_empty()).then_some(Value::Array(kept))
        }
        Value::Object(map) => {
            let kept: Map<String, Value> = map
                .into_iter()
                .filter_map(|(k, v)| prune(v).map(|v| (k, v)))
                .collect();
            (!kept.is_empty()).then_some(Value::Object(kept))
        }
        other => Some(other),
    }
}
