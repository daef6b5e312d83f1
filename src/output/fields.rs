//! Dotted-path field selection over decoded JSON trees.

use serde_json::{Map, Value};

/// Project `value` down to `paths`.
///
/// Each path is `head[.rest]`. A bare head copies the whole value under that
/// key; a longer path recurses into the head's object and merges with what
/// earlier paths sharing the prefix already selected. Unknown keys are
/// omitted. Arrays at the root are projected element by element so list
/// output can be narrowed the same way as detail output.
pub fn select_fields(value: Value, paths: &[String]) -> Value {
    if paths.is_empty() {
        return value;
    }
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| select_fields(item, paths))
                .collect(),
        ),
        Value::Object(map) => Value::Object(select_from_map(&map, paths)),
        other => other,
    }
}

fn select_from_map(map: &Map<String, Value>, paths: &[String]) -> Map<String, Value> {
    let mut result = Map::new();
    for path in paths {
        if let Some((head, selected)) = select_path(map, path) {
            merge_into(&mut result, head, selected);
        }
    }
    result
}

/// Select one dotted path; `None` when it matches nothing.
fn select_path(map: &Map<String, Value>, path: &str) -> Option<(String, Value)> {
    let path = path.trim();
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    if head.is_empty() {
        return None;
    }
    let value = map.get(head)?;
    match rest.filter(|r| !r.is_empty()) {
        None => Some((head.to_string(), value.clone())),
        Some(rest) => {
            let child = value.as_object()?;
            let (child_key, child_value) = select_path(child, rest)?;
            let mut partial = Map::new();
            partial.insert(child_key, child_value);
            Some((head.to_string(), Value::Object(partial)))
        }
    }
}

/// Deep-merge `incoming` under `key`. Objects merge key by key; anything else
/// replaces what was there.
fn merge_into(target: &mut Map<String, Value>, key: String, incoming: Value) {
    match (target.get_mut(&key), incoming) {
        (Some(Value::Object(existing)), Value::Object(incoming)) => {
            for (k, v) in incoming {
                merge_into(existing, k, v);
            }
        }
        (_, incoming) => {
            target.insert(key, incoming);
        }
    }
}
