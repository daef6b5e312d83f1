//! User template rendering (MiniJinja syntax).
//!
//! The decoded tree is exposed as `data`. When the tree is an object, its
//! top-level keys are also bound as variables, so `{{ id }}` and
//! `{{ data.id }}` render the same value. A top-level key named `data` keeps
//! its own value and the whole tree is not bound.

use crate::error::TfcError;
use minijinja::Environment;
use serde_json::{Map, Value};

const TEMPLATE_NAME: &str = "output";

/// Render `source` against `tree`.
pub fn render_template(source: &str, tree: &Value) -> Result<String, TfcError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, source)
        .map_err(|e| TfcError::Template(format!("parse: {}", e)))?;
    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|e| TfcError::Template(format!("parse: {}", e)))?;
    template
        .render(template_context(tree))
        .map_err(|e| TfcError::Template(format!("exec: {}", e)))
}

fn template_context(tree: &Value) -> Value {
    let mut ctx = match tree {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    ctx.entry("data").or_insert_with(|| tree.clone());
    Value::Object(ctx)
}
