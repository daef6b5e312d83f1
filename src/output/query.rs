//! Query evaluation over decoded JSON trees.
//!
//! The renderer only sees [`QueryEngine`]; the default engine is [`Jq`].

use crate::error::TfcError;
use jaq_core::load::{Arena, File, Loader};
use jaq_core::{Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

/// A query language that turns one input tree into zero or more emitted values.
pub trait QueryEngine {
    fn emit(&self, tree: &Value, expression: &str) -> Result<Vec<Value>, TfcError>;
}

/// jq engine backed by jaq with the jq standard library loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Jq;

impl QueryEngine for Jq {
    fn emit(&self, tree: &Value, expression: &str) -> Result<Vec<Value>, TfcError> {
        let loader = Loader::new(jaq_std::defs().chain(jaq_json::defs()));
        let arena = Arena::default();
        let program = File {
            code: expression,
            path: (),
        };

        let modules = loader
            .load(&arena, program)
            .map_err(|errs| TfcError::QueryParse(format!("{}: {:?}", expression, errs)))?;
        let filter = Compiler::default()
            .with_funs(jaq_std::funs().chain(jaq_json::funs()))
            .compile(modules)
            .map_err(|errs| TfcError::QueryParse(format!("{}: {:?}", expression, errs)))?;

        let inputs = RcIter::new(core::iter::empty());
        let outputs = filter.run((Ctx::new([], &inputs), Val::from(tree.clone())));

        // The first error value aborts the whole evaluation
        let mut emitted = Vec::new();
        for output in outputs {
            let val = output.map_err(|e| TfcError::QueryEval(e.to_string()))?;
            emitted.push(Value::from(val));
        }
        Ok(emitted)
    }
}

/// Collapse emissions: none → `null`, one → the value itself, more → an array
/// in emission order.
pub fn collapse(mut emitted: Vec<Value>) -> Value {
    match emitted.len() {
        0 => Value::Null,
        1 => emitted.remove(0),
        _ => Value::Array(emitted),
    }
}

/// Run `expression` against `tree` with `engine` and collapse the result.
pub fn evaluate_with<E: QueryEngine + ?Sized>(
    engine: &E,
    tree: &Value,
    expression: &str,
) -> Result<Value, TfcError> {
    engine.emit(tree, expression).map(collapse)
}

/// Run `expression` with the default engine.
pub fn evaluate(tree: &Value, expression: &str) -> Result<Value, TfcError> {
    evaluate_with(&Jq, tree, expression)
}
