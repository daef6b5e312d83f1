//! Configuration sources, applied in order: global file, explicit file, environment.

pub mod env;
pub mod explicit_file;
pub mod global_file;
