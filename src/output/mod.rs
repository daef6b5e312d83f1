//! Output rendering: tables, tab-separated text, pruned JSON, user templates,
//! and raw streams.
//!
//! Commands build a [`TableData`] and a serializable detail value and hand both
//! to [`render_table`] (or just the value to [`render`]). Mode-specific logic
//! lives here and nowhere else.

mod fields;
mod options;
mod prune;
mod query;
mod render;
mod table;
mod template;

pub use fields::select_fields;
pub use options::{no_color_from_env, parse_field_list, Mode, OutputFlags, OutputOptions, TableData};
pub use prune::{prune, prune_empty};
pub use query::{collapse, evaluate, evaluate_with, Jq, QueryEngine};
pub use render::{
    human_size, render, render_stream, render_table, shape_json, should_color, write_table,
    write_to_file, write_value,
};
pub use table::{format_table, COLUMN_PADDING};
pub use template::render_template;
