//! Render entry points: the only place that branches on [`Mode`].

use super::fields::select_fields;
use super::options::{Mode, OutputOptions, TableData};
use super::prune::{prune, prune_empty};
use super::query::evaluate;
use super::table::format_table;
use super::template::render_template;
use crate::error::TfcError;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

/// Render a non-tabular value. Template mode uses the template; every other
/// mode writes pruned JSON.
pub fn render<T: Serialize + ?Sized>(value: &T, options: &OutputOptions) -> Result<(), TfcError> {
    with_destination(options, |out, _is_tty| write_value(out, value, options))
}

/// Render a list or detail view. Table and plaintext modes use `table`; JSON and
/// template modes use `value` and ignore `table`.
pub fn render_table<T: Serialize + ?Sized>(
    table: &TableData,
    value: &T,
    options: &OutputOptions,
) -> Result<(), TfcError> {
    with_destination(options, |out, is_tty| {
        let color = should_color(options, is_tty);
        write_table(out, table, value, options, color)
    })
}

/// Copy a byte stream through unchanged, whatever the mode.
pub fn render_stream<R: Read + ?Sized>(reader: &mut R, options: &OutputOptions) -> Result<(), TfcError> {
    with_destination(options, |out, _is_tty| {
        io::copy(reader, out)?;
        Ok(())
    })
}

/// Write `value` according to the mode (never as a table).
pub fn write_value<W: Write + ?Sized, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    options: &OutputOptions,
) -> Result<(), TfcError> {
    match options.mode {
        Mode::Template => write_template(out, value, &options.template),
        Mode::Json | Mode::Plaintext | Mode::Table => write_json(out, value, options),
    }
}

/// Write a table/detail pair according to the mode.
pub fn write_table<W: Write + ?Sized, T: Serialize + ?Sized>(
    out: &mut W,
    table: &TableData,
    value: &T,
    options: &OutputOptions,
    color: bool,
) -> Result<(), TfcError> {
    match options.mode {
        Mode::Table => {
            let rendered = format_table(table, color);
            if !rendered.is_empty() {
                writeln!(out, "{}", rendered)?;
            }
            Ok(())
        }
        Mode::Plaintext => write_plaintext(out, table),
        Mode::Json | Mode::Template => write_value(out, value, options),
    }
}

/// JSON pipeline: prune, select fields, run the query, prune the result, and
/// write it indented. The root is never `null`.
pub fn shape_json<T: Serialize + ?Sized>(value: &T, options: &OutputOptions) -> Result<Value, TfcError> {
    let tree = serde_json::to_value(value)
        .map_err(|e| TfcError::Internal(format!("json marshal: {}", e)))?;
    let mut shaped = prune(tree).unwrap_or(Value::Null);

    let paths = options.field_paths();
    if !paths.is_empty() {
        shaped = select_fields(shaped, &paths);
    }
    if !options.query_expr.is_empty() {
        shaped = evaluate(&shaped, &options.query_expr)?;
    }
    Ok(prune_empty(shaped))
}

fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    options: &OutputOptions,
) -> Result<(), TfcError> {
    let shaped = shape_json(value, options)?;
    let text = serde_json::to_string_pretty(&shaped)
        .map_err(|e| TfcError::Internal(format!("json marshal pruned: {}", e)))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

fn write_template<W: Write + ?Sized, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    source: &str,
) -> Result<(), TfcError> {
    let tree = serde_json::to_value(value)
        .map_err(|e| TfcError::Template(format!("marshal: {}", e)))?;
    let rendered = render_template(source, &tree)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

fn write_plaintext<W: Write + ?Sized>(out: &mut W, table: &TableData) -> Result<(), TfcError> {
    if !table.headers.is_empty() {
        writeln!(out, "{}", table.headers.join("\t"))?;
    }
    for row in &table.rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

/// Headers are colored only when allowed by the options and the destination is
/// an interactive terminal.
pub fn should_color(options: &OutputOptions, is_tty: bool) -> bool {
    !options.no_color && is_tty
}

/// Run `write` against stdout or the configured output file. For a file, parent
/// directories are created first and a size summary goes to stderr once the
/// file is flushed and closed.
fn with_destination<F>(options: &OutputOptions, write: F) -> Result<(), TfcError>
where
    F: FnOnce(&mut dyn Write, bool) -> Result<(), TfcError>,
{
    match options.output_file.as_deref() {
        None => {
            let stdout = io::stdout();
            let is_tty = stdout.is_terminal();
            let mut lock = stdout.lock();
            write(&mut lock, is_tty)?;
            lock.flush()?;
            Ok(())
        }
        Some(path) => {
            let size = write_to_file(path, write)?;
            let stderr = io::stderr();
            let summary = format!("Wrote {} ({})", path.display(), human_size(size));
            if !options.no_color && stderr.is_terminal() {
                eprintln!("{}", summary.dimmed());
            } else {
                eprintln!("{}", summary);
            }
            Ok(())
        }
    }
}

/// Write into `path` through `write`, returning the final file size.
pub fn write_to_file<F>(path: &Path, write: F) -> Result<u64, TfcError>
where
    F: FnOnce(&mut dyn Write, bool) -> Result<(), TfcError>,
{
    let file_err = |source: io::Error| TfcError::FileIo {
        path: PathBuf::from(path),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_err)?;
    }
    let file = File::create(path).map_err(file_err)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, false)?;
    let file = writer.into_inner().map_err(|e| file_err(e.into_error()))?;
    file.sync_all().map_err(file_err)?;
    let size = file.metadata().map_err(file_err)?.len();
    Ok(size)
}

/// Human-readable byte size: `512B`, `1.5KB`, `3.0MB`.
pub fn human_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{}B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let suffix = ['K', 'M', 'G', 'T', 'P', 'E'][exp];
    format!("{:.1}{}B", bytes as f64 / div as f64, suffix)
}
