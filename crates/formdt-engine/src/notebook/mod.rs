//! Jupyter notebook support.
//!
//! A notebook is handled as an untyped [`serde_json::Value`] so that metadata,
//! outputs and key order survive a round trip untouched. Only the `source` of
//! selected markdown cells is rewritten.

mod selection;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::formatting::{FormatOptions, format_markdown};

pub use selection::CellSelection;

#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("Failed to read notebook {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse notebook {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write notebook {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize notebook: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Invalid cell selection {spec:?}: {reason}")]
    InvalidCellSelection { spec: String, reason: String },
}

/// Load the notebook at `path` and format its selected markdown cells.
pub fn format_notebook(
    path: &Path,
    options: &FormatOptions,
    selection: &CellSelection,
) -> Result<Value, NotebookError> {
    let text = fs::read_to_string(path).map_err(|source| NotebookError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut notebook: Value =
        serde_json::from_str(&text).map_err(|source| NotebookError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let formatted = format_cells(&mut notebook, options, selection);
    log::debug!("formatted {formatted} markdown cell(s) in {}", path.display());
    Ok(notebook)
}

/// Format the selected markdown cells of an already loaded notebook in place.
///
/// Returns the number of cells that were rewritten. A notebook without a
/// `cells` array has nothing to format.
pub fn format_cells(
    notebook: &mut Value,
    options: &FormatOptions,
    selection: &CellSelection,
) -> usize {
    let Some(cells) = notebook.get_mut("cells").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut formatted = 0;
    for (index, cell) in cells.iter_mut().enumerate() {
        if cell.get("cell_type").and_then(Value::as_str) != Some("markdown") {
            continue;
        }
        if !selection.includes(index) {
            log::debug!("skipping unselected markdown cell {index}");
            continue;
        }
        let Some(cell) = cell.as_object_mut() else {
            continue;
        };

        let text = match cell.get("source") {
            Some(Value::Array(parts)) => parts.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(text)) => text.clone(),
            _ => String::new(),
        };
        let lines = format_markdown(&text, options)
            .split_inclusive('\n')
            .map(|line| Value::String(line.to_string()))
            .collect();
        cell.insert("source".to_string(), Value::Array(lines));
        formatted += 1;
    }
    formatted
}

/// Serialize a notebook the way Jupyter writes it: one-space indentation,
/// non-ASCII left as is, and a trailing newline.
pub fn notebook_to_string(notebook: &Value) -> Result<String, NotebookError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    notebook
        .serialize(&mut serializer)
        .map_err(NotebookError::Serialize)?;

    // serde_json only emits UTF-8
    let mut out = String::from_utf8_lossy(&buf).into_owned();
    out.push('\n');
    Ok(out)
}

pub fn write_notebook(notebook: &Value, path: &Path) -> Result<(), NotebookError> {
    let content = notebook_to_string(notebook)?;
    fs::write(path, content).map_err(|source| NotebookError::Write {
        path: path.to_path_buf(),
        source,
    })
}
