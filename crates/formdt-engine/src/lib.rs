pub mod formatting;
pub mod io;
pub mod notebook;

// Re-export key types for easier usage
pub use formatting::{DEFAULT_LINE_LENGTH, FormatOptions, format_markdown};
pub use io::*;
pub use notebook::{
    CellSelection, NotebookError, format_cells, format_notebook, notebook_to_string, write_notebook,
};
