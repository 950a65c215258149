use std::collections::BTreeSet;
use std::str::FromStr;

use super::NotebookError;

/// Which markdown cells of a notebook get formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CellSelection {
    /// Leave every cell alone.
    #[default]
    None,
    /// Every markdown cell.
    AllMarkdown,
    /// Only the markdown cells at these zero-based indices.
    Indices(BTreeSet<usize>),
}

impl CellSelection {
    /// Builds a selection from the CLI's `--cells` and `--markdown` options.
    ///
    /// Explicit indices take precedence over the all-markdown flag.
    pub fn from_flags(cells: Option<&str>, all_markdown: bool) -> Result<Self, NotebookError> {
        match cells {
            Some(spec) => spec.parse(),
            None if all_markdown => Ok(Self::AllMarkdown),
            None => Ok(Self::None),
        }
    }

    pub fn includes(&self, index: usize) -> bool {
        match self {
            Self::None => false,
            Self::AllMarkdown => true,
            Self::Indices(indices) => indices.contains(&index),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for CellSelection {
    type Err = NotebookError;

    /// Parses `"0,2,5"` or `"1-3,7"`; ranges are inclusive.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| NotebookError::InvalidCellSelection {
            spec: spec.to_string(),
            reason,
        };

        let mut indices = BTreeSet::new();
        for part in spec.split(',').map(str::trim) {
            if part.is_empty() {
                return Err(invalid("empty cell index".to_string()));
            }
            match part.split_once('-') {
                Some((start, end)) => {
                    let start = parse_index(start).map_err(&invalid)?;
                    let end = parse_index(end).map_err(&invalid)?;
                    if start > end {
                        return Err(invalid(format!("range {start}-{end} is reversed")));
                    }
                    indices.extend(start..=end);
                }
                None => {
                    indices.insert(parse_index(part).map_err(&invalid)?);
                }
            }
        }
        Ok(Self::Indices(indices))
    }
}

fn parse_index(text: &str) -> Result<usize, String> {
    let text = text.trim();
    text.parse()
        .map_err(|_| format!("{text:?} is not a cell index"))
}
