//! Header validation for `dumpbin /exports` listings.
//!
//! The listing starts with a fixed-shape block. All positional assumptions
//! about that block live in [`DumpLayout`] so a change in the tool's output
//! only touches this file.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Dll2LibError, Result};

/// Marker line identifying a dynamic-link library dump.
pub const FILE_TYPE_DLL: &str = "File Type: DLL";

/// Prefix of the export table column header line.
pub const COLUMN_HEADER_PREFIX: &str = "ordinal";

/// Line offsets (zero-based) of the fixed header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpLayout {
    /// Line holding the `File Type:` declaration.
    pub file_type_line: usize,
    /// Line holding the `ordinal hint RVA name` column header.
    pub column_header_line: usize,
}

impl Default for DumpLayout {
    fn default() -> Self {
        Self {
            file_type_line: 3,
            column_header_line: 14,
        }
    }
}

/// Consume and validate the header block, leaving `lines` positioned at the
/// first export line.
///
/// Returns the number of lines consumed.
pub fn parse_header<'a, I>(lines: &mut I, layout: &DumpLayout) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    if layout.file_type_line >= layout.column_header_line {
        return Err(Dll2LibError::Config(format!(
            "file_type_line ({}) must precede column_header_line ({})",
            layout.file_type_line, layout.column_header_line
        )));
    }

    for index in 0..layout.column_header_line {
        let line = lines
            .next()
            .ok_or_else(|| Dll2LibError::eof("the export table column header"))?;
        if index == layout.file_type_line && line.trim() != FILE_TYPE_DLL {
            return Err(Dll2LibError::dump_format(
                index + 1,
                format!("'{FILE_TYPE_DLL}', found '{}'", line.trim()),
            ));
        }
    }

    let header_line = layout.column_header_line + 1;
    let header = lines
        .next()
        .ok_or_else(|| Dll2LibError::eof("the export table column header"))?;
    if !header.trim_start().starts_with(COLUMN_HEADER_PREFIX) {
        return Err(Dll2LibError::dump_format(
            header_line,
            format!("a column header starting with '{COLUMN_HEADER_PREFIX}'"),
        ));
    }

    let separator = lines
        .next()
        .ok_or_else(|| Dll2LibError::eof("the blank line after the column header"))?;
    if !separator.trim().is_empty() {
        return Err(Dll2LibError::dump_format(
            header_line + 1,
            "a blank line after the column header",
        ));
    }

    debug!(lines = header_line + 1, "dump header validated");
    Ok(header_line + 1)
}
