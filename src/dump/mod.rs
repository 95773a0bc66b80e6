//! Transform `dumpbin /exports` listings into module definitions.
//!
//! The listing is parsed completely in memory; the `.def` file is only
//! written once the header, export table and `Summary` trailer all check out.

pub mod exports;
pub mod header;

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::def::ModuleDefinition;
use crate::error::{Dll2LibError, Result};

pub use exports::{
    is_private, parse_export_line, ExportRecord, NONAME_PLACEHOLDER, PRIVATE_EXPORTS,
};
pub use header::{parse_header, DumpLayout, FILE_TYPE_DLL};

/// First word of the section that follows the export table.
pub const SUMMARY_PREFIX: &str = "Summary";

/// Parse a complete dump listing.
pub fn parse_dump(text: &str, layout: &DumpLayout) -> Result<ModuleDefinition> {
    let mut lines = text.lines();
    let mut line_number = parse_header(&mut lines, layout)?;
    let mut definition = ModuleDefinition::new();
    let mut skipped = 0usize;

    loop {
        line_number += 1;
        let line = lines
            .next()
            .ok_or_else(|| Dll2LibError::eof("the blank line ending the export table"))?
            .trim();
        if line.is_empty() {
            break;
        }

        match parse_export_line(line, line_number)? {
            Some(record) => {
                debug!(
                    name = %record.name,
                    private = record.private,
                    forwarder = record.forwarder.as_deref(),
                    "export"
                );
                definition.push(record);
            }
            None => skipped += 1,
        }
    }

    line_number += 1;
    let trailer = lines
        .next()
        .ok_or_else(|| Dll2LibError::eof("the Summary section"))?;
    if !trailer.trim().starts_with(SUMMARY_PREFIX) {
        return Err(Dll2LibError::dump_format(
            line_number,
            format!("the '{SUMMARY_PREFIX}' section"),
        ));
    }

    debug!(
        exports = definition.exports.len(),
        ordinal_only = skipped,
        "dump parsed"
    );
    Ok(definition)
}

/// Read the dump at `dump_path` and write its module definition to `def_path`.
///
/// Bytes that are not valid UTF-8 are replaced before parsing. Nothing is
/// written when parsing fails.
pub fn transform(
    dump_path: &Path,
    def_path: &Path,
    layout: &DumpLayout,
) -> Result<ModuleDefinition> {
    let raw = fs::read(dump_path)?;
    let text = String::from_utf8_lossy(&raw);
    let definition = parse_dump(&text, layout)?;
    definition.write_to(def_path)?;

    info!(
        def = %def_path.display(),
        exports = definition.exports.len(),
        private = definition.private_count(),
        "module definition written"
    );
    Ok(definition)
}
