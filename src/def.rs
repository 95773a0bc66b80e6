//! Module-definition (`.def`) output.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::dump::ExportRecord;
use crate::error::Result;

/// Section keyword that opens the export list.
pub const EXPORTS_HEADER: &str = "EXPORTS";

/// Suffix that keeps an export out of the import library's public surface.
pub const PRIVATE_MARKER: &str = "PRIVATE";

/// Ordered export list destined for a `.def` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDefinition {
    pub exports: Vec<ExportRecord>,
}

impl ModuleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ExportRecord) {
        self.exports.push(record);
    }

    /// Export names in listing order.
    pub fn names(&self) -> Vec<&str> {
        self.exports.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn private_count(&self) -> usize {
        self.exports.iter().filter(|e| e.private).count()
    }

    /// Write the rendered definition to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for ModuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{EXPORTS_HEADER}")?;
        for export in &self.exports {
            if export.private {
                writeln!(f, "{} {PRIVATE_MARKER}", export.name)?;
            } else {
                writeln!(f, "{}", export.name)?;
            }
        }
        Ok(())
    }
}
