//! Export line parsing and the private-export table.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::error::{Dll2LibError, Result};

/// Name column value for exports that are only reachable by ordinal.
pub const NONAME_PLACEHOLDER: &str = "[NONAME]";

/// COM and RAS entry points that must not be imported by name.
pub const PRIVATE_EXPORTS: &[&str] = &[
    "DllCanUnloadNow",
    "DllGetClassObject",
    "DllGetClassFactoryFromClassString",
    "DllGetDocumentation",
    "DllInitialize",
    "DllInstall",
    "DllRegisterServer",
    "DllRegisterServerEx",
    "DllRegisterServerExW",
    "DllUnload",
    "DllUnregisterServer",
    "RasCustomDeleteEntryNotify",
    "RasCustomDial",
    "RasCustomDialDlg",
    "RasCustomEntryDlg",
];

static PRIVATE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PRIVATE_EXPORTS.iter().copied().collect());

/// Whether `name` must carry the `PRIVATE` marker in a module definition.
pub fn is_private(name: &str) -> bool {
    PRIVATE_SET.contains(name)
}

/// One named export from the dump listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub name: String,
    /// Target of a forwarded export, e.g. `NTDLL.RtlAcquireSRWLockExclusive`.
    pub forwarder: Option<String>,
    pub private: bool,
}

impl ExportRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let private = is_private(&name);
        Self {
            name,
            forwarder: None,
            private,
        }
    }

    pub fn with_forwarder(mut self, target: impl Into<String>) -> Self {
        self.forwarder = Some(target.into());
        self
    }
}

/// Parse one non-blank line of the export table.
///
/// The name is the last whitespace-separated token. When that token ends in
/// `)` the line carries a `(forwarded to X)` annotation and the name sits
/// three tokens earlier. Returns `Ok(None)` for ordinal-only exports.
pub fn parse_export_line(line: &str, line_number: usize) -> Result<Option<ExportRecord>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some(&last) = words.last() else {
        return Err(Dll2LibError::dump_format(line_number, "an export entry"));
    };

    let (name, forwarder) = if last.ends_with(')') {
        if words.len() < 4 {
            return Err(Dll2LibError::dump_format(
                line_number,
                "an export name before the forwarder annotation",
            ));
        }
        (words[words.len() - 4], Some(last.trim_end_matches(')')))
    } else {
        (last, None)
    };

    if name == NONAME_PLACEHOLDER {
        return Ok(None);
    }

    let record = ExportRecord::new(name);
    Ok(Some(match forwarder {
        Some(target) => record.with_forwarder(target),
        None => record,
    }))
}
