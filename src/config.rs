//! Configuration for the conversion pipeline.
//!
//! Defaults reproduce a plain `dumpbin` + `lib` run targeting ARM. A JSON
//! file can override any field; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dump::DumpLayout;
use crate::error::{Dll2LibError, Result};

/// Default `/machine:` value passed to the library tool.
pub const DEFAULT_MACHINE: &str = "arm";

/// How to launch one external tool.
///
/// `args` are placed before the pipeline's own arguments, which allows
/// wrappers such as `wine dumpbin.exe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Master configuration for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export dump utility.
    pub dumpbin: ToolCommand,
    /// Import library generator.
    pub lib: ToolCommand,
    /// Target architecture for the import library.
    pub machine: String,
    /// Positional layout of the dump header.
    pub layout: DumpLayout,
    /// Keep the `.dmp` and `.def` files after use.
    pub keep_intermediates: bool,
    /// Stop once the `.def` file has been written.
    pub def_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dumpbin: ToolCommand::new("dumpbin"),
            lib: ToolCommand::new("lib"),
            machine: DEFAULT_MACHINE.to_string(),
            layout: DumpLayout::default(),
            keep_intermediates: false,
            def_only: false,
        }
    }
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Dll2LibError::Config(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Dll2LibError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }
}
