//! Build import libraries from a DLL's export table.
//!
//! The conversion runs `dumpbin /exports`, turns the listing into a
//! module-definition file, and feeds that to `lib`.

/// Pipeline configuration
pub mod config;
/// Module-definition output
pub mod def;
/// Dump listing parser
pub mod dump;
pub mod error;
/// External tool execution
pub mod exec;
pub mod logging;
pub mod pipeline;

pub use config::{Config, ToolCommand};
pub use def::ModuleDefinition;
pub use error::{Dll2LibError, Result, FAILURE_EXIT_CODE};
pub use pipeline::{run, ArtifactPaths, RunSummary};
