//! The dump → definition → import library pipeline.
//!
//! Intermediate files are owned by [`IntermediateFile`] guards. Each guard is
//! dropped as soon as the step consuming its file finishes, so cleanup
//! happens whether or not later steps succeed.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::def::ModuleDefinition;
use crate::dump;
use crate::error::{Dll2LibError, Result};
use crate::exec::run_tool;

/// Files produced and consumed during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub input: PathBuf,
    pub dump: PathBuf,
    pub def: PathBuf,
    pub lib: PathBuf,
}

impl ArtifactPaths {
    /// Derive sibling `.dmp`, `.def` and `.lib` paths from the input library.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            dump: input.with_extension("dmp"),
            def: input.with_extension("def"),
            lib: input.with_extension("lib"),
            input,
        }
    }

    pub fn with_lib(mut self, lib: impl Into<PathBuf>) -> Self {
        self.lib = lib.into();
        self
    }
}

/// Removes its file on drop unless told to keep it.
#[derive(Debug)]
pub struct IntermediateFile {
    path: PathBuf,
    keep: bool,
}

impl IntermediateFile {
    pub fn new(path: impl Into<PathBuf>, keep: bool) -> Self {
        Self {
            path: path.into(),
            keep,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the file regardless of the cleanup policy.
    pub fn persist(mut self) -> PathBuf {
        self.keep = true;
        self.path.clone()
    }
}

impl Drop for IntermediateFile {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed intermediate file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "could not remove intermediate file"
            ),
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub paths: ArtifactPaths,
    pub definition: ModuleDefinition,
    /// `false` when the run stopped after writing the definition.
    pub archived: bool,
}

/// Run the export dump utility, writing its listing to `dump_path`.
pub fn export_dump(config: &Config, input: &Path, dump_path: &Path) -> Result<()> {
    info!(input = %input.display(), "dumping exports");
    let mut out = OsString::from("/out:");
    out.push(dump_path);
    run_tool(
        "dumpbin",
        &config.dumpbin,
        [out, "/exports".into(), input.as_os_str().to_os_string()],
    )
}

/// Run the library tool to build `lib_path` from `def_path`.
pub fn archive(config: &Config, def_path: &Path, lib_path: &Path) -> Result<()> {
    info!(def = %def_path.display(), machine = %config.machine, "building import library");
    let mut def = OsString::from("/def:");
    def.push(def_path);
    let mut out = OsString::from("/out:");
    out.push(lib_path);
    run_tool(
        "lib",
        &config.lib,
        [format!("/machine:{}", config.machine).into(), def, out],
    )
}

/// Convert `paths.input` into an import library.
pub fn run(config: &Config, paths: &ArtifactPaths) -> Result<RunSummary> {
    if !paths.input.is_file() {
        return Err(Dll2LibError::InputNotFound(paths.input.clone()));
    }
    let keep = config.keep_intermediates;

    // Guards only own files this run produced; a file already at the path
    // is left alone when its step fails.
    let dump_existed = paths.dump.exists();
    if let Err(err) = export_dump(config, &paths.input, &paths.dump) {
        if !dump_existed {
            drop(IntermediateFile::new(&paths.dump, keep));
        }
        return Err(err);
    }
    let dump_file = IntermediateFile::new(&paths.dump, keep);

    let definition = dump::transform(dump_file.path(), &paths.def, &config.layout)?;
    let def_file = IntermediateFile::new(&paths.def, keep);
    drop(dump_file);

    if config.def_only {
        def_file.persist();
        info!(def = %paths.def.display(), "stopping after module definition");
        return Ok(RunSummary {
            paths: paths.clone(),
            definition,
            archived: false,
        });
    }

    archive(config, def_file.path(), &paths.lib)?;
    drop(def_file);

    info!(lib = %paths.lib.display(), "import library created");
    Ok(RunSummary {
        paths: paths.clone(),
        definition,
        archived: true,
    })
}
