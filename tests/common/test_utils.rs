//! Scratch workspaces with fake `dumpbin` and `lib` tools.
//!
//! The fakes are shell scripts launched through `sh`, so they only exist on
//! Unix hosts. Each records its arguments to `<tool>.args` in the workspace.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use dll2lib::{ArtifactPaths, Config, ToolCommand};
use tempfile::TempDir;

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a placeholder input library and return its path.
    pub fn dll(&self) -> PathBuf {
        let path = self.path().join("widgets.dll");
        fs::write(&path, b"MZ\x90\x00").unwrap();
        path
    }

    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths::for_input(self.dll())
    }

    fn script(&self, name: &str, body: &str) -> ToolCommand {
        let path = self.path().join(format!("{name}.sh"));
        fs::write(&path, body).unwrap();
        ToolCommand::new("sh").with_args([path.to_string_lossy().into_owned()])
    }

    /// Fake dump tool that writes `listing` to its `/out:` path.
    pub fn fake_dumpbin(&self, listing: &str, exit_code: i32) -> ToolCommand {
        let fixture = self.path().join("listing.txt");
        fs::write(&fixture, listing).unwrap();
        let body = format!(
            "printf '%s\\n' \"$@\" > '{args}'\ncat '{fixture}' > \"${{1#/out:}}\"\nexit {exit_code}\n",
            args = self.args_path("dumpbin").display(),
            fixture = fixture.display(),
        );
        self.script("dumpbin", &body)
    }

    /// Fake library tool that copies the `/def:` file to the `/out:` path.
    pub fn fake_lib(&self, exit_code: i32) -> ToolCommand {
        let body = format!(
            "printf '%s\\n' \"$@\" > '{args}'\ncp \"${{2#/def:}}\" \"${{3#/out:}}\"\nexit {exit_code}\n",
            args = self.args_path("lib").display(),
        );
        self.script("lib", &body)
    }

    /// Copy the script behind a fake tool into a directly runnable program,
    /// for passing as `--dumpbin` or `--lib`.
    pub fn executable(&self, name: &str) -> PathBuf {
        let body = fs::read_to_string(self.path().join(format!("{name}.sh"))).unwrap();
        let path = self.path().join(format!("{name}-bin"));
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn config(&self, listing: &str, dumpbin_exit: i32, lib_exit: i32) -> Config {
        Config {
            dumpbin: self.fake_dumpbin(listing, dumpbin_exit),
            lib: self.fake_lib(lib_exit),
            ..Config::default()
        }
    }

    /// Write `config` as JSON and return the file path.
    pub fn config_file(&self, config: &Config) -> PathBuf {
        let path = self.path().join("dll2lib.json");
        fs::write(&path, serde_json::to_string_pretty(config).unwrap()).unwrap();
        path
    }

    fn args_path(&self, tool: &str) -> PathBuf {
        self.path().join(format!("{tool}.args"))
    }

    pub fn invoked(&self, tool: &str) -> bool {
        self.args_path(tool).exists()
    }

    /// Arguments the fake `tool` received, one per element.
    pub fn args(&self, tool: &str) -> Vec<String> {
        fs::read_to_string(self.args_path(tool))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
