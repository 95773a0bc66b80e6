//! `dll2lib` CLI entry point.
//!
//! Parses arguments, layers them over the optional config file and runs the
//! conversion pipeline. Every failure exits with `FAILURE_EXIT_CODE`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{error::ErrorKind as ClapErrorKind, CommandFactory, Parser, ValueHint};
use dll2lib::{
    logging, ArtifactPaths, Config, Dll2LibError, RunSummary, ToolCommand, FAILURE_EXIT_CODE,
};

#[derive(Parser, Debug)]
#[command(
    name = "dll2lib",
    version,
    about = "Generate an import library from a DLL's export table",
    long_about = None,
    after_help = r#"EXAMPLES
  $ dll2lib widgets.dll                    # writes widgets.lib
  $ dll2lib --keep-intermediates widgets.dll
  $ dll2lib --machine x64 -o out/widgets.lib widgets.dll

NOTES
  - Requires dumpbin and lib on PATH (override with --dumpbin/--lib)
  - widgets.dmp and widgets.def are written next to the input"#
)]
struct Cli {
    #[arg(help = "Input DLL", value_hint = ValueHint::FilePath)]
    dll: PathBuf,
    #[arg(short = 'k', long, help = "Keep the .dmp and .def files")]
    keep_intermediates: bool,
    #[arg(
        short = 'o',
        long,
        help = "Import library path (default: <dll stem>.lib)",
        value_hint = ValueHint::FilePath
    )]
    output: Option<PathBuf>,
    #[arg(short = 'm', long, help = "Target architecture passed to lib (default: arm)")]
    machine: Option<String>,
    #[arg(long, help = "Export dump program (default: dumpbin)")]
    dumpbin: Option<String>,
    #[arg(long, help = "Library tool program (default: lib)")]
    lib: Option<String>,
    #[arg(long, help = "Stop after writing the .def file")]
    def_only: bool,
    #[arg(
        short = 'c',
        long,
        help = "JSON config file",
        value_hint = ValueHint::FilePath
    )]
    config: Option<PathBuf>,
    #[arg(short = 'v', long, help = "Enable debug logging")]
    verbose: bool,
    #[arg(long, help = "Emit log lines as JSON")]
    log_json: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if self.keep_intermediates {
            config.keep_intermediates = true;
        }
        if self.def_only {
            config.def_only = true;
        }
        if let Some(machine) = &self.machine {
            config.machine = machine.clone();
        }
        if let Some(program) = &self.dumpbin {
            config.dumpbin = ToolCommand::new(program.clone());
        }
        if let Some(program) = &self.lib {
            config.lib = ToolCommand::new(program.clone());
        }
        Ok(config)
    }

    fn artifact_paths(&self) -> ArtifactPaths {
        let paths = ArtifactPaths::for_input(&self.dll);
        match &self.output {
            Some(lib) => paths.with_lib(lib),
            None => paths,
        }
    }
}

fn main() {
    let exit_code = match Cli::try_parse() {
        Ok(cli) => match run(&cli) {
            Ok(_) => 0,
            Err(err) => {
                report_error(&err);
                FAILURE_EXIT_CODE
            }
        },
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                let _ = err.print();
                0
            }
            _ => {
                let _ = err.print();
                FAILURE_EXIT_CODE
            }
        },
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let level = if cli.verbose { "debug" } else { "info" };
    if cli.log_json {
        logging::init_tracing_json(level);
    } else {
        logging::init_tracing(level);
    }

    let config = cli.load_config()?;
    let summary = dll2lib::run(&config, &cli.artifact_paths())?;
    Ok(summary)
}

fn report_error(err: &anyhow::Error) {
    eprintln!("{err:#}");
    let is_usage = err
        .downcast_ref::<Dll2LibError>()
        .is_some_and(Dll2LibError::is_usage);
    if is_usage {
        eprintln!("{}", Cli::command().render_usage());
    }
}
