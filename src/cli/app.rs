//! Main CLI application

use crate::cli::commands::{EchoCommand, EnvCommand};
use crate::commander::Commander;
use crate::config::{load_settings, parse_settings_file, validate_settings, Settings};
use crate::error::CliError;
use crate::flag::{FlagSet, Slot};
use crate::logging::init_logging;
use crate::output::Output;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Program help used when the settings file does not provide one
const DEFAULT_HELP: &str = "subcmd demonstrates subcommand dispatch with global and per-command flags.";

/// Global flags as seen before dispatch
#[derive(Debug, Default, PartialEq)]
pub struct GlobalArgs {
    /// Settings file given with `-config`
    pub config: Option<PathBuf>,
    /// Whether `-v` was given
    pub verbose: bool,
}

/// CLI application
pub struct App {
    /// The configured commander
    commander: Commander,
    /// Settings it was built from
    settings: Settings,
    /// Global flag storage, filled in by the commander's global parse
    verbose: Slot<bool>,
    config: Slot<String>,
}

impl App {
    /// Create an app from settings
    pub fn new(settings: Settings) -> Self {
        let verbose = Slot::default();
        let config = Slot::default();

        let (bound_verbose, bound_config) = (verbose.clone(), config.clone());
        let mut commander = Commander::from_settings(&settings).with_flags(move |fset| {
            declare_globals(fset, &bound_verbose, &bound_config);
        });
        if settings.help.is_none() {
            commander.set_help(DEFAULT_HELP);
        }

        commander.register(commander.help_cmd());
        commander.register(EchoCommand::new());
        commander.register(EnvCommand::new());

        App {
            commander,
            settings,
            verbose,
            config,
        }
    }

    /// Send help and usage text to `output`
    pub fn with_output(mut self, output: Output) -> Self {
        self.commander.set_output(output);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn commander(&self) -> &Commander {
        &self.commander
    }

    /// Global flags as parsed by the last [`run`](App::run)
    pub fn globals(&self) -> GlobalArgs {
        let config = self.config.get();
        GlobalArgs {
            config: (!config.is_empty()).then(|| PathBuf::from(config)),
            verbose: self.verbose.get(),
        }
    }

    /// Run the application with command line arguments
    pub fn run(&mut self, args: Vec<String>) -> Result<(), CliError> {
        self.commander.run(args)?;
        debug!(globals = ?self.globals(), "dispatch finished");
        Ok(())
    }
}

/// Declare the global flags, binding them to the given slots
fn declare_globals(fset: &mut FlagSet, verbose: &Slot<bool>, config: &Slot<String>) {
    fset.bool_var(verbose, "v", false, "log dispatch details to stderr");
    fset.string_var(config, "config", "", "read settings from `file`");
}

/// Read the global flags ahead of dispatch.
///
/// `-config` picks the settings file, and the settings supply the program
/// help and output sink the commander is built with, so these two flags are
/// needed before any commander exists. The commander parses them again
/// during dispatch, where malformed flags are reported with usage; errors
/// are ignored here for that reason.
pub fn scan_globals(args: &[String]) -> GlobalArgs {
    let verbose = Slot::default();
    let config = Slot::<String>::default();

    let mut fset = FlagSet::new("subcmd");
    declare_globals(&mut fset, &verbose, &config);
    let _ = fset.parse(args.iter().skip(1).cloned());

    let config = config.get();
    GlobalArgs {
        config: (!config.is_empty()).then(|| PathBuf::from(config)),
        verbose: verbose.get(),
    }
}

/// Base name of argv[0], as shown in usage lines
fn program_name(arg0: &str) -> String {
    Path::new(arg0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "subcmd".to_string())
}

/// Run the CLI application with the given process arguments
pub fn run(mut args: Vec<String>) -> Result<(), CliError> {
    let globals = scan_globals(&args);

    let settings = match &globals.config {
        Some(path) => parse_settings_file(path)?,
        None => load_settings()?,
    };
    validate_settings(&settings)?;

    let filter = if globals.verbose {
        "debug"
    } else {
        settings.log.as_deref().unwrap_or("warn")
    };
    init_logging(filter);
    debug!(?globals, "settings loaded");

    match args.first_mut() {
        Some(arg0) => {
            let name = program_name(arg0);
            *arg0 = name;
        }
        None => args.push("subcmd".to_string()),
    }

    App::new(settings).run(args)
}
