//! Subcommand dispatch
//!
//! A [`Commander`] owns a sorted registry of [`Command`]s. Running it parses
//! global flags, picks the command named by the first remaining argument,
//! parses that command's flags and runs it with whatever is left.

pub mod command;
pub mod help;
pub mod program;
pub mod registry;

// Re-export main types
pub use command::*;
pub use help::HelpCommand;
pub use program::*;
pub use registry::*;

use crate::config::Settings;
use crate::error::{FlagError, Result, SubError};
use crate::flag::FlagSet;
use crate::output::Output;
use std::io::Write;
use tracing::debug;

/// Controls a set of subcommands
#[derive(Debug, Default)]
pub struct Commander {
    output: Output,
    program: Program,
}

impl Commander {
    /// A commander with no commands, writing to stderr
    pub fn new() -> Self {
        Self::default()
    }

    /// A commander configured from a settings file
    pub fn from_settings(settings: &Settings) -> Self {
        let mut commander = Commander::new().with_output(settings.output.into());
        if let Some(help) = &settings.help {
            commander.set_help(help.clone());
        }
        commander
    }

    /// Set where help and usage text is written
    pub fn with_output(mut self, output: Output) -> Self {
        self.set_output(output);
        self
    }

    /// Set the program help text shown by the usage summary
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.set_help(help);
        self
    }

    /// Set the callback that declares global flags.
    ///
    /// Configuring one, even one that declares nothing, adds
    /// `[global options]` to the usage line and a "Global Options:" block.
    pub fn with_flags(mut self, flags: impl Fn(&mut FlagSet) + 'static) -> Self {
        self.set_flags(flags);
        self
    }

    pub fn set_output(&mut self, output: Output) {
        self.output = output;
    }

    pub fn set_help(&mut self, help: impl Into<String>) {
        self.program.help = help.into();
    }

    pub fn set_flags(&mut self, flags: impl Fn(&mut FlagSet) + 'static) {
        self.program.flags = Some(Box::new(flags));
    }

    /// Register a command. A command with the same name is replaced.
    pub fn register<C: Command + 'static>(&mut self, cmd: C) {
        self.register_boxed(Box::new(cmd));
    }

    pub fn register_boxed(&mut self, cmd: Box<dyn Command>) {
        debug!(command = cmd.name(), "registering command");
        self.program.registry.register(cmd);
    }

    /// A `help` command for this commander. It must be registered explicitly
    /// for users to be able to call it.
    pub fn help_cmd(&self) -> HelpCommand {
        HelpCommand
    }

    /// Registered commands in name order
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.program.commands()
    }

    /// Find a command by exact name
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.program.get(name)
    }

    /// Registry and configuration, as seen by running commands
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Write the usage summary, or the help for `command`, to the output sink
    pub fn print_help(&mut self, command: Option<&str>) -> Result<()> {
        match command {
            Some(name) => help::write_command_help(&self.program, name, &mut self.output),
            None => help::write_summary(&self.program, &mut self.output),
        }
    }

    /// Run against `args`, whose first element is the program name as it
    /// should appear in usage text (often the base name of argv[0]).
    ///
    /// Returns [`SubError::Help`] when help was requested or no usable
    /// command was named, [`SubError::Flag`] for malformed flags, and the
    /// selected command's own error otherwise. Usage text is written to the
    /// output sink before any of these is returned.
    pub fn run<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        self.program.name = args.next().unwrap_or_default();
        let rest: Vec<String> = args.collect();
        debug!(program = %self.program.name, args = ?rest, "dispatch started");

        let mut global = FlagSet::new(self.program.display_name());
        if let Some(declare) = &self.program.flags {
            declare(&mut global);
        }
        if let Err(err) = global.parse(rest) {
            debug!(error = %err, "global flags rejected");
            report_flag_error(&err, &mut self.output)?;
            help::write_summary(&self.program, &mut self.output)?;
            return Err(err.into());
        }

        let Some(name) = global.arg(0) else {
            debug!("no command given");
            help::write_summary(&self.program, &mut self.output)?;
            return Err(SubError::Help);
        };

        let Some(cmd) = self.program.registry.get(name) else {
            debug!(command = name, "no such command");
            help::write_unknown(&self.program, name, &mut self.output)?;
            return Err(SubError::Help);
        };

        let mut sub = FlagSet::new(cmd.name());
        cmd.flags(&mut sub);
        if let Err(err) = sub.parse(global.args()[1..].iter().cloned()) {
            debug!(command = cmd.name(), error = %err, "command flags rejected");
            report_flag_error(&err, &mut self.output)?;
            help::write_command_help(&self.program, cmd.name(), &mut self.output)?;
            return Err(err.into());
        }

        debug!(command = cmd.name(), args = ?sub.args(), "running command");
        let mut ctx = Context::new(&self.program, &mut self.output);
        cmd.run(&mut ctx, sub.args()).map_err(SubError::from_command)
    }
}

/// Print a parse error on its own line; help requests print nothing extra.
fn report_flag_error(err: &FlagError, out: &mut dyn Write) -> Result<()> {
    if !matches!(err, FlagError::Help) {
        writeln!(out, "{}", err)?;
    }
    Ok(())
}
