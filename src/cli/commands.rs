//! Commands provided by the `subcmd` binary

use crate::commander::{Command, Context};
use crate::flag::{FlagSet, Slot};
use crate::output::Output;
use std::cell::RefCell;
use std::env;
use std::io::Write;

/// Prints its arguments
pub struct EchoCommand {
    out: RefCell<Output>,
    no_newline: Slot<bool>,
    separator: Slot<String>,
}

impl EchoCommand {
    pub fn new() -> Self {
        Self::with_output(Output::Stdout)
    }

    /// Echo into `out` instead of stdout
    pub fn with_output(out: Output) -> Self {
        EchoCommand {
            out: RefCell::new(out),
            no_newline: Slot::default(),
            separator: Slot::default(),
        }
    }
}

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "print arguments"
    }

    fn help(&self) -> &str {
        "Usage: echo [options] [arg...]

echo prints its arguments separated by spaces, followed by a newline."
    }

    fn flags(&self, fset: &mut FlagSet) {
        fset.bool_var(&self.no_newline, "n", false, "do not print the trailing newline");
        fset.string_var(&self.separator, "sep", " ", "print `text` between arguments");
    }

    fn run(&self, _ctx: &mut Context<'_>, args: &[String]) -> anyhow::Result<()> {
        let separator = self.separator.get();
        let mut line = args.join(separator.as_str());
        if !self.no_newline.get() {
            line.push('\n');
        }

        let mut out = self.out.borrow_mut();
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Prints environment variables
pub struct EnvCommand {
    out: RefCell<Output>,
    prefix: Slot<String>,
}

impl EnvCommand {
    pub fn new() -> Self {
        Self::with_output(Output::Stdout)
    }

    /// Print into `out` instead of stdout
    pub fn with_output(out: Output) -> Self {
        EnvCommand {
            out: RefCell::new(out),
            prefix: Slot::default(),
        }
    }

    fn lines(&self, names: &[String]) -> anyhow::Result<Vec<String>> {
        let prefix = self.prefix.get();

        if names.is_empty() {
            let mut vars: Vec<(String, String)> = env::vars()
                .filter(|(name, _)| name.starts_with(&prefix))
                .collect();
            vars.sort();
            return Ok(vars
                .into_iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect());
        }

        names
            .iter()
            .filter(|name| name.starts_with(&prefix))
            .map(|name| match env::var(name) {
                Ok(value) => Ok(format!("{}={}", name, value)),
                Err(_) => Err(anyhow::anyhow!("environment variable {} is not set", name)),
            })
            .collect()
    }
}

impl Default for EnvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for EnvCommand {
    fn name(&self) -> &str {
        "env"
    }

    fn description(&self) -> &str {
        "print environment variables"
    }

    fn help(&self) -> &str {
        "Usage: env [options] [name...]

env prints NAME=value for each named variable, or for every variable
when no names are given. Naming an unset variable is an error."
    }

    fn flags(&self, fset: &mut FlagSet) {
        fset.string_var(&self.prefix, "prefix", "", "only show variables whose names start with `text`");
    }

    fn run(&self, _ctx: &mut Context<'_>, args: &[String]) -> anyhow::Result<()> {
        let lines = self.lines(args)?;

        let mut out = self.out.borrow_mut();
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}
