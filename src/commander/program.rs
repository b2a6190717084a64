//! Program-wide state shared by dispatch and help rendering

use crate::commander::{Command, Registry};
use crate::flag::FlagSet;
use std::fmt;
use std::path::Path;

/// Callback that declares the global flags
pub type GlobalFlags = dyn Fn(&mut FlagSet);

/// Registry and configuration of a [`Commander`](crate::Commander).
///
/// Commands see this through [`Context::program`](crate::Context::program)
/// while they run, so the `help` command always reflects current state.
#[derive(Default)]
pub struct Program {
    pub(crate) name: String,
    pub(crate) help: String,
    pub(crate) flags: Option<Box<GlobalFlags>>,
    pub(crate) registry: Registry,
}

impl Program {
    /// Invocation name captured by the last `run`, empty before the first
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used in usage lines: the captured invocation name, or the base
    /// name of this process's executable when nothing was captured.
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        std::env::args_os()
            .next()
            .and_then(|arg0| {
                Path::new(&arg0)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_default()
    }

    /// Program-wide help text
    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn has_global_flags(&self) -> bool {
        self.flags.is_some()
    }

    /// A fresh flag set with the global flags declared, if any are configured
    pub fn global_flags(&self) -> Option<FlagSet> {
        self.flags.as_ref().map(|declare| {
            let mut fset = FlagSet::new(self.display_name());
            declare(&mut fset);
            fset
        })
    }

    /// Registered commands in name order
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.registry.iter()
    }

    /// Find a command by exact name
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.registry.get(name)
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("global_flags", &self.flags.is_some())
            .field("commands", &self.registry)
            .finish()
    }
}
