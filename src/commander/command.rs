//! Command trait and execution context

use crate::commander::Program;
use crate::flag::FlagSet;
use crate::output::Output;
use std::io::Write;

/// A subcommand.
///
/// Commands keep their flag storage as [`Slot`](crate::Slot) fields, bind
/// them in [`flags`](Command::flags), and read them back in
/// [`run`](Command::run).
pub trait Command {
    /// The token the user types to select this command
    fn name(&self) -> &str;

    /// One-line summary shown in the command listing
    fn description(&self) -> &str;

    /// Longer help text, ideally starting with a usage line. Surrounding
    /// whitespace is trimmed when displayed.
    fn help(&self) -> &str {
        ""
    }

    /// Declare this command's flags into `fset`
    fn flags(&self, _fset: &mut FlagSet) {}

    /// Run the command with the arguments left over after its flags
    fn run(&self, ctx: &mut Context<'_>, args: &[String]) -> anyhow::Result<()>;
}

/// What a running command can see of the commander that dispatched it
pub struct Context<'a> {
    program: &'a Program,
    output: &'a mut Output,
}

impl<'a> Context<'a> {
    pub(crate) fn new(program: &'a Program, output: &'a mut Output) -> Self {
        Context { program, output }
    }

    /// Registry and configuration of the dispatching commander
    pub fn program(&self) -> &Program {
        self.program
    }

    /// The commander's output sink
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Both at once, for code that renders program state to the sink
    pub(crate) fn split(&mut self) -> (&Program, &mut dyn Write) {
        let output: &mut dyn Write = &mut *self.output;
        (self.program, output)
    }
}
