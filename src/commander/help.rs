//! Help command - usage summary and per-command help

use crate::commander::{Command, Context, Program};
use crate::error::{Result, SubError};
use crate::flag::FlagSet;
use crate::text::quote;
use std::io::Write;

/// The built-in `help` command.
///
/// It holds no state: everything it renders is read from the running
/// commander through [`Context`]. It is not registered automatically; use
/// [`Commander::help_cmd`](crate::Commander::help_cmd).
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "show help for commands"
    }

    fn help(&self) -> &str {
        "Usage: help [command]

help displays a help summary for the entire set of commands or it
shows more detailed help for a specific named subcommand."
    }

    fn run(&self, ctx: &mut Context<'_>, args: &[String]) -> anyhow::Result<()> {
        let (program, out) = ctx.split();
        match args.first() {
            Some(name) => write_command_help(program, name, out)?,
            None => write_summary(program, out)?,
        }
        Ok(())
    }
}

/// Write the usage summary: usage line, program help, global options and
/// the command listing.
pub(crate) fn write_summary(program: &Program, out: &mut dyn Write) -> Result<()> {
    let global_options = if program.has_global_flags() {
        " [global options]"
    } else {
        ""
    };
    writeln!(
        out,
        "Usage: {}{} <subcommand> [subcommand arguments]",
        program.display_name(),
        global_options
    )?;

    let help = program.help().trim();
    if !help.is_empty() {
        write!(out, "\n{}\n", help)?;
    }

    if let Some(fset) = program.global_flags() {
        writeln!(out, "\nGlobal Options:")?;
        fset.write_defaults(out)?;
    }

    writeln!(out, "\nCommands:")?;
    for cmd in program.commands() {
        writeln!(out, "\t{}\t\t{}", cmd.name(), cmd.description())?;
    }

    Ok(())
}

/// Write the help for one command, or the summary and
/// [`SubError::Help`] if no command has that name.
pub(crate) fn write_command_help(program: &Program, name: &str, out: &mut dyn Write) -> Result<()> {
    let Some(cmd) = program.get(name) else {
        write_unknown(program, name, out)?;
        return Err(SubError::Help);
    };

    let help = cmd.help().trim();
    if !help.is_empty() {
        writeln!(out, "{}", help)?;
    }

    let mut fset = FlagSet::new(cmd.name());
    cmd.flags(&mut fset);
    if !fset.is_empty() {
        writeln!(out, "\nOptions:")?;
        fset.write_defaults(out)?;
    }

    Ok(())
}

/// Report an unknown command name followed by the summary
pub(crate) fn write_unknown(program: &Program, name: &str, out: &mut dyn Write) -> Result<()> {
    write!(out, "Error: No such command: {}\n\n", quote(name))?;
    write_summary(program, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::Registry;
    use pretty_assertions::assert_eq;

    struct Quiet;

    impl Command for Quiet {
        fn name(&self) -> &str {
            "quiet"
        }

        fn description(&self) -> &str {
            "does nothing"
        }

        fn run(&self, _ctx: &mut Context<'_>, _args: &[String]) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn program() -> Program {
        let mut registry = Registry::new();
        registry.register(Box::new(Quiet));
        registry.register(Box::new(HelpCommand));
        Program {
            name: "prog".to_string(),
            registry,
            ..Program::default()
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> (String, Result<()>) {
        let mut buf = Vec::new();
        let result = f(&mut buf);
        (String::from_utf8(buf).unwrap(), result)
    }

    #[test]
    fn test_summary_without_globals_or_help() {
        let program = program();
        let (out, result) = render(|buf| write_summary(&program, buf));

        assert!(result.is_ok());
        assert_eq!(
            out,
            "Usage: prog <subcommand> [subcommand arguments]\n\
             \n\
             Commands:\n\
             \thelp\t\tshow help for commands\n\
             \tquiet\t\tdoes nothing\n"
        );
    }

    #[test]
    fn test_summary_with_globals_and_help() {
        let mut program = program();
        program.help = "\n  Some tool.  \n".to_string();
        program.flags = Some(Box::new(|fset: &mut FlagSet| {
            fset.bool("v", false, "verbose");
        }));
        let (out, _) = render(|buf| write_summary(&program, buf));

        assert_eq!(
            out,
            "Usage: prog [global options] <subcommand> [subcommand arguments]\n\
             \n\
             Some tool.\n\
             \n\
             Global Options:\n  \
             -v\tverbose\n\
             \n\
             Commands:\n\
             \thelp\t\tshow help for commands\n\
             \tquiet\t\tdoes nothing\n"
        );
    }

    #[test]
    fn test_command_help_without_flags_has_no_options_block() {
        let program = program();
        let (out, result) = render(|buf| write_command_help(&program, "help", buf));

        assert!(result.is_ok());
        assert_eq!(
            out,
            "Usage: help [command]\n\
             \n\
             help displays a help summary for the entire set of commands or it\n\
             shows more detailed help for a specific named subcommand.\n"
        );
    }

    #[test]
    fn test_command_help_for_unknown_name() {
        let program = program();
        let (out, result) = render(|buf| write_command_help(&program, "nope", buf));

        assert!(matches!(result, Err(SubError::Help)));
        assert!(out.starts_with("Error: No such command: \"nope\"\n\nUsage: prog "));
    }

    #[test]
    fn test_command_without_help_text_renders_nothing() {
        let program = program();
        let (out, result) = render(|buf| write_command_help(&program, "quiet", buf));

        assert!(result.is_ok());
        assert_eq!(out, "");
    }
}
