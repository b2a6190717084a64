//! Common test utilities

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use subcmd::{Command, Commander, Context, FlagSet, Output, SharedBuffer, Slot};
use tempfile::TempDir;

/// A command with one string flag that records what it was run with
pub struct TestCmd {
    pub out: SharedBuffer,
    pub help: &'static str,
    pub flag: Slot<String>,
}

impl TestCmd {
    pub fn new(out: SharedBuffer) -> Self {
        TestCmd {
            out,
            help: "
This is just a simple test.
No, really. That's it.
Probably.
",
            flag: Slot::default(),
        }
    }
}

impl Command for TestCmd {
    fn name(&self) -> &str {
        "test"
    }

    fn description(&self) -> &str {
        "a simple test"
    }

    fn help(&self) -> &str {
        self.help
    }

    fn flags(&self, fset: &mut FlagSet) {
        fset.string_var(&self.flag, "flag", "test", "a flag test");
    }

    fn run(&self, _ctx: &mut Context<'_>, args: &[String]) -> anyhow::Result<()> {
        let mut out = self.out.clone();
        write!(out, "{:?} {:?}", self.flag.get(), args)?;
        Ok(())
    }
}

/// Output captured from a commander and from its test command
pub struct Captured {
    pub cout: SharedBuffer,
    pub testout: SharedBuffer,
}

/// A commander with program help, the help command and a [`TestCmd`]
pub fn test_commander() -> (Commander, Captured) {
    let cout = SharedBuffer::new();
    let testout = SharedBuffer::new();

    let mut c = Commander::new()
        .with_output(Output::writer(cout.clone()))
        .with_help("\nEven more help text.\n");
    c.register(c.help_cmd());
    c.register(TestCmd::new(testout.clone()));

    (c, Captured { cout, testout })
}

/// Create a temporary directory with a subcmd.yml file
pub fn create_settings_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("subcmd.yml");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}
