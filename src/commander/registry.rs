//! Command registry - sorted, one command per name

use crate::commander::Command;
use std::fmt;

/// Commands kept sorted by name
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `cmd` in name order, replacing any command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        match self.position(cmd.name()) {
            Ok(i) => self.commands[i] = cmd,
            Err(i) => self.commands.insert(i, cmd),
        }
    }

    /// Find a command by exact name
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.position(name).ok().map(|i| self.commands[i].as_ref())
    }

    /// Commands in name order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|cmd| cmd.as_ref())
    }

    /// Command names in order
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|cmd| cmd.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.commands.binary_search_by(|cmd| cmd.name().cmp(name))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::Context;

    struct Named {
        name: &'static str,
        desc: &'static str,
    }

    impl Command for Named {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            self.desc
        }

        fn run(&self, _ctx: &mut Context<'_>, _args: &[String]) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn named(name: &'static str, desc: &'static str) -> Box<dyn Command> {
        Box::new(Named { name, desc })
    }

    #[test]
    fn test_register_keeps_name_order() {
        let mut registry = Registry::new();
        registry.register(named("zeta", ""));
        registry.register(named("alpha", ""));
        registry.register(named("mid", ""));

        assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = Registry::new();
        registry.register(named("build", "old"));
        registry.register(named("build", "new"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("build").unwrap().description(), "new");
    }

    #[test]
    fn test_get_missing() {
        let mut registry = Registry::new();
        assert!(registry.get("x").is_none());
        registry.register(named("y", ""));
        assert!(registry.get("x").is_none());
        assert!(registry.get("y").is_some());
    }
}
