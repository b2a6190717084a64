//! Flag declaration and parsing

use crate::error::{FlagError, FlagResult};
use crate::flag::value::{Binding, FlagValue, Slot};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::trace;

/// A declared flag
pub(crate) struct Flag {
    pub(crate) name: String,
    pub(crate) usage: String,
    pub(crate) default: String,
    pub(crate) default_is_zero: bool,
    pub(crate) binding: Box<dyn Binding>,
}

/// A set of flags parsed from a single argument list.
///
/// Parsing stops at the first token that is not a flag, leaving it and
/// everything after it in [`args`](FlagSet::args).
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Flag>,
    actual: BTreeSet<String>,
    args: Vec<String>,
    parsed: bool,
}

impl FlagSet {
    /// Create an empty flag set
    pub fn new(name: impl Into<String>) -> Self {
        FlagSet {
            name: name.into(),
            flags: BTreeMap::new(),
            actual: BTreeSet::new(),
            args: Vec::new(),
            parsed: false,
        }
    }

    /// Name given at construction, usually the command name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a flag of any [`FlagValue`] type bound to `slot`.
    ///
    /// The slot is reset to `default`. Declaring a name twice replaces the
    /// earlier declaration.
    pub fn var<T: FlagValue>(&mut self, slot: &Slot<T>, name: &str, default: T, usage: &str) {
        let rendered = default.render();
        let default_is_zero = default.is_zero();
        slot.set(default);
        self.flags.insert(
            name.to_string(),
            Flag {
                name: name.to_string(),
                usage: usage.to_string(),
                default: rendered,
                default_is_zero,
                binding: Box::new(slot.clone()),
            },
        );
    }

    pub fn bool_var(&mut self, slot: &Slot<bool>, name: &str, default: bool, usage: &str) {
        self.var(slot, name, default, usage);
    }

    pub fn string_var(&mut self, slot: &Slot<String>, name: &str, default: &str, usage: &str) {
        self.var(slot, name, default.to_string(), usage);
    }

    pub fn int_var(&mut self, slot: &Slot<i64>, name: &str, default: i64, usage: &str) {
        self.var(slot, name, default, usage);
    }

    pub fn uint_var(&mut self, slot: &Slot<u64>, name: &str, default: u64, usage: &str) {
        self.var(slot, name, default, usage);
    }

    pub fn float_var(&mut self, slot: &Slot<f64>, name: &str, default: f64, usage: &str) {
        self.var(slot, name, default, usage);
    }

    /// Declare a boolean flag and return its storage
    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> Slot<bool> {
        let slot = Slot::default();
        self.bool_var(&slot, name, default, usage);
        slot
    }

    /// Declare a string flag and return its storage
    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> Slot<String> {
        let slot = Slot::default();
        self.string_var(&slot, name, default, usage);
        slot
    }

    /// Declare an integer flag and return its storage
    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> Slot<i64> {
        let slot = Slot::default();
        self.int_var(&slot, name, default, usage);
        slot
    }

    /// Declare an unsigned integer flag and return its storage
    pub fn uint(&mut self, name: &str, default: u64, usage: &str) -> Slot<u64> {
        let slot = Slot::default();
        self.uint_var(&slot, name, default, usage);
        slot
    }

    /// Declare a floating point flag and return its storage
    pub fn float(&mut self, name: &str, default: f64, usage: &str) -> Slot<f64> {
        let slot = Slot::default();
        self.float_var(&slot, name, default, usage);
        slot
    }

    /// Number of declared flags
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether `name` was given on the command line
    pub fn is_set(&self, name: &str) -> bool {
        self.actual.contains(name)
    }

    /// Whether [`parse`](FlagSet::parse) has been called
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Arguments remaining after the flags
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The `i`th remaining argument
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }

    /// Number of remaining arguments
    pub fn narg(&self) -> usize {
        self.args.len()
    }

    pub(crate) fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Parse flags from `args`, which must not include the command name.
    pub fn parse<I, S>(&mut self, args: I) -> FlagResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed = true;
        self.args = args.into_iter().map(Into::into).collect();

        let mut pos = 0;
        while pos < self.args.len() {
            match self.parse_one(pos)? {
                Some(next) => pos = next,
                None => break,
            }
        }

        self.args.drain(..pos);
        trace!(set = %self.name, remaining = self.args.len(), "flags parsed");
        Ok(())
    }

    /// Parse the flag at `pos`, returning the position of the next token,
    /// or `None` once a non-flag token or `--` ends the flags.
    fn parse_one(&mut self, pos: usize) -> FlagResult<Option<usize>> {
        let token = &self.args[pos];
        if token.len() < 2 || !token.starts_with('-') {
            return Ok(None);
        }

        let mut minuses = 1;
        if token.as_bytes()[1] == b'-' {
            minuses += 1;
            if token.len() == 2 {
                self.args.remove(pos);
                return Ok(None);
            }
        }

        let body = &token[minuses..];
        if body.starts_with('-') || body.starts_with('=') {
            return Err(FlagError::BadSyntax(token.clone()));
        }

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name.to_string(), Some(value.to_string())),
            None => (body.to_string(), None),
        };
        let mut next = pos + 1;

        let Some(flag) = self.flags.get(&name) else {
            if name == "help" || name == "h" {
                return Err(FlagError::Help);
            }
            return Err(FlagError::Undefined(name));
        };

        if flag.binding.is_bool() {
            let value = inline.unwrap_or_else(|| "true".to_string());
            flag.binding
                .set(&value)
                .map_err(|reason| FlagError::InvalidBool {
                    name: name.clone(),
                    value,
                    reason,
                })?;
        } else {
            let value = match inline {
                Some(value) => value,
                None => match self.args.get(next) {
                    Some(value) => {
                        next += 1;
                        value.clone()
                    }
                    None => return Err(FlagError::MissingValue(name)),
                },
            };
            flag.binding
                .set(&value)
                .map_err(|reason| FlagError::InvalidValue {
                    name: name.clone(),
                    value,
                    reason,
                })?;
        }

        self.actual.insert(name);
        Ok(Some(next))
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("flags", &self.flags.keys().collect::<Vec<_>>())
            .field("args", &self.args)
            .field("parsed", &self.parsed)
            .finish()
    }
}
