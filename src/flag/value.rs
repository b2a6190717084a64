//! Flag value types and the storage they are bound to

use crate::text::format_float;
use std::cell::RefCell;
use std::fmt;
use std::num::IntErrorKind;
use std::rc::Rc;

/// Shared storage a flag writes into when parsed.
///
/// A command keeps a `Slot` as a field, binds it in
/// [`Command::flags`](crate::Command::flags), and reads it back in
/// [`Command::run`](crate::Command::run). Clones share the same value.
pub struct Slot<T>(Rc<RefCell<T>>);

impl<T> Slot<T> {
    /// Create a slot holding `value`
    pub fn new(value: T) -> Self {
        Slot(Rc::new(RefCell::new(value)))
    }

    /// Replace the stored value
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Run `f` against the stored value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    pub(crate) fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

impl<T: Clone> Slot<T> {
    /// Copy of the stored value
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Slot(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Slot::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.0.borrow()).finish()
    }
}

/// A type that can be parsed from a flag's textual value.
pub trait FlagValue: 'static {
    /// Parse `raw` and store it in `self`
    fn set(&mut self, raw: &str) -> Result<(), String>;

    /// Textual form used when listing defaults
    fn render(&self) -> String;

    /// Whether `self` is the type's zero value. Zero defaults are left out
    /// of defaults listings.
    fn is_zero(&self) -> bool;

    /// Word shown after the flag name in defaults listings
    fn type_name() -> &'static str {
        "value"
    }

    /// Boolean flags may be given without a value
    fn is_bool() -> bool {
        false
    }

    /// Whether the default should be quoted in listings
    fn is_string() -> bool {
        false
    }
}

impl FlagValue for bool {
    fn set(&mut self, raw: &str) -> Result<(), String> {
        *self = match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => true,
            "0" | "f" | "F" | "false" | "FALSE" | "False" => false,
            _ => return Err("parse error".to_string()),
        };
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn type_name() -> &'static str {
        ""
    }

    fn is_bool() -> bool {
        true
    }
}

impl FlagValue for String {
    fn set(&mut self, raw: &str) -> Result<(), String> {
        *self = raw.to_string();
        Ok(())
    }

    fn render(&self) -> String {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn type_name() -> &'static str {
        "string"
    }

    fn is_string() -> bool {
        true
    }
}

impl FlagValue for i64 {
    fn set(&mut self, raw: &str) -> Result<(), String> {
        let (negative, magnitude) = split_sign(raw);
        let magnitude = parse_uint(magnitude)?;
        *self = if negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
        .ok_or_else(|| "value out of range".to_string())?;
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn type_name() -> &'static str {
        "int"
    }
}

impl FlagValue for u64 {
    fn set(&mut self, raw: &str) -> Result<(), String> {
        *self = parse_uint(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn type_name() -> &'static str {
        "uint"
    }
}

impl FlagValue for f64 {
    fn set(&mut self, raw: &str) -> Result<(), String> {
        *self = raw.parse().map_err(|_| "parse error".to_string())?;
        Ok(())
    }

    fn render(&self) -> String {
        format_float(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0 && self.is_sign_positive()
    }

    fn type_name() -> &'static str {
        "float"
    }
}

/// Split an optional leading sign off `raw`
fn split_sign(raw: &str) -> (bool, &str) {
    match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    }
}

/// Parse an unsigned integer the way Go's base-0 parsing does.
///
/// `0x`, `0o` and `0b` select hex, octal and binary, a bare leading `0`
/// selects octal, and `_` may separate digits. Signs are rejected.
fn parse_uint(raw: &str) -> Result<u64, String> {
    let parse_error = || "parse error".to_string();

    let (radix, digits) = match raw.get(..2) {
        Some("0x") | Some("0X") => (16, &raw[2..]),
        Some("0o") | Some("0O") => (8, &raw[2..]),
        Some("0b") | Some("0B") => (2, &raw[2..]),
        _ if raw.len() > 1 && raw.starts_with('0') => (8, &raw[1..]),
        _ => (10, raw),
    };

    if !underscores_ok(raw) {
        return Err(parse_error());
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(parse_error());
    }

    u64::from_str_radix(&digits, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => "value out of range".to_string(),
        _ => parse_error(),
    })
}

/// Underscores must sit between digits, or between a base prefix and a digit.
fn underscores_ok(raw: &str) -> bool {
    if !raw.contains('_') {
        return true;
    }

    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = raw.as_bytes();
    let mut saw = Saw::Start;
    let mut hex = false;
    let mut i = 0;
    if bytes.len() >= 2 && bytes[0] == b'0' && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x') {
        hex = bytes[1].to_ascii_lowercase() == b'x';
        saw = Saw::Digit;
        i = 2;
    }

    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            saw = Saw::Digit;
        } else if b == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
        } else {
            if saw == Saw::Underscore {
                return false;
            }
            saw = Saw::Other;
        }
    }
    saw != Saw::Underscore
}

/// Object-safe view over a bound slot, used by [`FlagSet`](super::FlagSet).
pub(crate) trait Binding {
    fn set(&self, raw: &str) -> Result<(), String>;
    fn render(&self) -> String;
    fn is_zero(&self) -> bool;
    fn type_name(&self) -> &'static str;
    fn is_bool(&self) -> bool;
    fn is_string(&self) -> bool;
}

impl<T: FlagValue> Binding for Slot<T> {
    fn set(&self, raw: &str) -> Result<(), String> {
        self.with_mut(|value| value.set(raw))
    }

    fn render(&self) -> String {
        self.with(|value| value.render())
    }

    fn is_zero(&self) -> bool {
        self.with(|value| value.is_zero())
    }

    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn is_bool(&self) -> bool {
        T::is_bool()
    }

    fn is_string(&self) -> bool {
        T::is_string()
    }
}
