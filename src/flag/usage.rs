//! Rendering of flag defaults listings

use crate::flag::set::{Flag, FlagSet};
use crate::text::quote;
use std::io::{self, Write};

impl FlagSet {
    /// Write one entry per declared flag, in name order, to `out`.
    ///
    /// ```text
    ///   -flag string
    ///     	a flag test (default "test")
    /// ```
    pub fn write_defaults(&self, out: &mut dyn Write) -> io::Result<()> {
        for flag in self.flags() {
            writeln!(out, "{}", render_flag(flag))?;
        }
        Ok(())
    }

    /// Defaults listing as a string
    pub fn defaults(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_defaults(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn render_flag(flag: &Flag) -> String {
    let (type_name, usage) = unquote_usage(&flag.usage, flag.binding.type_name());

    let mut line = format!("  -{}", flag.name);
    if !type_name.is_empty() {
        line.push(' ');
        line.push_str(&type_name);
    }

    // Single-letter flags without a type word fit on one line.
    if line.len() <= 4 {
        line.push('\t');
    } else {
        line.push_str("\n    \t");
    }
    line.push_str(&usage.replace('\n', "\n    \t"));

    if !flag.default_is_zero {
        if flag.binding.is_string() {
            line.push_str(&format!(" (default {})", quote(&flag.default)));
        } else {
            line.push_str(&format!(" (default {})", flag.default));
        }
    }

    line
}

/// Extract a back-quoted name from `usage`, falling back to `type_name`.
///
/// "a `file` to read" yields ("file", "a file to read").
pub(crate) fn unquote_usage(usage: &str, type_name: &str) -> (String, String) {
    if let Some(start) = usage.find('`') {
        if let Some(len) = usage[start + 1..].find('`') {
            let end = start + 1 + len;
            let name = usage[start + 1..end].to_string();
            let text = format!("{}{}{}", &usage[..start], name, &usage[end + 1..]);
            return (name, text);
        }
    }
    (type_name.to_string(), usage.to_string())
}
