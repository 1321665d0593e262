// src/command.rs

//! Invocation and batch model.
//!
//! - [`CommandLine`]: one argv. Element 0 names the executable, the rest are
//!   passed to it verbatim.
//! - [`Batch`]: an ordered list of command lines, executed strictly in order.

use std::fmt;

use crate::args::Args;

/// A single invocation: executable name followed by its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    argv: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.argv.push(arg.into());
        self
    }

    /// Append the expanded `--key value` pairs of an [`Args`] map.
    pub fn with_options(mut self, options: &Args) -> Self {
        self.argv.extend(options.list());
        self
    }

    /// Executable name, if any.
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Everything after the executable name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for CommandLine {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl From<Vec<&str>> for CommandLine {
    fn from(argv: Vec<&str>) -> Self {
        Self::new(argv)
    }
}

impl From<&[&str]> for CommandLine {
    fn from(argv: &[&str]) -> Self {
        Self::new(argv.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for CommandLine {
    fn from(argv: [&str; N]) -> Self {
        Self::new(argv)
    }
}

/// Ordered list of invocations run under short-circuit semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    commands: Vec<CommandLine>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: impl Into<CommandLine>) {
        self.commands.push(cmd.into());
    }

    /// Builder form of [`Batch::push`].
    pub fn then(mut self, cmd: impl Into<CommandLine>) -> Self {
        self.push(cmd);
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandLine> {
        self.commands.iter()
    }
}

impl<C: Into<CommandLine>> FromIterator<C> for Batch {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<CommandLine>> for Batch {
    fn from(commands: Vec<CommandLine>) -> Self {
        Self { commands }
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a CommandLine;
    type IntoIter = std::slice::Iter<'a, CommandLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
