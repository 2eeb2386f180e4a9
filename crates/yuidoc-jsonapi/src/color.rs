use std::io::IsTerminal;

use clap::ValueEnum;

/// When to color the `Warning:`/`Error:`/summary lines written to stderr.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, ValueEnum)]
pub enum Color {
    /// Only when stderr is a terminal
    #[default]
    Auto,
    Never,
    Always,
}

impl Color {
    fn enabled(self) -> bool {
        match self {
            Self::Auto => std::io::stderr().is_terminal(),
            Self::Never => false,
            Self::Always => true,
        }
    }

    /// Make `colored` follow this choice for the rest of the process.
    pub fn apply(self) {
        colored::control::set_override(self.enabled());
    }
}
