//! Verbosity configuration derived from the `-v` count.

use tracing::level_filters::LevelFilter;

/// Verbosity requested on the command line.
///
/// Each `-v` raises the most detailed level that reaches standard error:
///
/// | level | events shown |
/// |-------|--------------|
/// | 0     | warnings and errors |
/// | 1     | + info (listing summary) |
/// | 2     | + debug (handle open/release) |
/// | 3+    | + trace (every entry) |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerbosityConfig {
    level: u8,
}

impl VerbosityConfig {
    /// Creates a configuration from a verbose level. Values above 3 behave
    /// like 3.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self { level }
    }

    /// Returns the verbose level this configuration was built from.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Most detailed level that will be recorded.
    #[must_use]
    pub const fn max_level(self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Filter directive equivalent to [`max_level`](Self::max_level).
    #[must_use]
    pub fn directive(self) -> String {
        self.max_level().to_string().to_ascii_lowercase()
    }
}
