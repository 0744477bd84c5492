//! Exit codes for the fixtures CLI.
//!
//! Distinct codes let scripts and CI systems tell failure modes apart.

/// Exit codes used by the CLI.
///
/// A successful run exits with 0; each failure mode has its own non-zero
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The requested type has no fixture
    UnknownType = 1,
    /// Configuration error (unreadable, invalid or failing validation)
    ConfigError = 2,
    /// Schema file could not be read
    SchemaError = 3,
    /// I/O error writing output
    IoError = 4,
    /// Invalid GraphQL syntax in the schema
    ParseError = 5,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        tracing::debug!(code = self.code(), reason = %self, "Exiting");
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownType => write!(f, "unknown type"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema load error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
        }
    }
}
