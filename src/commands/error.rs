use thiserror::Error;

/// Recoverable command failures. The `Display` text is exactly what the
/// command loop prints.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("<UNKNOWN COMMAND>")]
    Unknown,

    #[error("ERROR: at least one polygon required.")]
    EmptyCollection,
}

pub type CommandResult<T> = Result<T, CommandError>;
