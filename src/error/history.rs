//! Merge log errors

use super::StaleError;

/// Creates an error for a merge log command that could not be started
pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> StaleError {
    StaleError::HistoryCommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a merge log command that exited unsuccessfully
pub fn command_exit(
    command: impl Into<String>,
    status: impl Into<String>,
    stderr: impl Into<String>,
) -> StaleError {
    StaleError::HistoryCommandExit {
        command: command.into(),
        status: status.into(),
        stderr: stderr.into(),
    }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> StaleError {
    StaleError::HistoryReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a timestamp parse error for a merge log line
pub fn timestamp(line: usize, text: impl Into<String>, reason: impl Into<String>) -> StaleError {
    StaleError::TimestampParse {
        line,
        text: text.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid atom error for a merge log line
pub fn invalid_atom(line: usize, atom: impl Into<String>, reason: impl Into<String>) -> StaleError {
    StaleError::InvalidAtom {
        line,
        atom: atom.into(),
        reason: reason.into(),
    }
}
