//! Package database errors

use super::StaleError;

pub fn open_failed(path: impl Into<String>, reason: impl Into<String>) -> StaleError {
    StaleError::DatabaseOpen {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> StaleError {
    StaleError::DatabaseRead {
        path: path.into(),
        reason: reason.into(),
    }
}
