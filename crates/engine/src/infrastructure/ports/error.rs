//! Error types for port operations.

/// Failure to supply the spell collection.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing file or service could not be read.
    #[error("Failed to read spells from {location}: {message}")]
    Read { location: String, message: String },

    /// The data was read but is not a valid spell list.
    #[error("Failed to parse spells from {location}: {message}")]
    Parse { location: String, message: String },
}

impl SourceError {
    pub fn read(location: impl ToString, message: impl ToString) -> Self {
        Self::Read {
            location: location.to_string(),
            message: message.to_string(),
        }
    }

    pub fn parse(location: impl ToString, message: impl ToString) -> Self {
        Self::Parse {
            location: location.to_string(),
            message: message.to_string(),
        }
    }
}

/// Key/value storage errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed - includes operation name.
    #[error("Storage error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_messages_carry_location() {
        let err = SourceError::parse("spells.json", "expected array");
        assert_eq!(
            err.to_string(),
            "Failed to parse spells from spells.json: expected array"
        );
    }

    #[test]
    fn storage_error_messages_carry_operation() {
        let err = StorageError::io("persist", "disk full");
        assert_eq!(err.to_string(), "Storage error in persist: disk full");
    }
}
