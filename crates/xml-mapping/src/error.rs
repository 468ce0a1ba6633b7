use thiserror::Error;

/// Errors raised by the mapping layer.
///
/// Unknown attributes and elements are never errors; they are skipped while reading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A descriptor table is malformed. This is a programming error in the type's
    /// mapping declaration and is reported on first use of the type.
    #[error("inconsistent mapping for {type_name}: {reason}")]
    Inconsistent {
        type_name: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;
