//! Error types for the ubuf wire format

/// Errors that can occur while reading a message body
///
/// Writing never fails: the [`Writer`](crate::Writer) grows on demand and
/// allocation failure aborts the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A read needed more bytes than remain in the reader
    TruncatedInput,
    /// A varint had too many digits or its value does not fit the target width
    VarintOverflow,
    /// A text field did not contain valid UTF-8
    InvalidUtf8,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::TruncatedInput => "input ended before the value was complete",
            Error::VarintOverflow => "varint length prefix overflows",
            Error::InvalidUtf8 => "text field is not valid UTF-8",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for ubuf operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_matches_description() {
        for err in [Error::TruncatedInput, Error::VarintOverflow, Error::InvalidUtf8] {
            assert_eq!(err.to_string(), err.description());
        }
    }
}
