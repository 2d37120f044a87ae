use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The classifiers in [`crate::classify`] never fail; errors only surface when raw bytes or
/// integers coming from a trace file or a solver response are turned into typed values.
///
/// # Error Categories
///
/// ## Trace Decoding Errors
/// - [`Error::Malformed`] - Corrupted or invalid trace structure
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of the trace
/// - [`Error::NotSupported`] - Unknown trace header or version
/// - [`Error::Empty`] - Empty input provided
/// - [`Error::PayloadTooLarge`] - Entry payload exceeds the configured limit
///
/// ## Protocol Errors
/// - [`Error::UnknownTag`] - An integer outside the known catalogue
/// - [`Error::MissingDelimiter`] - Unbalanced model delimiters in a solver response
///
/// ## I/O Errors
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// # Examples
///
/// ```rust
/// use pathflip::{Error, protocol::TraceEntryTag};
///
/// match TraceEntryTag::try_from(21_u32) {
///     Ok(tag) => println!("decoded {tag}"),
///     Err(Error::UnknownTag { family, code }) => {
///         eprintln!("not a {family} code: {code}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The trace is damaged and could not be parsed.
    ///
    /// The error includes the source location where the malformation was detected.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing the trace.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// This trace format or version is not supported.
    #[error("This trace format is not supported")]
    NotSupported,

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),

    /// An integer that does not belong to the named constant family.
    ///
    /// Returned by the checked conversions (`TryFrom`) and by strict trace decoding.
    /// The classifiers themselves never produce it.
    #[error("Unknown {family} code - {code}")]
    UnknownTag {
        /// Name of the constant family the code was decoded against
        family: &'static str,
        /// The offending raw value
        code: u32,
    },

    /// A solver response opened or closed a model block without its counterpart.
    ///
    /// The associated value is the delimiter that was expected but not found.
    #[error("Missing model delimiter '{0}'")]
    MissingDelimiter(&'static str),

    /// A trace entry declared a payload larger than the decoder accepts.
    #[error("Entry payload of {len} bytes exceeds limit of {limit}")]
    PayloadTooLarge {
        /// Declared payload length
        len: usize,
        /// Configured maximum
        limit: usize,
    },
}
