/// Configuration for decoding trace entries.
///
/// The classifiers are total and never need this; it only controls how strictly raw trace
/// bytes are turned into [`crate::trace::TraceEntry`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Reject opcodes outside the catalogue and kind bytes other than event / true / false
    /// with [`crate::Error::UnknownTag`]. When disabled, unknown opcodes are kept as
    /// [`crate::trace::Opcode::Unknown`] and unknown kind bytes decode as events.
    pub strict: bool,

    /// Largest payload accepted for a single entry, in bytes
    pub max_payload_len: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl DecodeConfig {
    /// Default payload limit (16 MiB)
    pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 16 * 1024 * 1024;

    /// Accept anything structurally sound and fall back to the classifier defaults for
    /// unknown codes.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict: false,
            max_payload_len: Self::DEFAULT_MAX_PAYLOAD_LEN,
        }
    }

    /// Treat every code outside the catalogue as a protocol violation.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            max_payload_len: Self::DEFAULT_MAX_PAYLOAD_LEN,
        }
    }

    /// Override the payload limit.
    #[must_use]
    pub fn with_max_payload_len(mut self, max_payload_len: usize) -> Self {
        self.max_payload_len = max_payload_len;
        self
    }
}
