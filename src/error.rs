use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsErrorCode {
    /// a version octet outside of `0..=255`
    InvalidOctet,
    /// `{0xFE, 0xFE}` is reserved and never names a version
    ReservedVersion,
    /// a set operation was given versions of more than one major version
    MixedFamilies,
    /// `down_to` floor is not an equal or earlier version
    InvalidRange,
    /// no ordering rule is defined for this major version
    UnsupportedFamily,
    /// a version name that is neither well-known nor `<FAMILY> 0x<HEX>`
    ParseError,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct TlsError {
    pub code: TlsErrorCode,
    pub msg: String,
}

impl TlsError {
    pub(crate) fn new(code: TlsErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}
