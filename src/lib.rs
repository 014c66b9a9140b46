#[macro_use]
mod rfc_enum;

pub mod error;
pub mod version;

pub use error::{TlsError, TlsErrorCode};
pub use version::{Family, ProtocolVersion, UnknownVersion, DEFAULT_VERSIONS, PROTOCOL_VERSION_SIZE};
