use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{TlsError, TlsErrorCode};

pub use family::Family;

mod family;
mod ordering;

pub const PROTOCOL_VERSION_SIZE: usize = 2;

const DTLS_RESERVED_MINOR: u8 = 0xFE;

rfc_version_enum!(
    [Clone, Copy, Debug]
    (pub) ProtocolVersion;
    SslV30(0x0300, "SSL 3.0"),
    TlsV10(0x0301, "TLS 1.0"),
    TlsV11(0x0302, "TLS 1.1"),
    TlsV12(0x0303, "TLS 1.2"),
    DtlsV10(0xFEFF, "DTLS 1.0"),
    DtlsV12(0xFEFD, "DTLS 1.2"),
    [Unknown(UnknownVersion)]
);

/// TLS versions offered by default, latest first
pub const DEFAULT_VERSIONS: &[ProtocolVersion] = &[
    ProtocolVersion::TlsV12,
    ProtocolVersion::TlsV11,
    ProtocolVersion::TlsV10,
];

/// An encoding outside of the well-known versions.
///
/// Only built by [`ProtocolVersion::get`], so it never holds a well-known
/// encoding nor the reserved `{0xFE, 0xFE}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownVersion {
    major: u8,
    minor: u8,
}

impl UnknownVersion {
    pub const fn full_version(&self) -> u16 {
        u16::from_be_bytes([self.major, self.minor])
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::TlsV12
    }
}

impl ProtocolVersion {
    /// Looks up the version `{major, minor}`.
    ///
    /// Well-known encodings always come back as their own variant, anything
    /// else as [`ProtocolVersion::Unknown`].
    pub fn get(major: u8, minor: u8) -> Result<Self, TlsError> {
        let full_version = u16::from_be_bytes([major, minor]);
        if let Some(known) = Self::known(full_version) {
            return Ok(known);
        }
        if major == Family::DTLS_MAJOR && minor == DTLS_RESERVED_MINOR {
            log::debug!("rejected reserved protocol version 0x{:04X}", full_version);
            return Err(TlsError::new(
                TlsErrorCode::ReservedVersion,
                "{0xFE, 0xFE} is a reserved protocol version",
            ));
        }
        let version = Self::Unknown(UnknownVersion { major, minor });
        log::debug!("synthesized unknown protocol version {}", version);
        Ok(version)
    }

    /// Same as [`ProtocolVersion::get`] for octets held in a wider integer.
    pub fn from_octets<T>(major: T, minor: T) -> Result<Self, TlsError>
    where
        T: TryInto<u8> + Copy + fmt::Display,
    {
        let (Ok(major_octet), Ok(minor_octet)) = (major.try_into(), minor.try_into()) else {
            log::debug!("rejected version octets {{{}, {}}}", major, minor);
            return Err(TlsError::new(
                TlsErrorCode::InvalidOctet,
                format!("version octets {{{}, {}}} are not both valid octets", major, minor),
            ));
        };
        Self::get(major_octet, minor_octet)
    }

    pub fn from_be_bytes(bytes: [u8; PROTOCOL_VERSION_SIZE]) -> Result<Self, TlsError> {
        Self::get(bytes[0], bytes[1])
    }

    pub fn to_be_bytes(&self) -> [u8; PROTOCOL_VERSION_SIZE] {
        self.full_version().to_be_bytes()
    }

    pub const fn major_version(&self) -> u8 {
        (self.full_version() >> 8) as u8
    }

    pub const fn minor_version(&self) -> u8 {
        (self.full_version() & 0xFF) as u8
    }

    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn only(self) -> Vec<Self> {
        vec![self]
    }

    pub fn contains(versions: &[Self], version: Self) -> bool {
        versions.iter().any(|v| *v == version)
    }
}

impl TryFrom<u16> for ProtocolVersion {
    type Error = TlsError;
    fn try_from(full_version: u16) -> Result<Self, TlsError> {
        Self::from_be_bytes(full_version.to_be_bytes())
    }
}

impl TryFrom<u32> for ProtocolVersion {
    type Error = TlsError;
    fn try_from(full_version: u32) -> Result<Self, TlsError> {
        match u16::try_from(full_version) {
            Ok(v) => Self::try_from(v),
            Err(_) => {
                log::debug!("rejected full version 0x{:X}", full_version);
                Err(TlsError::new(
                    TlsErrorCode::InvalidOctet,
                    format!("0x{:X} does not fit in two version octets", full_version),
                ))
            }
        }
    }
}

impl From<ProtocolVersion> for u16 {
    fn from(version: ProtocolVersion) -> Self {
        version.full_version()
    }
}

impl PartialEq for ProtocolVersion {
    fn eq(&self, other: &Self) -> bool {
        self.full_version() == other.full_version()
    }
}

impl Eq for ProtocolVersion {}

impl Hash for ProtocolVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_version().hash(state)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_name() {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "{} 0x{:04X}",
                self.family().label(),
                self.full_version()
            ),
        }
    }
}

impl FromStr for ProtocolVersion {
    type Err = TlsError;

    /// Parses a name as rendered by [`fmt::Display`], e.g. `TLS 1.2` or `DTLS 0xFEFC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(known) = Self::from_known_name(s) {
            return Ok(known);
        }
        let parse_error = || {
            log::debug!("rejected protocol version name {:?}", s);
            TlsError::new(
                TlsErrorCode::ParseError,
                format!("unrecognized protocol version name: {}", s),
            )
        };
        let (label, hex) = s.split_once(" 0x").ok_or_else(parse_error)?;
        if hex.len() != 4 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(parse_error());
        }
        let full_version = u16::from_str_radix(hex, 16).map_err(|_| parse_error())?;
        let version = Self::try_from(full_version)?;
        if version.family().label() != label {
            return Err(parse_error());
        }
        Ok(version)
    }
}
