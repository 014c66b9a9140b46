use std::fmt;

use super::ProtocolVersion;

/// The protocol family named by a version's major octet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// stream-oriented, minor versions ascend
    Tls,
    /// datagram-oriented, minor versions descend from 0xFF
    Dtls,
    Unknown(u8),
}

impl Family {
    pub const TLS_MAJOR: u8 = 0x03;
    pub const DTLS_MAJOR: u8 = 0xFE;

    pub const fn from_major(major: u8) -> Self {
        match major {
            Self::TLS_MAJOR => Self::Tls,
            Self::DTLS_MAJOR => Self::Dtls,
            other => Self::Unknown(other),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tls => "TLS",
            Self::Dtls => "DTLS",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ProtocolVersion {
    pub const fn family(&self) -> Family {
        Family::from_major(self.major_version())
    }

    pub const fn is_tls(&self) -> bool {
        self.major_version() == Family::TLS_MAJOR
    }

    pub const fn is_dtls(&self) -> bool {
        self.major_version() == Family::DTLS_MAJOR
    }

    /// The TLS version of the same generation, for logic that is written
    /// once against TLS versions and shared with DTLS.
    ///
    /// A TLS version is its own equivalent. DTLS 1.0 maps to TLS 1.1 and
    /// DTLS 1.2 to TLS 1.2; other versions have none.
    pub const fn equivalent_tls_version(&self) -> Option<ProtocolVersion> {
        match self.family() {
            Family::Tls => Some(*self),
            Family::Dtls => match self {
                Self::DtlsV10 => Some(Self::TlsV11),
                Self::DtlsV12 => Some(Self::TlsV12),
                _ => None,
            },
            Family::Unknown(_) => None,
        }
    }
}
