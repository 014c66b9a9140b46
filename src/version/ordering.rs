use std::cmp::Ordering;

use crate::error::{TlsError, TlsErrorCode};

use super::{Family, ProtocolVersion, DTLS_RESERVED_MINOR};

/// Ordering is only defined between versions sharing a major version, and
/// DTLS counts its minor versions downwards.
impl ProtocolVersion {
    pub fn is_later_version_of(&self, other: &ProtocolVersion) -> bool {
        if self.major_version() != other.major_version() {
            return false;
        }
        if self.is_dtls() {
            self.minor_version() < other.minor_version()
        } else {
            self.minor_version() > other.minor_version()
        }
    }

    pub fn is_equal_or_earlier_version_of(&self, other: &ProtocolVersion) -> bool {
        if self.major_version() != other.major_version() {
            return false;
        }
        if self.is_dtls() {
            self.minor_version() >= other.minor_version()
        } else {
            self.minor_version() <= other.minor_version()
        }
    }

    /// The version right before this one within its family, `None` for
    /// SSL 3.0 and DTLS 1.0.
    ///
    /// Fails with [`TlsErrorCode::UnsupportedFamily`] when the major version
    /// is neither TLS nor DTLS.
    pub fn previous_version(&self) -> Result<Option<ProtocolVersion>, TlsError> {
        let major = self.major_version();
        let minor = self.minor_version();
        let previous = match self.family() {
            Family::Tls => match minor {
                0x00 => None,
                _ => Some(ProtocolVersion::get(major, minor - 1)?),
            },
            Family::Dtls => match minor {
                0xFF => None,
                m if m + 1 == DTLS_RESERVED_MINOR => Some(ProtocolVersion::DtlsV10),
                _ => Some(ProtocolVersion::get(major, minor + 1)?),
            },
            Family::Unknown(_) => {
                log::debug!("no previous version defined for {}", self);
                return Err(TlsError::new(
                    TlsErrorCode::UnsupportedFamily,
                    format!("no version ordering is defined for {}", self),
                ));
            }
        };
        log::trace!("previous version of {} is {:?}", self, previous);
        Ok(previous)
    }

    /// Every version from `self` down to `floor`, both included, latest first.
    pub fn down_to(&self, floor: &ProtocolVersion) -> Result<Vec<ProtocolVersion>, TlsError> {
        if !floor.is_equal_or_earlier_version_of(self) {
            log::debug!("rejected version range {} down to {}", self, floor);
            return Err(TlsError::new(
                TlsErrorCode::InvalidRange,
                format!("{} is not an equal or earlier version of {}", floor, self),
            ));
        }

        let mut versions = vec![*self];
        let mut current = *self;
        while current != *floor {
            current = match current.previous_version()? {
                Some(previous) => previous,
                None => {
                    return Err(TlsError::new(
                        TlsErrorCode::InvalidRange,
                        format!("{} is not reachable from {}", floor, self),
                    ))
                }
            };
            versions.push(current);
        }
        log::trace!("{} down to {}: {} versions", self, floor, versions.len());
        Ok(versions)
    }

    pub fn earliest_of(versions: &[ProtocolVersion]) -> Result<Option<ProtocolVersion>, TlsError> {
        Self::extreme_of(versions, |candidate, best| best.is_later_version_of(candidate))
    }

    pub fn latest_of(versions: &[ProtocolVersion]) -> Result<Option<ProtocolVersion>, TlsError> {
        Self::extreme_of(versions, |candidate, best| candidate.is_later_version_of(best))
    }

    fn extreme_of<F>(
        versions: &[ProtocolVersion],
        replaces: F,
    ) -> Result<Option<ProtocolVersion>, TlsError>
    where
        F: Fn(&ProtocolVersion, &ProtocolVersion) -> bool,
    {
        let Some((first, rest)) = versions.split_first() else {
            return Ok(None);
        };
        let mut best = *first;
        for next in rest {
            if next.major_version() != first.major_version() {
                log::debug!("mixed major versions: {} and {}", first, next);
                return Err(TlsError::new(
                    TlsErrorCode::MixedFamilies,
                    "versions must all have the same major version",
                ));
            }
            if replaces(next, &best) {
                best = *next;
            }
        }
        Ok(Some(best))
    }
}

impl PartialOrd for ProtocolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_later_version_of(other) {
            Some(Ordering::Greater)
        } else if self.is_equal_or_earlier_version_of(other) {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}
