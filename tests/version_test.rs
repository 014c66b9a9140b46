use rusty_ls_version::{Family, ProtocolVersion, TlsErrorCode, DEFAULT_VERSIONS};

/// ------------------------------------------------------------
/// Helpers
/// ------------------------------------------------------------

fn v(major: u8, minor: u8) -> ProtocolVersion {
    ProtocolVersion::get(major, minor).unwrap()
}

/// Picks the latest version both peers support, the way a server answers a
/// ClientHello: walk down from its own latest and take the first shared one.
fn negotiate(server: &[ProtocolVersion], client: &[ProtocolVersion]) -> Option<ProtocolVersion> {
    let latest = ProtocolVersion::latest_of(server).unwrap()?;
    let earliest = ProtocolVersion::earliest_of(server).unwrap()?;
    latest
        .down_to(&earliest)
        .unwrap()
        .into_iter()
        .find(|candidate| {
            ProtocolVersion::contains(server, *candidate)
                && ProtocolVersion::contains(client, *candidate)
        })
}

/// ------------------------------------------------------------
/// Tests
/// ------------------------------------------------------------

#[test]
fn full_version_matches_octets() {
    for major in 0..=u8::MAX {
        for minor in 0..=u8::MAX {
            if major == 0xFE && minor == 0xFE {
                continue;
            }
            let version = v(major, minor);
            assert_eq!(version.full_version(), ((major as u16) << 8) | minor as u16);
            assert_eq!(version.major_version(), major);
            assert_eq!(version.minor_version(), minor);
        }
    }
}

#[test]
fn canonical_versions_are_stable() {
    assert!(matches!(v(0x03, 0x00), ProtocolVersion::SslV30));
    assert!(matches!(v(0x03, 0x01), ProtocolVersion::TlsV10));
    assert!(matches!(v(0x03, 0x02), ProtocolVersion::TlsV11));
    assert!(matches!(v(0x03, 0x03), ProtocolVersion::TlsV12));
    assert!(matches!(v(0xFE, 0xFF), ProtocolVersion::DtlsV10));
    assert!(matches!(v(0xFE, 0xFD), ProtocolVersion::DtlsV12));

    for known in ProtocolVersion::KNOWN {
        assert_eq!(v(known.major_version(), known.minor_version()), *known);
    }
    assert_eq!(ProtocolVersion::KNOWN.len(), 6);
}

#[test]
fn versions_render_their_names() {
    assert_eq!(v(0x03, 0x01).to_string(), "TLS 1.0");
    assert_eq!(v(0xFE, 0xFD).to_string(), "DTLS 1.2");
    assert_eq!(v(0x03, 0x04).to_string(), "TLS 0x0304");
    assert_eq!(v(0x03, 0x04).name(), "TLS 0x0304");
}

#[test]
fn reserved_version_is_rejected() {
    let err = ProtocolVersion::get(0xFE, 0xFE).unwrap_err();
    assert_eq!(err.code, TlsErrorCode::ReservedVersion);
    assert!(!err.to_string().is_empty());
}

#[test]
fn ordering_follows_family_direction() {
    assert!(v(0x03, 0x01).is_later_version_of(&v(0x03, 0x00)));
    assert!(v(0xFE, 0xFD).is_later_version_of(&v(0xFE, 0xFF)));
    assert!(!v(0x03, 0x01).is_later_version_of(&v(0xFE, 0xFF)));
    assert!(!v(0xFE, 0xFF).is_later_version_of(&v(0x03, 0x01)));
}

#[test]
fn previous_version_stops_at_earliest() {
    assert_eq!(v(0x03, 0x00).previous_version().unwrap(), None);
    assert_eq!(v(0xFE, 0xFF).previous_version().unwrap(), None);
    assert_eq!(v(0xFE, 0xFD).previous_version().unwrap(), Some(v(0xFE, 0xFF)));
}

#[test]
fn down_to_walks_latest_first() {
    assert_eq!(
        v(0x03, 0x03).down_to(&v(0x03, 0x01)).unwrap(),
        vec![
            ProtocolVersion::TlsV12,
            ProtocolVersion::TlsV11,
            ProtocolVersion::TlsV10
        ]
    );
    assert_eq!(
        v(0x03, 0x01).down_to(&v(0x03, 0x03)).unwrap_err().code,
        TlsErrorCode::InvalidRange
    );
}

#[test]
fn dtls_maps_to_equivalent_tls() {
    assert_eq!(v(0xFE, 0xFF).equivalent_tls_version(), Some(v(0x03, 0x02)));
    assert_eq!(v(0xFE, 0xFD).equivalent_tls_version(), Some(v(0x03, 0x03)));
    assert_eq!(v(0x03, 0x02).equivalent_tls_version(), Some(v(0x03, 0x02)));
}

#[test]
fn earliest_and_latest_of_a_set() {
    let versions = [v(0x03, 0x01), v(0x03, 0x03), v(0x03, 0x00)];
    assert_eq!(ProtocolVersion::earliest_of(&versions).unwrap(), Some(v(0x03, 0x00)));
    assert_eq!(ProtocolVersion::latest_of(&versions).unwrap(), Some(v(0x03, 0x03)));

    let mixed = [v(0x03, 0x01), v(0xFE, 0xFF)];
    assert_eq!(
        ProtocolVersion::latest_of(&mixed).unwrap_err().code,
        TlsErrorCode::MixedFamilies
    );
}

#[test]
fn negotiates_latest_shared_version() {
    let client = [ProtocolVersion::TlsV11, ProtocolVersion::TlsV10];
    assert_eq!(negotiate(DEFAULT_VERSIONS, &client), Some(ProtocolVersion::TlsV11));

    let client = [ProtocolVersion::SslV30];
    assert_eq!(negotiate(DEFAULT_VERSIONS, &client), None);

    let server = [ProtocolVersion::DtlsV12, ProtocolVersion::DtlsV10];
    let client = [ProtocolVersion::DtlsV10];
    let chosen = negotiate(&server, &client).unwrap();
    assert_eq!(chosen, ProtocolVersion::DtlsV10);
    assert_eq!(chosen.family(), Family::Dtls);
    assert_eq!(chosen.equivalent_tls_version(), Some(ProtocolVersion::TlsV11));
}
