///
///
/// The `rfc_version_enum` declares an enum of the well-known protocol versions
/// of an RFC registry, plus one catch-all variant carrying any other encoding.
///
/// # Example
/// ```ignore
/// rfc_version_enum! {
///     [Clone, Copy, Debug]
///     (pub) V;
///     A(0x0301, "A 1.0"), B(0x0302, "B 1.1"),
///     [Other(OtherVersion)]
/// }
/// ```
/// This macro will be expanded to:
/// ```ignore
/// #[derive(Clone, Copy, Debug)]
/// pub enum V {
///     A,
///     B,
///     Other(OtherVersion),
/// }
/// impl V {
///     pub const KNOWN: &'static [Self] = &[Self::A, Self::B];
///     pub const fn full_version(&self) -> u16 {
///         match self {
///             Self::A => 0x0301,
///             Self::B => 0x0302,
///             Self::Other(other) => other.full_version(),
///         }
///     }
///     const fn known(full_version: u16) -> Option<Self> { /* ... */ }
///     const fn known_name(&self) -> Option<&'static str> { /* ... */ }
///     fn from_known_name(name: &str) -> Option<Self> { /* ... */ }
/// }
/// ```
macro_rules! rfc_version_enum {
    (
        $([$($derive_traits:ident),+])?
        $(($visibility:vis))? $name:ident;
        $($keys:ident($vals:literal, $labels:literal)),* $(,)?
        [$other:ident($other_t:ty)]
    ) => {

        $(#[derive($($derive_traits),+)])?
        $($visibility)? enum $name {
            $($keys,)*
            $other($other_t),
        }

        #[allow(unused)]
        impl $name {
            /// every well-known version, in declaration order
            pub const KNOWN: &'static [Self] = &[$(Self::$keys),*];

            pub const fn full_version(&self) -> u16 {
                match self {
                    $(Self::$keys => $vals,)*
                    Self::$other(other) => other.full_version(),
                }
            }

            const fn known(full_version: u16) -> Option<Self> {
                match full_version {
                    $($vals => Some(Self::$keys),)*
                    _ => None,
                }
            }

            const fn known_name(&self) -> Option<&'static str> {
                match self {
                    $(Self::$keys => Some($labels),)*
                    Self::$other(_) => None,
                }
            }

            fn from_known_name(name: &str) -> Option<Self> {
                match name {
                    $($labels => Some(Self::$keys),)*
                    _ => None,
                }
            }
        }

    };
}

#[cfg(test)]
mod test {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Raw(u16);

    impl Raw {
        const fn full_version(&self) -> u16 {
            self.0
        }
    }

    #[test]
    fn test_rfc_version_enum() {
        rfc_version_enum!(
            [Clone, Copy, Debug, PartialEq, Eq] (pub(self)) E;
            A(0x0101, "E 1.1"), B(0x0102, "E 1.2"),
            [Other(Raw)]
        );
        debug_assert_eq!(E::KNOWN, &[E::A, E::B]);
        debug_assert_eq!(E::known(0x0101), Some(E::A));
        debug_assert_eq!(E::known(0x0102), Some(E::B));
        debug_assert_eq!(E::known(0x0103), None);
        debug_assert_eq!(E::B.full_version(), 0x0102);
        debug_assert_eq!(E::Other(Raw(0x0200)).full_version(), 0x0200);
        debug_assert_eq!(E::A.known_name(), Some("E 1.1"));
        debug_assert_eq!(E::Other(Raw(0x0200)).known_name(), None);
        debug_assert_eq!(E::from_known_name("E 1.2"), Some(E::B));
        debug_assert_eq!(E::from_known_name("E 1.3"), None);
    }
}
