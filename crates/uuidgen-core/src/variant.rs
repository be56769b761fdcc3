use std::fmt::Display;

/// The derivation method of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Version 1: timestamp, clock sequence and node identifier.
    TimeBased,
    /// Version 4: random bits.
    #[default]
    Random,
    /// Version 3: MD5 of namespace and name.
    NameBasedMd5,
    /// Version 5: SHA-1 of namespace and name.
    NameBasedSha1,
}

impl Variant {
    /// All variants, in menu order.
    pub const ALL: [Variant; 4] = [
        Variant::TimeBased,
        Variant::Random,
        Variant::NameBasedMd5,
        Variant::NameBasedSha1,
    ];

    /// The version number written into identifiers of this variant.
    pub fn version(self) -> usize {
        match self {
            Variant::TimeBased => 1,
            Variant::Random => 4,
            Variant::NameBasedMd5 => 3,
            Variant::NameBasedSha1 => 5,
        }
    }

    /// Name-based variants need a namespace and a name.
    pub fn is_name_based(self) -> bool {
        matches!(self, Variant::NameBasedMd5 | Variant::NameBasedSha1)
    }

    pub fn description(self) -> &'static str {
        match self {
            Variant::TimeBased => "UUID1 (timestamp and node based)",
            Variant::Random => "UUID4 (random) - Most common",
            Variant::NameBasedMd5 => "UUID3 (MD5 hash based - requires namespace and name)",
            Variant::NameBasedSha1 => "UUID5 (SHA-1 hash based - requires namespace and name)",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UUID{}", self.version())
    }
}
