use std::fmt::Display;
use uuid::Uuid;

/// One of the four predefined namespaces used to salt name-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    #[default]
    Dns,
    Url,
    Oid,
    X500,
}

impl Namespace {
    /// All namespaces, in menu order.
    pub const ALL: [Namespace; 4] = [
        Namespace::Dns,
        Namespace::Url,
        Namespace::Oid,
        Namespace::X500,
    ];

    /// The namespace identifier defined in RFC 4122 Appendix C.
    pub fn uuid(self) -> &'static Uuid {
        match self {
            Namespace::Dns => &Uuid::NAMESPACE_DNS,
            Namespace::Url => &Uuid::NAMESPACE_URL,
            Namespace::Oid => &Uuid::NAMESPACE_OID,
            Namespace::X500 => &Uuid::NAMESPACE_X500,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Namespace::Dns => "DNS",
            Namespace::Url => "URL",
            Namespace::Oid => "OID",
            Namespace::X500 => "X500",
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
