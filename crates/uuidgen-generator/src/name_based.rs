use crate::{error::GeneratorError, Generator};
use std::fmt::Display;
use typed_builder::TypedBuilder;
use uuid::Uuid;
use uuidgen_core::{Identifier, Namespace, Variant};

/// The one-way hash behind a name-based identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// Version 3.
    Md5,
    /// Version 5.
    Sha1,
}

impl HashAlgorithm {
    pub fn variant(self) -> Variant {
        match self {
            HashAlgorithm::Md5 => Variant::NameBasedMd5,
            HashAlgorithm::Sha1 => Variant::NameBasedSha1,
        }
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha1 => write!(f, "sha1"),
        }
    }
}

/// Deterministic generator deriving identifiers from a namespace and a name.
///
/// Element `i` of a batch hashes `"{name}_{i}"` rather than `name` itself, so
/// a batch of N holds N distinct identifiers. This differs from the usual one
/// identifier per name, and the output will not match other tools that hash
/// the bare name.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct NameBased {
    #[builder(default)]
    namespace: Namespace,
    #[builder(setter(into))]
    name: String,
    hash: HashAlgorithm,
}

impl NameBased {
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// The hashed input for the element at `index`.
    pub fn element_name(&self, index: usize) -> String {
        format!("{}_{}", self.name, index)
    }

    pub fn derive(&self, index: usize) -> Identifier {
        let input = self.element_name(index);
        let namespace = self.namespace.uuid();
        let uuid = match self.hash {
            HashAlgorithm::Md5 => Uuid::new_v3(namespace, input.as_bytes()),
            HashAlgorithm::Sha1 => Uuid::new_v5(namespace, input.as_bytes()),
        };
        uuid.into()
    }
}

impl Generator for NameBased {
    fn generate(&self, index: usize) -> Result<Identifier, GeneratorError> {
        Ok(self.derive(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha1_dns(name: &str) -> NameBased {
        NameBased::builder()
            .name(name)
            .hash(HashAlgorithm::Sha1)
            .build()
    }

    #[test]
    fn element_name_appends_underscore_and_index() {
        let gen = sha1_dns("example");
        assert_eq!(gen.element_name(0), "example_0");
        assert_eq!(gen.element_name(42), "example_42");
    }

    #[test]
    fn derives_from_suffixed_name() {
        let gen = sha1_dns("python.org");
        assert_eq!(
            gen.derive(0).as_uuid(),
            &Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"python.org_0")
        );
        assert_ne!(
            gen.derive(0).to_string(),
            "886313e1-3b8a-5372-9b90-0c9aee199e5d"
        );
    }

    #[test]
    fn md5_uses_version_3() {
        let gen = NameBased::builder()
            .namespace(Namespace::Url)
            .name("https://example.com")
            .hash(HashAlgorithm::Md5)
            .build();
        let id = gen.derive(3);

        assert_eq!(id.version(), 3);
        assert_eq!(
            id.as_uuid(),
            &Uuid::new_v3(&Uuid::NAMESPACE_URL, b"https://example.com_3")
        );
    }

    #[test]
    fn namespace_changes_the_result() {
        let dns = sha1_dns("example");
        let oid = NameBased::builder()
            .namespace(Namespace::Oid)
            .name("example")
            .hash(HashAlgorithm::Sha1)
            .build();
        assert_ne!(dns.derive(0), oid.derive(0));
    }
}
