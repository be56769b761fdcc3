use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use uuidgen_cli::BatchRequest;
use uuidgen_core::{Namespace, Variant};

pub const DEFAULT_COUNT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Timestamp and node based
    #[value(name = "1", alias = "time")]
    Time,
    /// Random
    #[value(name = "4", alias = "random")]
    Random,
    /// MD5 of namespace and name
    #[value(name = "3", alias = "md5")]
    Md5,
    /// SHA-1 of namespace and name
    #[value(name = "5", alias = "sha1")]
    Sha1,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Time => Variant::TimeBased,
            VariantArg::Random => Variant::Random,
            VariantArg::Md5 => Variant::NameBasedMd5,
            VariantArg::Sha1 => Variant::NameBasedSha1,
        }
    }
}

impl Display for VariantArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Variant::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamespaceArg {
    #[value(name = "dns")]
    Dns,
    #[value(name = "url")]
    Url,
    #[value(name = "oid")]
    Oid,
    #[value(name = "x500")]
    X500,
}

impl From<NamespaceArg> for Namespace {
    fn from(value: NamespaceArg) -> Self {
        match value {
            NamespaceArg::Dns => Namespace::Dns,
            NamespaceArg::Url => Namespace::Url,
            NamespaceArg::Oid => Namespace::Oid,
            NamespaceArg::X500 => Namespace::X500,
        }
    }
}

impl Display for NamespaceArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Namespace::from(*self))
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "uuidgen",
    about = "Generate UUIDs",
    after_help = "Name-based UUIDs (types 3 and 5) hash \"<name>_<index>\" for each element of \
                  the batch, so they differ from tools that hash the bare name."
)]
pub struct CLI {
    /// UUID type: 1 (timestamp), 4 (random), 3 (MD5), 5 (SHA-1)
    #[arg(short = 't', long = "type", value_enum, default_value_t = VariantArg::Random)]
    pub variant: VariantArg,

    /// Number of UUIDs to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    pub count: i64,

    /// Name for UUID3/UUID5 generation
    #[arg(short, long)]
    pub name: Option<String>,

    /// Namespace for UUID3/UUID5
    #[arg(short = 'N', long, value_enum, default_value_t = NamespaceArg::Dns)]
    pub namespace: NamespaceArg,

    /// Output file to save UUIDs
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run in interactive mode
    #[arg(
        short,
        long,
        conflicts_with_all = ["variant", "count", "name", "namespace", "output"]
    )]
    pub interactive: bool,
}

impl CLI {
    pub fn to_batch_request(&self) -> BatchRequest {
        BatchRequest {
            variant: self.variant.into(),
            count: self.count,
            name: self.name.clone(),
            namespace: self.namespace.into(),
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        CLI::command().debug_assert();
    }

    #[test]
    fn defaults_to_one_random_uuid() {
        let cli = CLI::try_parse_from(["uuidgen"]).unwrap();
        let request = cli.to_batch_request();

        assert_eq!(request.variant, Variant::Random);
        assert_eq!(request.count, 1);
        assert_eq!(request.namespace, Namespace::Dns);
        assert!(request.name.is_none());
        assert!(!cli.interactive);
    }

    #[test]
    fn parses_type_codes_and_aliases() {
        for (arg, expected) in [
            ("1", Variant::TimeBased),
            ("time", Variant::TimeBased),
            ("4", Variant::Random),
            ("3", Variant::NameBasedMd5),
            ("sha1", Variant::NameBasedSha1),
        ] {
            let cli = CLI::try_parse_from(["uuidgen", "-t", arg]).unwrap();
            assert_eq!(Variant::from(cli.variant), expected);
        }
        assert!(CLI::try_parse_from(["uuidgen", "-t", "2"]).is_err());
    }

    #[test]
    fn accepts_negative_counts_for_validation() {
        let cli = CLI::try_parse_from(["uuidgen", "-c", "-3"]).unwrap();
        assert_eq!(cli.count, -3);
    }

    #[test]
    fn parses_full_batch_invocation() {
        let cli = CLI::try_parse_from([
            "uuidgen", "-t", "5", "-c", "10", "-n", "example", "-N", "x500", "-o", "ids.txt",
        ])
        .unwrap();
        let request = cli.to_batch_request();

        assert_eq!(request.variant, Variant::NameBasedSha1);
        assert_eq!(request.count, 10);
        assert_eq!(request.name.as_deref(), Some("example"));
        assert_eq!(request.namespace, Namespace::X500);
        assert_eq!(request.output, Some(PathBuf::from("ids.txt")));
    }

    #[test]
    fn interactive_conflicts_with_batch_flags() {
        assert!(CLI::try_parse_from(["uuidgen", "-i"]).unwrap().interactive);
        assert!(CLI::try_parse_from(["uuidgen", "-i", "-c", "3"]).is_err());
        assert!(CLI::try_parse_from(["uuidgen", "--interactive", "--type", "3"]).is_err());
    }
}
