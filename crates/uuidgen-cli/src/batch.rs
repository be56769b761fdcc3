use crate::error::{CliError, Result};
use crate::output;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use typed_builder::TypedBuilder;
use uuidgen_core::{Batch, BatchSize, Namespace, Variant};
use uuidgen_generator::{generate, GenerationRequest};

/// One batch-mode invocation.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BatchRequest {
    #[builder(default)]
    pub variant: Variant,
    /// Raw count as given on the command line; validated by [`BatchRequest::validate`].
    #[builder(default = 1)]
    pub count: i64,
    #[builder(default, setter(strip_option, into))]
    pub name: Option<String>,
    #[builder(default)]
    pub namespace: Namespace,
    #[builder(default, setter(strip_option, into))]
    pub output: Option<PathBuf>,
}

/// What a successful batch run produced.
#[derive(Debug)]
pub struct BatchOutcome {
    pub batch: Batch,
    /// Where the batch was saved, if an output file was requested.
    pub saved_to: Option<PathBuf>,
}

impl BatchRequest {
    /// Checks the count, then the name. Nothing is generated on failure.
    pub fn validate(&self) -> Result<(GenerationRequest, BatchSize)> {
        let size = BatchSize::new(self.count)?;

        let name = match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ if self.variant.is_name_based() => {
                return Err(CliError::MissingName {
                    variant: self.variant,
                })
            }
            _ => "",
        };

        Ok((GenerationRequest::new(self.variant, self.namespace, name), size))
    }
}

/// Validates, generates, prints the batch to `out` and saves it if requested.
pub fn run<W: Write>(request: &BatchRequest, out: &mut W) -> Result<BatchOutcome> {
    let (generation, size) = request.validate()?;
    let batch = generate(&generation, size)?;

    output::write_plain(&batch, out)?;

    if let Some(path) = &request.output {
        output::save(&batch, path)?;
        info!(path = %path.display(), count = batch.len(), "batch saved");
    }

    Ok(BatchOutcome {
        batch,
        saved_to: request.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuidgen_core::{CoreError, Identifier};
    use uuidgen_generator::name_based_sha1;

    #[test]
    fn prints_one_id_per_line() {
        let request = BatchRequest::builder().count(3).build();
        let mut out = Vec::new();

        let outcome = run(&request, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| Identifier::is_canonical(line)));
        assert_eq!(outcome.batch.len(), 3);
        assert!(outcome.saved_to.is_none());
    }

    #[test]
    fn invalid_count_produces_no_output() {
        for count in [0, -1, 10_001] {
            let request = BatchRequest::builder().count(count).build();
            let mut out = Vec::new();

            let err = run(&request, &mut out).unwrap_err();

            assert!(matches!(err, CliError::InvalidCount(_)));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn count_is_checked_before_name() {
        let request = BatchRequest::builder()
            .variant(Variant::NameBasedMd5)
            .count(0)
            .build();

        assert!(matches!(
            request.validate(),
            Err(CliError::InvalidCount(CoreError::CountTooSmall { .. }))
        ));
    }

    #[test]
    fn hash_variants_require_a_name() {
        for variant in [Variant::NameBasedMd5, Variant::NameBasedSha1] {
            let missing = BatchRequest::builder().variant(variant).build();
            let empty = BatchRequest::builder().variant(variant).name("").build();

            for request in [missing, empty] {
                let mut out = Vec::new();
                let err = run(&request, &mut out).unwrap_err();
                assert!(matches!(err, CliError::MissingName { .. }));
                assert!(out.is_empty());
            }
        }
    }

    #[test]
    fn name_is_ignored_for_random_and_time_based() {
        let request = BatchRequest::builder()
            .variant(Variant::TimeBased)
            .name("unused")
            .build();
        let (generation, _) = request.validate().unwrap();
        assert_eq!(generation, GenerationRequest::TimeBased);
    }

    #[test]
    fn saves_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let request = BatchRequest::builder()
            .variant(Variant::NameBasedSha1)
            .count(4)
            .name("example")
            .namespace(Namespace::Url)
            .output(path.clone())
            .build();
        let mut out = Vec::new();

        let outcome = run(&request, &mut out).unwrap();

        let expected = name_based_sha1(Namespace::Url, "example", 4).unwrap();
        assert_eq!(outcome.batch, expected);
        assert_eq!(outcome.saved_to.as_deref(), Some(path.as_path()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected.to_lines());
        assert_eq!(String::from_utf8(out).unwrap(), expected.to_lines());
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = BatchRequest::builder()
            .output(dir.path().join("no-such-dir").join("out.txt"))
            .build();
        let mut out = Vec::new();

        let err = run(&request, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Save { .. }));
    }
}
