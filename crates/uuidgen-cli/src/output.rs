use crate::error::{CliError, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;
use uuidgen_core::Batch;

/// Filename offered when the user saves without naming a file.
pub const DEFAULT_OUTPUT_FILE: &str = "uuids.txt";

const RULE_WIDTH: usize = 40;

/// Writes one identifier per line.
pub fn write_plain<W: Write>(batch: &Batch, out: &mut W) -> std::io::Result<()> {
    out.write_all(batch.to_lines().as_bytes())?;
    out.flush()
}

/// Renders the batch as a header, a rule and 1-based ordinal lines.
pub fn render_labeled(batch: &Batch) -> String {
    let mut text = format!("\nGenerated {} UUID(s):\n{}\n", batch.len(), "-".repeat(RULE_WIDTH));
    for (ordinal, id) in batch.iter().enumerate() {
        text.push_str(&format!("{:>3}: {}\n", ordinal + 1, id));
    }
    text
}

/// Saves the batch to `path`, replacing any existing file, in a single write.
pub fn save(batch: &Batch, path: &Path) -> Result<()> {
    std::fs::write(path, batch.to_lines()).map_err(|error| CliError::Save {
        path: path.to_path_buf(),
        error,
    })?;
    debug!(path = %path.display(), count = batch.len(), "saved batch");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuidgen_generator::random;

    #[test]
    fn labeled_output_numbers_from_one() {
        let batch = random(2).unwrap();
        let ids = batch.to_strings();

        let expected = format!(
            "\nGenerated 2 UUID(s):\n{}\n  1: {}\n  2: {}\n",
            "-".repeat(40),
            ids[0],
            ids[1]
        );
        assert_eq!(render_labeled(&batch), expected);
    }

    #[test]
    fn plain_output_is_one_id_per_line() {
        let batch = random(3).unwrap();
        let mut out = Vec::new();
        write_plain(&batch, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), batch.to_strings());
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        std::fs::write(&path, "stale contents that are longer than one line\n\n\n").unwrap();

        let batch = random(1).unwrap();
        save(&batch, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), batch.to_lines());
    }

    #[test]
    fn save_reports_the_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ids.txt");

        let err = save(&random(1).unwrap(), &path).unwrap_err();
        assert!(matches!(err, CliError::Save { .. }));
        assert!(err.to_string().contains("ids.txt"));
    }
}
