use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{Error, Result};

pub const OUTPUT_EXTENSION: &str = "parquet";

/// How the output path is derived from the input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputNaming {
    /// Swap the file extension for `.parquet`, leaving directories alone.
    #[default]
    Extension,
    /// Replace every `csv` in the path text with `parquet`.
    Substring,
}

/// Derives the output path for `input`.
///
/// Fails with [`Error::OutputCollidesWithInput`] when the derived path is the
/// input itself, which would otherwise truncate the CSV before it is read.
pub fn derive_output_path(input: &Path, naming: OutputNaming) -> Result<PathBuf> {
    let output = match naming {
        OutputNaming::Extension => input.with_extension(OUTPUT_EXTENSION),
        OutputNaming::Substring => {
            let text = input
                .to_str()
                .ok_or_else(|| Error::NonUtf8Path(input.to_path_buf()))?;
            PathBuf::from(text.replace("csv", OUTPUT_EXTENSION))
        }
    };
    check_distinct(input, output)
}

/// Resolves the final output path: an explicit path wins over derivation.
pub fn resolve_output_path(
    input: &Path,
    explicit: Option<&Path>,
    naming: OutputNaming,
) -> Result<PathBuf> {
    match explicit {
        Some(output) => check_distinct(input, output.to_path_buf()),
        None => derive_output_path(input, naming),
    }
}

fn check_distinct(input: &Path, output: PathBuf) -> Result<PathBuf> {
    if same_file(input, &output) {
        return Err(Error::OutputCollidesWithInput(output));
    }
    Ok(output)
}

/// Compares the paths as written and, when the input exists, as resolved on
/// disk, so `./x.csv`, `dir/../x.csv` and symlinks all count as `x.csv`.
fn same_file(input: &Path, output: &Path) -> bool {
    if output == input {
        return true;
    }
    match (fs::canonicalize(input), resolve(output)) {
        (Ok(input), Some(output)) => input == output,
        _ => false,
    }
}

/// Canonical form of a path that may not exist yet: its parent directory is
/// resolved and the file name appended.
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_naming_keeps_directories() {
        let out = derive_output_path(Path::new("a/csv/report.csv"), OutputNaming::Extension)
            .unwrap();
        assert_eq!(out, PathBuf::from("a/csv/report.parquet"));

        let out = derive_output_path(
            Path::new("csv_exports/2024.csv"),
            OutputNaming::Extension,
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("csv_exports/2024.parquet"));
    }

    #[test]
    fn test_extension_naming_without_extension() {
        let out = derive_output_path(Path::new("data/table"), OutputNaming::Extension).unwrap();
        assert_eq!(out, PathBuf::from("data/table.parquet"));

        let out = derive_output_path(Path::new("table.tsv"), OutputNaming::Extension).unwrap();
        assert_eq!(out, PathBuf::from("table.parquet"));
    }

    #[test]
    fn test_substring_naming_rewrites_whole_path() {
        let out = derive_output_path(Path::new("a/csv/report.csv"), OutputNaming::Substring)
            .unwrap();
        assert_eq!(out, PathBuf::from("a/parquet/report.parquet"));

        let out =
            derive_output_path(Path::new("report.csv"), OutputNaming::Substring).unwrap();
        assert_eq!(out, PathBuf::from("report.parquet"));
    }

    #[test]
    fn test_substring_naming_is_case_sensitive() {
        let err = derive_output_path(Path::new("REPORT.CSV"), OutputNaming::Substring)
            .unwrap_err();
        assert!(matches!(err, Error::OutputCollidesWithInput(_)));
    }

    #[test]
    fn test_parquet_input_collides() {
        let err = derive_output_path(Path::new("out/data.parquet"), OutputNaming::Extension)
            .unwrap_err();
        assert!(matches!(err, Error::OutputCollidesWithInput(p) if p == Path::new("out/data.parquet")));
    }

    #[cfg(unix)]
    #[test]
    fn test_substring_naming_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new(OsStr::from_bytes(b"data\xff.csv"));
        let err = derive_output_path(input, OutputNaming::Substring).unwrap_err();
        assert!(matches!(err, Error::NonUtf8Path(p) if p == input));

        let out = derive_output_path(input, OutputNaming::Extension).unwrap();
        assert_eq!(out.file_stem(), input.file_stem());
    }

    #[test]
    fn test_resolved_spellings_collide() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let input = dir.path().join("people.csv");
        fs::write(&input, "a\n1\n").unwrap();

        let dotted = dir.path().join("sub").join("..").join("people.csv");
        assert!(resolve_output_path(&input, Some(&dotted), OutputNaming::Extension).is_err());

        let current = dir.path().join(".").join("people.csv");
        assert!(resolve_output_path(&input, Some(&current), OutputNaming::Extension).is_err());

        let sibling = dir.path().join("sub").join("people.csv");
        assert_eq!(
            resolve_output_path(&input, Some(&sibling), OutputNaming::Extension).unwrap(),
            sibling
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_input_collides() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("people.csv");
        fs::write(&input, "a\n1\n").unwrap();
        let link = dir.path().join("people.parquet");
        std::os::unix::fs::symlink(&input, &link).unwrap();

        let err = derive_output_path(&input, OutputNaming::Extension).unwrap_err();
        assert!(matches!(err, Error::OutputCollidesWithInput(p) if p == link));
    }

    #[test]
    fn test_explicit_output_wins() {
        let out = resolve_output_path(
            Path::new("in.csv"),
            Some(Path::new("elsewhere/out.pq")),
            OutputNaming::Substring,
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("elsewhere/out.pq"));

        let err = resolve_output_path(
            Path::new("in.csv"),
            Some(Path::new("in.csv")),
            OutputNaming::Extension,
        )
        .unwrap_err();
        assert!(matches!(err, Error::OutputCollidesWithInput(_)));
    }
}
