//! Write [DestinationTransaction] values as a YNAB CSV import.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{ConvertError, DestinationTransaction};

/// Suffix appended to the input file name when no output path is given.
pub const DEFAULT_SUFFIX: &str = "ynab";

/// Derive an output path next to `input`, e.g: `/data/export.csv` -> `/data/export_ynab.csv`.
pub fn default_output_path(input: &Path, suffix: &str) -> Result<PathBuf, ConvertError> {
    let stem = input
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or(ConvertError::InvalidInputPath)?;

    let mut file_name = stem.to_os_string();
    file_name.push(format!("_{}.csv", suffix));
    Ok(input.with_file_name(file_name))
}

/// Serialize transactions to CSV, without a header row.
pub fn dump_csv<W: Write>(
    transactions: &[DestinationTransaction],
    writer: &mut csv::Writer<W>,
) -> csv::Result<()> {
    for tx in transactions {
        writer.serialize(tx)?;
    }
    writer.flush()?;
    Ok(())
}

/// The CSV writer configuration used for YNAB imports, which have no header row.
pub fn configured_csv_writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false);
    builder
}

/// Write transactions to `path`. The file is only put in place once its whole content has been
/// written, an existing file is replaced.
pub fn write_transactions(
    transactions: &[DestinationTransaction],
    path: &Path,
) -> Result<(), ConvertError> {
    let failure = |source: std::io::Error| ConvertError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = configured_csv_writer_builder().from_writer(vec![]);
    dump_csv(transactions, &mut writer).map_err(|err| failure(err.into()))?;
    let content = writer
        .into_inner()
        .map_err(|err| failure(std::io::Error::new(err.error().kind(), err.to_string())))?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Created like any other new file, i.e: subject to the umask.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(directory).map_err(failure)?;
    if let Ok(existing) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(failure)?;
    }
    file.write_all(&content).map_err(failure)?;
    file.persist(path).map_err(|err| failure(err.error))?;

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use expect_test::{expect, Expect};

    fn tx(date: &str, payee: &str, memo: &str, amount: &str) -> DestinationTransaction {
        DestinationTransaction {
            date: date.into(),
            payee: payee.into(),
            memo: memo.into(),
            amount: amount.into(),
        }
    }

    fn check_csv(transactions: &[DestinationTransaction], expect: Expect) {
        let mut writer = configured_csv_writer_builder().from_writer(vec![]);
        dump_csv(transactions, &mut writer).unwrap();
        let actual = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        expect.assert_eq(&actual);
    }

    #[test]
    fn default_path_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("/tmp/data/export.csv"), DEFAULT_SUFFIX).unwrap(),
            PathBuf::from("/tmp/data/export_ynab.csv")
        );
    }

    #[test]
    fn default_path_relative_input() {
        assert_eq!(
            default_output_path(Path::new("export.csv"), DEFAULT_SUFFIX).unwrap(),
            PathBuf::from("export_ynab.csv")
        );
    }

    #[test]
    fn default_path_without_extension() {
        assert_eq!(
            default_output_path(Path::new("data/export"), "out").unwrap(),
            PathBuf::from("data/export_out.csv")
        );
    }

    #[test]
    fn default_path_empty_input() {
        let error = default_output_path(Path::new(""), DEFAULT_SUFFIX).unwrap_err();
        assert!(matches!(error, ConvertError::InvalidInputPath));
    }

    #[test]
    fn dump_no_header() {
        check_csv(
            &[
                tx("2023-07-04", "Alice", "Transfer", "-850.00"),
                tx("2023-07-05", "Bob", "Income", "12"),
            ],
            expect![[r#"
                2023-07-04,Alice,Transfer,-850.00
                2023-07-05,Bob,Income,12
            "#]],
        );
    }

    #[test]
    fn dump_quotes_free_text() {
        check_csv(
            &[tx(
                "2023-07-04",
                "Smith, John",
                "Card \"online\" | FX: 10USD @ 1.1",
                "-9.26",
            )],
            expect![[r#"
                2023-07-04,"Smith, John","Card ""online"" | FX: 10USD @ 1.1",-9.26
            "#]],
        );
    }

    #[test]
    fn dump_empty() {
        check_csv(&[], expect![[""]]);
    }

    #[test]
    fn write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let error = write_transactions(&[tx("2023-07-04", "Alice", "Transfer", "1")], &path)
            .unwrap_err();
        assert!(matches!(error, ConvertError::WriteFailure { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn write_new_file_with_default_permissions() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.csv");
        std::fs::write(&reference, "").unwrap();
        let path = dir.path().join("out.csv");
        write_transactions(&[tx("2023-07-04", "Alice", "Transfer", "1")], &path).unwrap();
        assert_eq!(mode(&path), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();
        write_transactions(&[tx("2023-07-04", "Alice", "Transfer", "1")], &path).unwrap();
        assert_eq!(mode(&path), 0o640);
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content\n").unwrap();
        write_transactions(&[tx("2023-07-04", "Alice", "Transfer", "1")], &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2023-07-04,Alice,Transfer,1\n"
        );
    }
}
