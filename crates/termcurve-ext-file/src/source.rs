//! CSV rate source.
//!
//! Rate releases are read without header handling and with flexible record
//! lengths, so the header reaches the loader as row 0 and ragged rows survive
//! to be judged by the loader's row rules.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use termcurve_curves::{CurveLoader, LoadOutcome};
use tracing::{debug, warn};

use crate::error::{FileError, FileResult};

/// Reads every record of a CSV file as a row of string fields.
///
/// # Errors
///
/// Returns [`FileError::Io`] if the file cannot be opened.
pub fn read_rows(path: impl AsRef<Path>) -> FileResult<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::io(path, e))?;
    let rows = read_rows_from_reader(file)?;
    debug!(path = %path.display(), rows = rows.len(), "read rate file");
    Ok(rows)
}

/// Reads every record from `reader` as a row of string fields.
///
/// A record the CSV parser rejects (invalid UTF-8, for instance) becomes an
/// empty row, keeping line numbers aligned for the loader, which then reports
/// it as malformed.
///
/// # Errors
///
/// Returns [`FileError::Csv`] if the underlying reader fails.
pub fn read_rows_from_reader<R: Read>(reader: R) -> FileResult<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) if e.is_io_error() => return Err(FileError::Csv(e)),
            Err(e) => {
                warn!(line = index + 1, error = %e, "unreadable CSV record");
                rows.push(Vec::new());
            }
        }
    }
    Ok(rows)
}

/// Reads a rate file and loads the curve for `date_filter`.
///
/// Only an unreadable file is an error; everything else is reported through
/// the returned [`LoadOutcome`].
pub fn load_curve(
    path: impl AsRef<Path>,
    date_filter: Option<&str>,
    loader: &CurveLoader,
) -> FileResult<LoadOutcome> {
    let rows = read_rows(path)?;
    Ok(loader.load(rows, date_filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RELEASE: &str = "\
Date,1 Mo,3 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr
2025-09-16,4.20,4.02,3.85,3.66,3.52,3.47,3.61,3.80,4.06,4.64,4.67
2025-09-17,4.18,4.00,3.83,3.64,3.55
";

    #[test]
    fn test_ragged_rows_survive() {
        let rows = read_rows_from_reader(RELEASE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "Date");
        assert_eq!(rows[1].len(), 12);
        assert_eq!(rows[2].len(), 6);
    }

    #[test]
    fn test_invalid_utf8_becomes_empty_row() {
        let mut bytes = b"date,1MO\n".to_vec();
        bytes.extend_from_slice(b"2025-09-16,\xff\xfe\n2025-09-17,4.18\n");
        let rows = read_rows_from_reader(bytes.as_slice()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2], vec!["2025-09-17", "4.18"]);
    }

    #[test]
    fn test_load_curve_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RELEASE.as_bytes()).unwrap();

        let loader = CurveLoader::default();
        let latest = load_curve(file.path(), None, &loader).unwrap();
        assert_eq!(latest.curve().date(), "2025-09-17");
        assert_eq!(latest.curve().len(), 5);

        let earlier = load_curve(file.path(), Some("2025-09-16"), &loader).unwrap();
        assert_eq!(earlier.curve().len(), 11);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_curve(dir.path().join("missing.csv"), None, &CurveLoader::default())
            .unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }
}
