//! CSV file reading.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::header::parse_csv_line;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects files carrying a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted and stripped from the first header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads the header row of a CSV file.
///
/// Names are trimmed and a leading BOM is removed. Cheap enough to call
/// before committing to a full parse.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    if bytes == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    let columns = parse_csv_line(line);
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads a CSV file into a DataFrame with every column as `String`.
///
/// Typing is left to later stages: year cells are parsed one by one so a
/// stray `"n/a"` becomes a missing value instead of a parse failure.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_dataframe_shape(&df, path)?;
    Ok(df)
}

/// Checks for empty frames and blank column names.
fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_headers() {
        let file = create_temp_csv(b"Country, ISO3 ,1961\nChile,CHL,0.1\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["Country", "ISO3", "1961"]);
    }

    #[test]
    fn test_read_csv_headers_with_bom_and_crlf() {
        let file = create_temp_csv("\u{feff}Country,1961\r\nChile,0.1\r\n".as_bytes());
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["Country", "1961"]);
    }

    #[test]
    fn test_read_csv_headers_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_csv_headers(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_headers_missing_file() {
        let result = read_csv_headers(Path::new("/nonexistent/indicator.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'C', 0x00]);
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_check_file_size_with_limit() {
        let file = create_temp_csv(b"Country,1961\nChile,0.1\n");
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        let result = check_file_size_with_limit(file.path(), 4);
        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
    }

    #[test]
    fn test_read_csv_frame_reads_strings() {
        let file = create_temp_csv(b"Country,1961,1962\nChile,0.1,\nPeru,n/a,0.3\n");
        let df = read_csv_frame(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("1961").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_read_csv_frame_header_only() {
        let file = create_temp_csv(b"Country,1961\n");
        let result = read_csv_frame(file.path());
        assert!(matches!(
            result,
            Err(IngestError::EmptyDataFrame { .. } | IngestError::CsvParse { .. })
        ));
    }
}
