//! CSV loading into Polars DataFrames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Field values read as missing, in addition to empty fields.
pub const MISSING_VALUE_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column count above which a load is logged as unusually wide.
const WIDE_TABLE_COLUMNS: usize = 500;

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Validate that the input is not UTF-16 encoded.
///
/// A UTF-8 BOM is accepted and stripped from the first header.
pub fn validate_encoding(bytes: &[u8], path: &Path) -> Result<()> {
    if bytes.len() >= 2 {
        // UTF-16 LE BOM
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

fn csv_error(path: &Path, error: &::csv::Error) -> IngestError {
    match error.kind() {
        ::csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => IngestError::RaggedRow {
            path: path.to_path_buf(),
            line: pos.as_ref().map_or(0, ::csv::Position::line),
            expected: *expected_len as usize,
            found: *len as usize,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        },
    }
}

/// Reads the header row and checks that every record matches its width.
///
/// This pass runs before Polars sees the data so malformed input fails with
/// the offending line number instead of a partially inferred frame.
pub fn read_csv_schema(bytes: &[u8], path: &Path) -> Result<CsvHeaders> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);
    let header_record = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .clone();

    let mut record = ::csv::ByteRecord::new();
    let mut row_count = 0usize;
    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => row_count += 1,
            Ok(false) => break,
            Err(error) => return Err(csv_error(path, &error)),
        }
    }

    let headers = CsvHeaders::new(header_record.iter(), row_count);
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    headers.validate(path)?;
    Ok(headers)
}

/// Loads a CSV file from disk into a DataFrame.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    load_table_from_bytes(bytes, path)
}

/// Loads CSV content held in memory (e.g. an uploaded file) into a DataFrame.
///
/// `origin` names the input in error messages; it is never opened.
/// Column types are inferred from every row, so integer and float columns
/// come back numeric and everything else stays text. Empty fields and the
/// [`MISSING_VALUE_TOKENS`] are read as nulls.
pub fn load_table_from_bytes(bytes: Vec<u8>, origin: &Path) -> Result<DataFrame> {
    validate_encoding(&bytes, origin)?;
    let headers = read_csv_schema(&bytes, origin)?;

    let null_values = MISSING_VALUE_TOKENS
        .into_iter()
        .map(PlSmallStr::from_static)
        .collect();
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default().with_null_values(Some(NullValues::AllColumns(null_values))),
        )
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: origin.to_path_buf(),
            message: format!(
                "parsed {} columns, header declares {}",
                df.width(),
                headers.len()
            ),
        });
    }
    df.set_column_names(headers.columns.iter().map(String::as_str))?;

    if df.height() != headers.row_count {
        debug!(
            path = %origin.display(),
            records = headers.row_count,
            rows = df.height(),
            "record count differs from parsed row count"
        );
    }
    if df.width() > WIDE_TABLE_COLUMNS {
        warn!(
            path = %origin.display(),
            columns = df.width(),
            "table has more than {WIDE_TABLE_COLUMNS} columns"
        );
    }
    debug!(
        path = %origin.display(),
        rows = df.height(),
        columns = df.width(),
        "table loaded"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_schema() {
        let headers = read_csv_schema(b"A,B,C\n1,2,3\n4,5,6\n", Path::new("t.csv")).unwrap();

        assert_eq!(headers.columns, vec!["A", "B", "C"]);
        assert_eq!(headers.row_count, 2);
    }

    #[test]
    fn test_read_csv_schema_empty_input() {
        let result = read_csv_schema(b"", Path::new("t.csv"));

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_schema_ragged_row() {
        let result = read_csv_schema(b"a,b\n1,2\n3,4,5\n", Path::new("t.csv"));

        assert!(matches!(
            result,
            Err(IngestError::RaggedRow {
                line: 3,
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_encoding_utf16() {
        let result = validate_encoding(&[0xFF, 0xFE, 0x41, 0x00], Path::new("t.csv"));

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_load_table_infers_types() {
        let file = create_temp_csv("id,name,price\n1,apple,1.5\n2,pear,2.25\n");
        let df = load_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("id").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("name").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("price").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_load_table_with_bom_and_padded_headers() {
        let file = create_temp_csv("\u{feff} id , total amount \n1,10\n");
        let df = load_table(file.path()).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["id", "total amount"]);
    }

    #[test]
    fn test_check_file_size_limit() {
        let file = create_temp_csv("a,b\n1,2\n");
        let result = check_file_size_with_limit(file.path(), 4);

        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_table(Path::new("/definitely/not/here.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
