//! CSV table reading.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{
    MAX_CSV_FILE_SIZE, MISSING_VALUE_TOKENS, check_file_size, check_file_size_with_limit, load_table,
    load_table_from_bytes, read_csv_schema, validate_encoding,
};
