//! Text preview of the first table rows.

use polars::prelude::DataFrame;

use eda_ingest::any_to_string;
use eda_model::TablePreview;

use crate::error::Result;

/// Renders up to `rows` leading rows as text; nulls become empty cells.
pub fn preview(df: &DataFrame, rows: usize) -> Result<TablePreview> {
    let head = df.head(Some(rows));
    let columns = head
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut cells = Vec::with_capacity(head.height());
    for index in 0..head.height() {
        let row = head
            .get_columns()
            .iter()
            .map(|column| column.get(index).map(any_to_string))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        cells.push(row);
    }

    Ok(TablePreview {
        columns,
        rows: cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn preview_truncates_and_blanks_nulls() {
        let df = df! {
            "name" => &[Some("a"), None, Some("c")],
            "score" => &[1.50, 2.0, 3.25],
        }
        .unwrap();
        let preview = preview(&df, 2).unwrap();

        assert_eq!(preview.columns, vec!["name", "score"]);
        assert_eq!(
            preview.rows,
            vec![
                vec!["a".to_string(), "1.5".to_string()],
                vec![String::new(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn short_tables_are_shown_whole() {
        let df = df! { "x" => &[1i64] }.unwrap();
        assert_eq!(preview(&df, 10).unwrap().rows.len(), 1);
    }
}
