use std::io;
use std::path::Path;

use nns_core::{Error, Result, ResultRow};

const HEADERS: [&str; 5] = ["Entity", "Title", "Source", "Published", "URL"];

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn write_rows<W: io::Write>(writer: W, rows: &[ResultRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS).map_err(|e| Error::Export(e.to_string()))?;
    for row in rows {
        csv.write_record([
            row.entity.as_str(),
            cell(&row.title),
            cell(&row.source),
            cell(&row.published),
            cell(&row.url),
        ])
        .map_err(|e| Error::Export(e.to_string()))?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the report verbatim as CSV, columns Entity,Title,Source,Published,URL.
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_rows(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ResultRow {
        ResultRow {
            entity: "a@x.com".to_string(),
            title: Some("Acme sued for fraud".to_string()),
            source: Some("Daily News".to_string()),
            published: Some("2024-03-01".to_string()),
            url: Some("http://example.com/1".to_string()),
        }
    }

    fn to_csv(rows: &[ResultRow]) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_headers_and_row_passthrough() {
        let out = to_csv(&[sample_row()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Entity,Title,Source,Published,URL");
        assert_eq!(
            lines[1],
            "a@x.com,Acme sued for fraud,Daily News,2024-03-01,http://example.com/1"
        );
    }

    #[test]
    fn test_empty_report_still_writes_headers() {
        let out = to_csv(&[]);
        assert_eq!(out.trim_end(), "Entity,Title,Source,Published,URL");
    }

    #[test]
    fn test_missing_fields_export_as_empty_cells() {
        let mut row = sample_row();
        row.title = None;
        row.published = None;
        let out = to_csv(&[row]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "a@x.com,,Daily News,,http://example.com/1");
    }
}
