use nns_core::ResultRow;

const HEADERS: [&str; 5] = ["Entity", "Title", "Source", "Published", "URL"];

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Renders the report as a plain aligned text table, one row per match.
pub fn format_table(rows: &[ResultRow]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    let cells: Vec<[&str; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.entity.as_str(),
                cell(&row.title),
                cell(&row.source),
                cell(&row.published),
                cell(&row.url),
            ]
        })
        .collect();

    for row in &cells {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    let mut out = String::new();
    render_line(&mut out, &HEADERS, &widths);
    for row in &cells {
        render_line(&mut out, row, &widths);
    }
    out
}

fn render_line(out: &mut String, row: &[&str; 5], widths: &[usize]) {
    for (i, value) in row.iter().enumerate() {
        if i + 1 == row.len() {
            // last column left unpadded
            out.push_str(value);
        } else {
            out.push_str(&format!("{:<width$}  ", value, width = widths[i]));
        }
    }
    out.push('\n');
}

pub fn print_table(rows: &[ResultRow]) {
    print!("{}", format_table(rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entity: &str, title: Option<&str>) -> ResultRow {
        ResultRow {
            entity: entity.to_string(),
            title: title.map(str::to_string),
            source: Some("Daily News".to_string()),
            published: Some("2024-03-01".to_string()),
            url: Some("http://example.com/1".to_string()),
        }
    }

    #[test]
    fn test_header_comes_first() {
        let table = format_table(&[row("a@x.com", Some("Acme sued for fraud"))]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Entity"));
        assert!(lines[1].starts_with("a@x.com"));
        assert!(lines[1].contains("2024-03-01"));
    }

    #[test]
    fn test_columns_align_across_rows() {
        let table = format_table(&[
            row("a@x.com", Some("Acme sued for fraud")),
            row("A Much Longer Business Name LLC", None),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        let header_col = lines[0].find("Published").unwrap();
        assert_eq!(lines[1].find("2024-03-01").unwrap(), header_col);
        assert_eq!(lines[2].find("2024-03-01").unwrap(), header_col);
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let mut r = row("a@x.com", None);
        r.source = None;
        r.published = None;
        r.url = None;
        let table = format_table(&[r]);
        assert!(table.lines().nth(1).unwrap().starts_with("a@x.com"));
    }
}
