//! Plain-text table rendering for query results.

use bookscape_core::result::QueryResult;

/// Format a result as an aligned text table with a `(N rows)` footer.
pub fn format_table(result: &QueryResult) -> String {
    if result.num_columns() == 0 {
        return row_count_footer(result.num_rows());
    }

    let cells: Vec<Vec<String>> = result
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = result
        .columns()
        .iter()
        .map(|column| column.chars().count())
        .collect();
    for row in &cells {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, result.columns(), &widths);
    push_separator(&mut out, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&row_count_footer(result.num_rows()));
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            out.push_str(" | ");
        }
        let cell = cell.as_ref();
        out.push_str(cell);
        let padding = widths[idx] - cell.chars().count();
        // No trailing padding on the last column.
        if idx + 1 < widths.len() {
            out.extend(std::iter::repeat(' ').take(padding));
        }
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    for (idx, width) in widths.iter().enumerate() {
        if idx > 0 {
            out.push_str("-+-");
        }
        out.extend(std::iter::repeat('-').take(*width));
    }
    out.push('\n');
}

fn row_count_footer(count: usize) -> String {
    if count == 1 {
        "(1 row)\n".to_string()
    } else {
        format!("({count} rows)\n")
    }
}
