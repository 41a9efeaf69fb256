//! Text rendering of the current table page
//!
//! Renders the grid view:
//! - 1-based row-number gutter
//! - column headers
//! - one line per row in the current page window, numbers right-aligned
//! - pagination footer

use crate::model::{AppModel, Pager, Table, Value};

const MIN_COL_WIDTH: usize = 4;
const MAX_COL_WIDTH: usize = 40;

/// Render the whole view: grid (or placeholder) plus footer
pub fn render(model: &AppModel) -> String {
    match model.session.table() {
        Some(table) => render_page(table, &model.pager),
        None if model.session.is_loading() => "Loading...\n".to_string(),
        None => "No data loaded. Use `open <file.csv>` to load a file.\n".to_string(),
    }
}

/// Render the current page of a table
fn render_page(table: &Table, pager: &Pager) -> String {
    let range = pager.page_range(table.row_count());
    let widths = column_widths(table, range.clone());
    let gutter = digits(table.row_count()).max(1);

    let mut out = String::new();

    // Header line
    out.push_str(&" ".repeat(gutter));
    for (col, name) in table.columns().iter().enumerate() {
        out.push_str("  ");
        out.push_str(&pad(&truncate_text(name, widths[col]), widths[col], false));
    }
    out.push('\n');

    for row_idx in range {
        let row = &table.rows()[row_idx];
        out.push_str(&format!("{:>width$}", row_idx + 1, width = gutter));
        for col in 0..table.column_count() {
            let cell = row.get(col);
            let right_align = cell.map_or(false, Value::is_number);
            let text = cell.map(|v| v.to_string()).unwrap_or_default();
            out.push_str("  ");
            out.push_str(&pad(&truncate_text(&text, widths[col]), widths[col], right_align));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Page {} of {} | {} rows | page size {}\n",
        pager.page_index() + 1,
        pager.page_count(table.row_count()),
        table.row_count(),
        pager.page_size(),
    ));
    out
}

/// Column widths from the header and the rows in the visible window,
/// clamped to a sane range
fn column_widths(table: &Table, range: std::ops::Range<usize>) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|name| name.chars().count().clamp(MIN_COL_WIDTH, MAX_COL_WIDTH))
        .collect();

    for row in &table.rows()[range] {
        for (col, cell) in row.cells().enumerate() {
            if let Some(value) = cell {
                let cell_width = value.to_string().chars().count();
                widths[col] = widths[col].max(cell_width).min(MAX_COL_WIDTH);
            }
        }
    }

    widths
}

fn digits(n: usize) -> usize {
    ((n.max(1) as f64).log10().floor() as usize) + 1
}

fn pad(s: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", s, width = width)
    } else {
        format!("{:<width$}", s, width = width)
    }
}

/// Truncate text with ellipsis if too long
fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::messages::SessionMsg;
    use crate::update::update_session;
    use std::path::PathBuf;

    fn loaded_model(content: &str) -> AppModel {
        let mut model = AppModel::new(GridConfig::default());
        let path = PathBuf::from("test.csv");
        update_session(&mut model, SessionMsg::BeginLoad(path.clone()));
        update_session(
            &mut model,
            SessionMsg::LoadCompleted {
                path,
                content: content.to_string(),
            },
        );
        model
    }

    #[test]
    fn test_render_empty_model() {
        let model = AppModel::new(GridConfig::default());
        assert!(render(&model).contains("No data loaded"));
    }

    #[test]
    fn test_render_grid() {
        let model = loaded_model("name,age\nAlice,30\nBob,25\n");
        let out = render(&model);

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("name"));
        assert!(lines[0].contains("age"));
        assert!(lines[1].starts_with('1'));
        assert!(lines[1].contains("Alice"));
        assert!(lines[2].starts_with('2'));
        assert!(lines[2].contains("Bob"));
        assert_eq!(lines[3], "Page 1 of 1 | 2 rows | page size 10");
    }

    #[test]
    fn test_render_shows_only_current_page() {
        let mut content = String::from("n\n");
        for i in 0..25 {
            content.push_str(&format!("row{}\n", i));
        }
        let mut model = loaded_model(&content);
        model.pager.goto(2, 25);

        let out = render(&model);
        assert!(out.contains("row20"));
        assert!(!out.contains("row19"));
        assert!(out.contains("Page 3 of 3"));
    }

    #[test]
    fn test_render_blank_row_as_empty_cells() {
        let mut model = loaded_model("name,age\nBob,26\n");
        model.session.table_mut().unwrap().add_row();

        let out = render(&model);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].starts_with('2'));
        assert_eq!(lines[2].trim_end(), "2");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hell…");
        assert_eq!(truncate_text("ab", 2), "ab");
        assert_eq!(truncate_text("abc", 1), "a");
    }

    #[test]
    fn test_numbers_right_aligned() {
        let model = loaded_model("name,amount\nAl,5\nLongname,12345\n");
        let out = render(&model);
        let lines: Vec<&str> = out.lines().collect();
        // Both numbers end at the same column
        assert_eq!(lines[1].trim_end().len(), lines[2].trim_end().len());
    }
}
