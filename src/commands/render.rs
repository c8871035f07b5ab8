//! Plain-text tables for `list` output.

use groceries::{GroceryItem, Recipe};

/// Gap between a cell and the next column separator.
const PADDING: usize = 2;

/// Render rows under headers. The first line is the header, the second a
/// dashed rule as wide as the header, then one line per row. Columns after
/// the first are prefixed with `"| "`.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();

    let header = render_line(&widths, headers.iter().copied());
    let rule = "-".repeat(header.chars().count());

    let mut lines = vec![header, rule];
    for row in rows {
        lines.push(render_line(&widths, row.iter().map(String::as_str)));
    }
    lines
}

fn render_line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("| ");
        }
        line.push_str(cell);
        let width = widths.get(i).copied().unwrap_or(0);
        let pad = (width + PADDING).saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    line.trim_end().to_string()
}

pub fn grocery_table(items: &[GroceryItem]) -> Vec<String> {
    let rows: Vec<Vec<String>> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![
                (i + 1).to_string(),
                item.category.to_string(),
                item.name.clone(),
            ]
        })
        .collect();
    table(&["ID.", "Category", "Name"], &rows)
}

pub fn recipe_table(recipes: &[Recipe]) -> Vec<String> {
    let rows: Vec<Vec<String>> = recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| vec![(i + 1).to_string(), recipe.name.clone(), recipe.link.clone()])
        .collect();
    table(&["ID.", "Name", "Link"], &rows)
}
