//! Plain-text tables for the list screens.

/// A left-aligned text table with a header rule.
///
/// ```ignore
/// let mut table = Table::new(["Name", "Type"]);
/// table.row(["Maple", "Boys"]);
/// println!("{}", table.render());
/// ```
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_line(&self.headers, &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            lines.push(format_line(row, &widths));
        }
        lines.join("\n")
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Two-column key/value listing used by the `show` commands.
pub fn details(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(key, value)| format!("{:<width$}  {}", key, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_padded_to_widest_cell() {
        let mut table = Table::new(["Name", "Type"]);
        table.row(["Maple", "Boys"]).row(["Cedar Court", "Girls"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name         Type");
        assert_eq!(lines[1], "-----------  -----");
        assert_eq!(lines[2], "Maple        Boys");
        assert_eq!(lines[3], "Cedar Court  Girls");
    }

    #[test]
    fn test_short_rows_are_filled() {
        let mut table = Table::new(["A", "B"]);
        table.row(["x"]);
        assert_eq!(table.render().lines().nth(2), Some("x"));
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = Table::new(["Roll No", "Name"]);
        assert!(table.is_empty());
        assert_eq!(table.render().lines().count(), 2);
    }

    #[test]
    fn test_details_align_keys() {
        let text = details(&[("Name", "Maple".to_string()), ("Warden", "N/A".to_string())]);
        assert_eq!(text, "Name    Maple\nWarden  N/A");
    }
}
