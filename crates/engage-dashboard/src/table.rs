//! Minimal fixed-width text table used by every dashboard section.

pub struct TextTable {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title));
        out.push_str(&render_line(&self.headers, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&render_line(&rule, &widths));
        if self.rows.is_empty() {
            out.push_str("  (none)\n");
        }
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from(" ");
    for (i, cell) in cells.iter().enumerate() {
        let pad = widths[i] - cell.chars().count();
        line.push_str(&format!(" {}{}", cell, " ".repeat(pad)));
    }
    // No trailing padding on the last column.
    format!("{}\n", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let mut table = TextTable::new("Things", &["Name", "Qty"]);
        table.row(vec!["widget".to_string(), "2".to_string()]);
        table.row(vec!["gadget deluxe".to_string(), "10".to_string()]);
        let rendered = table.render();
        assert!(rendered.contains("Things\n"));
        assert!(rendered.contains("widget        2"));
        assert!(rendered.contains("gadget deluxe 10"));
    }

    #[test]
    fn empty_table_renders_placeholder() {
        let table = TextTable::new("Empty", &["A"]);
        assert!(table.render().contains("(none)"));
    }
}
