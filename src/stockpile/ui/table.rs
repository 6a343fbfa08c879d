use super::styles::STOCK_THEME;
use crate::model::{Group, ItemView};
use unicode_width::UnicodeWidthStr;

/// A boxed text table, rendered line by line.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// ID, Name, Group, Quantity: the interactive listing.
    pub fn inventory(views: &[ItemView]) -> Self {
        let mut table = Self::new(&["ID", "Name", "Group", "Quantity"]);
        for view in views {
            table.add_row(vec![
                view.id.to_string(),
                view.name.clone(),
                view.group.clone(),
                view.quantity.to_string(),
            ]);
        }
        table
    }

    /// Name, Quantity, Group: the one-shot listing.
    pub fn summary(views: &[ItemView]) -> Self {
        let mut table = Self::new(&["Name", "Quantity", "Group"]);
        for view in views {
            table.add_row(vec![
                view.name.clone(),
                view.quantity.to_string(),
                view.group.clone(),
            ]);
        }
        table
    }

    pub fn groups(groups: &[Group]) -> Self {
        let mut table = Self::new(&["ID", "Name"]);
        for group in groups {
            table.add_row(vec![group.id.to_string(), group.name.clone()]);
        }
        table
    }

    /// Rows shorter than the header are padded with empty cells.
    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> Vec<String> {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = |left: &str, mid: &str, right: &str| {
            let bars: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            STOCK_THEME
                .border
                .apply_to(format!("{}{}{}", left, bars.join(mid), right))
                .to_string()
        };
        let bar = STOCK_THEME.border.apply_to("│").to_string();
        let line = |cells: &[String], header: bool| {
            let cells: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let padding = " ".repeat(width.saturating_sub(cell.width()));
                    if header {
                        format!(" {}{} ", STOCK_THEME.table_header.apply_to(cell), padding)
                    } else {
                        format!(" {}{} ", cell, padding)
                    }
                })
                .collect();
            format!("{}{}{}", bar, cells.join(&bar), bar)
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(border("┌", "┬", "┐"));
        lines.push(line(&self.headers, true));
        lines.push(border("├", "┼", "┤"));
        for row in &self.rows {
            lines.push(line(row, false));
        }
        lines.push(border("└", "┴", "┘"));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn plain(table: &Table) -> Vec<String> {
        table
            .render()
            .iter()
            .map(|l| console::strip_ansi_codes(l).into_owned())
            .collect()
    }

    #[test]
    fn columns_fit_widest_cell() {
        let mut table = Table::new(&["Name", "Qty"]);
        table.add_row(vec!["Keyboard".into(), "5".into()]);
        table.add_row(vec!["Mouse".into(), "12".into()]);

        let lines = plain(&table);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "│ Name     │ Qty │");
        assert_eq!(lines[3], "│ Keyboard │ 5   │");
        assert_eq!(lines[4], "│ Mouse    │ 12  │");
        assert_eq!(lines[0], "┌──────────┬─────┐");
    }

    #[test]
    fn wide_characters_keep_alignment() {
        let mut table = Table::new(&["Name"]);
        table.add_row(vec!["日本".into()]);
        table.add_row(vec!["abcd".into()]);

        let lines = plain(&table);
        assert_eq!(lines[3], "│ 日本 │");
        assert_eq!(lines[4], "│ abcd │");
    }

    #[test]
    fn summary_uses_name_quantity_group() {
        let view = ItemView::join(&Item::new("Mouse", 5, None), &[], "None");
        let lines = plain(&Table::summary(&[view]));
        assert!(lines[1].contains("Name"));
        assert!(lines[3].contains("│ Mouse │ 5        │ None  │"));
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["x".into()]);
        assert!(!table.is_empty());
        assert_eq!(plain(&table)[3], "│ x │   │");
    }
}
