//! Left-aligned text tables for the day and bank views.
//!
//! Column widths grow to fit the widest cell; the width given to
//! [`Column::new`] is only a minimum.

pub struct Column {
    header: String,
    min_width: usize,
}

impl Column {
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render empty, extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain([col.header.chars().count(), col.min_width])
                    .max()
                    .unwrap_or(col.min_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let line = |cells: Vec<&str>| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<w$}", c, w = *w))
                .collect();
            format!("{}\n", padded.join(" ").trim_end())
        };

        let mut out = line(self.columns.iter().map(|c| c.header.as_str()).collect());
        for row in &self.rows {
            out.push_str(&line(
                (0..self.columns.len())
                    .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect(),
            ));
        }
        out
    }
}
