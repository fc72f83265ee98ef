//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        out.push_str(&self.render_line(self.columns.iter().map(|c| c.header.as_str())));

        // Rows
        for row in &self.rows {
            out.push_str(&self.render_line(row.iter().map(String::as_str)));
        }

        out
    }

    /// Cells beyond the column count are dropped, missing ones are blank.
    fn render_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut cells = cells;
        let line: Vec<String> = self
            .columns
            .iter()
            .map(|col| format!("{:<width$}", cells.next().unwrap_or(""), width = col.width))
            .collect();
        format!("{}\n", line.join(" ").trim_end())
    }
}
