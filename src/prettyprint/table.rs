/// A plain text table with box borders:
///
/// ```text
/// +----------+--------+
/// | Exchange | Symbol |
/// +----------+--------+
/// | poloniex | BTC    |
/// +----------+--------+
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Summary row rendered below the body, separated by a border.
    pub fn set_footer<S: Into<String>>(&mut self, footer: impl IntoIterator<Item = S>) {
        self.footer = Some(footer.into_iter().map(Into::into).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(self.footer.iter()) {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let separator = render_separator(&widths);

        let mut output = String::new();
        output.push_str(&separator);
        output.push_str(&render_row(&self.headers, &widths));
        output.push_str(&separator);
        for row in &self.rows {
            output.push_str(&render_row(row, &widths));
        }
        if let Some(footer) = &self.footer {
            if !self.rows.is_empty() {
                output.push_str(&separator);
            }
            output.push_str(&render_row(footer, &widths));
        }
        output.push_str(&separator);
        output
    }
}

fn render_separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn render_row(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line.push('\n');
    line
}
