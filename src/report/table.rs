//! Plain ASCII table layout used by the table report
//!
//! Columns size to their widest cell with one space of padding on each side.
//! Header cells are centered, with the odd space going to the right.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    align: Align,
}

impl Cell {
    pub fn left(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
        }
    }

    pub fn right(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Right,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) -> &mut Self {
        self.rows.push(row);
        self
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for (i, title) in self.header.iter().enumerate() {
            widths[i] = widths[i].max(title.chars().count());
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }

    /// Render the table, one trailing newline included
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let border = border_line(&widths);

        let mut out = String::new();
        out.push_str(&border);
        out.push_str(&header_line(&self.header, &widths));
        out.push_str(&border);
        for row in &self.rows {
            out.push_str(&row_line(row, &widths));
        }
        out.push_str(&border);
        out
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn header_line(header: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let title = header.get(i).map(String::as_str).unwrap_or_default();
        let gap = width - title.chars().count();
        let left = gap / 2;
        line.push(' ');
        line.push_str(&" ".repeat(left));
        line.push_str(title);
        line.push_str(&" ".repeat(gap - left));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn row_line(row: &[Cell], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let (text, align, used) = match row.get(i) {
            Some(cell) => (cell.text.as_str(), cell.align, cell.width()),
            None => ("", Align::Left, 0),
        };
        let pad = " ".repeat(width - used);
        line.push(' ');
        match align {
            Align::Left => {
                line.push_str(text);
                line.push_str(&pad);
            }
            Align::Right => {
                line.push_str(&pad);
                line.push_str(text);
            }
        }
        line.push_str(" |");
    }
    line.push('\n');
    line
}
