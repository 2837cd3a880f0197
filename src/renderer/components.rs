use std::borrow::Cow;

/// Escapes text placed between tags.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// `<div class="...">` around already-rendered content.
pub fn div(class: Option<&str>, content: &str) -> String {
    match class {
        Some(class) => format!("<div class=\"{}\">{}</div>", class, content),
        None => format!("<div>{}</div>", content),
    }
}

/// A labeled line inside a method info block.
pub fn info_line(label: &str, content: &str) -> String {
    format!(
        "<div><span class=\"label\">{}</span><span>{}</span></div>",
        escape(label),
        content
    )
}

/// Incremental writer for one `<table>` with an optional title header.
///
/// Always yields balanced markup: `finish` closes whatever was opened.
pub struct TableWriter {
    output: String,
    body_open: bool,
}

impl TableWriter {
    pub fn new(class: &str) -> Self {
        Self {
            output: format!("<table class=\"{}\">", class),
            body_open: false,
        }
    }

    /// Debug tables carry the `debug` class next to their category class.
    pub fn debug(category_class: &str) -> Self {
        Self::new(&format!("debug {}", category_class))
    }

    pub fn title(mut self, title: &str, colspan: usize) -> Self {
        self.output.push_str(&format!(
            "<thead><tr><th colspan=\"{}\">{}</th></tr></thead>",
            colspan,
            escape(title)
        ));
        self
    }

    /// Header row of plain `<th>` cells.
    pub fn header(mut self, columns: &[&str]) -> Self {
        self.output.push_str("<thead><tr>");
        for column in columns {
            self.output.push_str(&format!("<th>{}</th>", escape(column)));
        }
        self.output.push_str("</tr></thead>");
        self
    }

    fn open_body(&mut self) {
        if !self.body_open {
            self.output.push_str("<tbody>");
            self.body_open = true;
        }
    }

    /// `label | content` row with the label cell styled as a label.
    pub fn label_row(&mut self, label: &str, content: &str) {
        self.open_body();
        self.output.push_str(&format!(
            "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
            escape(label),
            content
        ));
    }

    /// Same as `label_row`, with attributes on the `<tr>`.
    pub fn label_row_with(&mut self, row_attributes: &str, label: &str, content: &str) {
        self.open_body();
        self.output.push_str(&format!(
            "<tr {}><td class=\"label\">{}</td><td>{}</td></tr>",
            row_attributes,
            escape(label),
            content
        ));
    }

    /// Row of already-rendered cells.
    pub fn cells_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.open_body();
        self.output.push_str("<tr>");
        for cell in cells {
            self.output.push_str("<td>");
            self.output.push_str(cell.as_ref());
            self.output.push_str("</td>");
        }
        self.output.push_str("</tr>");
    }

    /// Already-balanced `<tr>` markup.
    pub fn raw_row(&mut self, row: &str) {
        self.open_body();
        self.output.push_str(row);
    }

    pub fn finish(mut self) -> String {
        self.open_body();
        self.output.push_str("</tbody></table>");
        self.output
    }
}
