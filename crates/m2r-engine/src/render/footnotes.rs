use super::{INDENT, Renderer};

fn footnote_item(key: &str, text: &str) -> String {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let mut out = format!(".. [#fn-{key}] {first}\n");
    for line in lines {
        if !line.is_empty() {
            out.push_str(INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

impl Renderer<'_> {
    /// The footnote section, in first-reference order.
    ///
    /// A footnote body may reference further footnotes; those are appended
    /// as they are found. Unreferenced definitions are left out.
    pub fn footnotes(&mut self) -> String {
        let mut items = String::new();
        let mut next = 0;
        while let Some(key) = self.state.referenced.get(next).cloned() {
            next += 1;
            let Some(body) = self.state.footnotes.get(key.as_str()).copied() else {
                continue;
            };
            let text = self.blocks(body, false);
            items.push_str(&footnote_item(&key, text.trim()));
        }
        if items.is_empty() {
            return items;
        }
        format!("\n\n{items}")
    }
}
