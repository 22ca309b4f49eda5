use crate::parsing::BlockToken;
use crate::parsing::blocks::ListItem;

use super::Renderer;

pub const BULLET_MARK: &str = "* ";
pub const ORDERED_MARK: &str = "#. ";

/// Stands in for an item's marker until the list knows its indentation.
fn placeholder(depth: usize) -> String {
    format!("{{#m2r-list-marker-{depth}#}}")
}

impl Renderer<'_> {
    pub fn list(&mut self, ordered: bool, items: &[ListItem]) -> String {
        self.state.list_depth += 1;
        let marker = placeholder(self.state.list_depth);
        let mut body = String::new();
        for item in items {
            let rendered = self.item(item);
            body.push('\n');
            body.push_str(&marker);
            body.push_str(rendered.trim_start_matches('\n'));
        }
        self.state.list_depth -= 1;

        let mark = if ordered { ORDERED_MARK } else { BULLET_MARK };
        let pad = " ".repeat(mark.len());
        let lines: Vec<String> = body
            .lines()
            .map(|line| {
                if line.is_empty() || line.starts_with(&marker) {
                    line.to_string()
                } else {
                    format!("{pad}{line}")
                }
            })
            .collect();
        format!("\n{}\n", lines.join("\n")).replace(&marker, mark)
    }

    /// Renders an item's blocks, leaving one blank line before a nested list.
    fn item(&mut self, item: &ListItem) -> String {
        let mut out = String::new();
        for block in &item.body {
            let rendered = self.blocks(std::slice::from_ref(block), !item.loose);
            if matches!(block, BlockToken::List { .. }) {
                out.truncate(out.trim_end_matches('\n').len());
            }
            out.push_str(&rendered);
        }
        out
    }
}
