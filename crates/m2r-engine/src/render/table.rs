use crate::options::TableMode;
use crate::parsing::InlineText;
use crate::parsing::blocks::{Alignment, Table};

use super::block::raw_html_block;
use super::html::inline_html;
use super::{INDENT, Renderer, indent_block};

const FIRST_CELL: &str = "* -";
const NEXT_CELL: &str = "  -";

impl Renderer<'_> {
    pub fn table(&mut self, table: &Table) -> String {
        match self.options.table_mode {
            TableMode::ListTable => self.list_table(table),
            TableMode::RawHtml => html_table(table),
        }
    }

    fn list_table(&mut self, table: &Table) -> String {
        let mut out = format!("\n.. list-table::\n{INDENT}:header-rows: 1\n\n");
        out.push_str(&indent_block(&self.list_table_row(&table.header)));
        out.push('\n');
        let body: String = table
            .rows
            .iter()
            .map(|row| self.list_table_row(row))
            .collect();
        if !body.is_empty() {
            out.push_str(&indent_block(&body));
            out.push('\n');
        }
        out.push('\n');
        out
    }

    fn list_table_row(&mut self, cells: &[InlineText]) -> String {
        let mut row = String::new();
        for (i, cell) in cells.iter().enumerate() {
            let marker = if i == 0 { FIRST_CELL } else { NEXT_CELL };
            let content = self.inline(cell);
            let mut lines = content.lines();
            match lines.next() {
                Some(first) if !first.is_empty() => {
                    row.push_str(&format!("{marker} {first}\n"));
                }
                _ => row.push_str(&format!("{marker}\n")),
            }
            for line in lines {
                if !line.is_empty() {
                    row.push_str("    ");
                    row.push_str(line);
                }
                row.push('\n');
            }
        }
        row
    }
}

fn html_cell(tag: &str, align: Alignment, cell: &InlineText) -> String {
    let content = inline_html(&cell.tokens);
    match align.css() {
        Some(css) => format!("<{tag} style=\"text-align:{css}\">{content}</{tag}>\n"),
        None => format!("<{tag}>{content}</{tag}>\n"),
    }
}

fn html_row(tag: &str, cells: &[InlineText], aligns: &[Alignment]) -> String {
    let cells: String = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let align = aligns.get(i).copied().unwrap_or(Alignment::None);
            html_cell(tag, align, cell)
        })
        .collect();
    format!("<tr>\n{cells}</tr>\n")
}

fn html_table(table: &Table) -> String {
    let header = html_row("th", &table.header, &table.aligns);
    let body: String = table
        .rows
        .iter()
        .map(|row| html_row("td", row, &table.aligns))
        .collect();
    let html =
        format!("<table>\n<thead>\n{header}</thead>\n<tbody>\n{body}</tbody>\n</table>");
    raw_html_block(&html)
}

#[cfg(test)]
mod tests {
    use crate::options::{Options, TableMode};
    use crate::parsing::parse_document;
    use crate::render::Renderer;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn render_with(src: &str, options: &Options) -> String {
        let doc = parse_document(src, options).unwrap();
        Renderer::new(options, &doc).render().body
    }

    const TABLE: &str = "| a | b |\n|:--|--:|\n| 1 | *2* |\n| 3 | 4 |";

    #[test]
    fn list_table() {
        assert_eq!(
            render_with(TABLE, &Options::default()),
            "\n.. list-table::\n   :header-rows: 1\n\n   * - a\n     - b\n   * - 1\n     - *2*\n   * - 3\n     - 4\n\n"
        );
    }

    #[test]
    fn empty_cell_keeps_its_marker() {
        let out = render_with("a | b | c\n--|--|--\n1 |  | 3", &Options::default());
        assert!(out.contains("   * - 1\n     -\n     - 3\n"), "{out}");
    }

    #[test]
    fn raw_html_table() {
        let options = Options {
            table_mode: TableMode::RawHtml,
            ..Options::default()
        };
        assert_snapshot!(render_with(TABLE, &options).trim(), @r#"
        .. raw:: html

           <table>
           <thead>
           <tr>
           <th style="text-align:left">a</th>
           <th style="text-align:right">b</th>
           </tr>
           </thead>
           <tbody>
           <tr>
           <td style="text-align:left">1</td>
           <td style="text-align:right"><em>2</em></td>
           </tr>
           <tr>
           <td style="text-align:left">3</td>
           <td style="text-align:right">4</td>
           </tr>
           </tbody>
           </table>
        "#);
    }
}
