pub mod block_quote;
pub mod code_fence;
pub mod definition;
pub mod directive;
pub mod heading;
pub mod html;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig, Fenced};
pub use definition::{Definition, FootnoteDef, LinkDef};
pub use directive::{Directive, LiteralMarker};
pub use heading::{Heading, ThematicBreak};
pub use html::BlockHtml;
pub use indented_code::IndentedCode;
pub use list::{List, ListMarker, RawItem, RawList};
pub use paragraph::Paragraph;
pub use table::{PipeTable, RawTable, TableStyle};
