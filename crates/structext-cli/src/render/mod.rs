pub mod plain;
pub mod tui;

use structext_engine::{Block, tokenize};

/// Pretty `Debug` dump of every block followed by the inline runs of its text.
pub fn debug_dump(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        out.push_str(&format!("[{i}] {block:#?}\n"));
        for text in block.inline_texts() {
            out.push_str(&format!("    runs: {:?}\n", tokenize(text)));
        }
    }
    out
}
