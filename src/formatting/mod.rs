//! Rendering of block trees into indented markdown.

mod markdown;
mod writer;

pub use markdown::{render_block, render_blocks};
pub use writer::IndentWriter;
