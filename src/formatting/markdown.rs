// src/formatting/markdown.rs
//! Recursive block-to-markdown rendering.
//!
//! Dispatches on block kind and writes into an [`IndentWriter`]. Unsupported
//! block kinds are logged and skipped so one exotic node never aborts a whole
//! document; everything else fails fast.

use super::writer::IndentWriter;
use crate::error::AppError;
use crate::model::Block;
use crate::types::RichTextItem;

/// Render a sequence of top-level blocks into one markdown string.
pub fn render_blocks(blocks: &[Block]) -> Result<String, AppError> {
    let mut writer = IndentWriter::new();
    for block in blocks {
        render_block(block, &mut writer)?;
    }
    Ok(writer.into_string())
}

/// Render one block (and, for list items, its subtree) into `writer`.
pub fn render_block(block: &Block, writer: &mut IndentWriter) -> Result<(), AppError> {
    match block {
        Block::Heading1 { content, .. } => render_heading(writer, "# ", &content.rich_text),
        Block::Heading2 { content, .. } => render_heading(writer, "## ", &content.rich_text),
        Block::Heading3 { content, .. } => render_heading(writer, "### ", &content.rich_text),

        Block::Paragraph { content, .. } => {
            render_rich_text(&content.rich_text, writer)?;
            writer.cr();
            Ok(())
        }

        Block::BulletedListItem { common, content } => {
            writer.append("- ")?;
            render_rich_text(&content.rich_text, writer)?;
            writer.cr();

            if !common.has_children {
                return Ok(());
            }

            writer.indent();
            let rendered = common
                .children
                .iter()
                .try_for_each(|child| render_block(child, writer));
            // depth must come back to the sibling level even when a child fails
            writer.outdent();
            rendered
        }

        Block::Unsupported(b) => {
            log::warn!("skipping unsupported block type '{}'", b.block_type);
            Ok(())
        }
    }
}

fn render_heading(
    writer: &mut IndentWriter,
    marker: &str,
    rich_text: &[RichTextItem],
) -> Result<(), AppError> {
    writer.append(marker)?;
    render_rich_text(rich_text, writer)?;
    writer.cr();
    Ok(())
}

fn render_rich_text(items: &[RichTextItem], writer: &mut IndentWriter) -> Result<(), AppError> {
    for item in items {
        writer.append(&compose_run(item))?;
    }
    Ok(())
}

/// Compose one styled run into markdown text.
///
/// Code wins outright and renders as a lone backtick pair. Otherwise italic
/// and bold markers open in italic-bold order and close mirrored, so the
/// combined form reads `_*text*_`. A hyperlink wraps whatever styling
/// produced as `(text)[href]` — the target format's ordering, kept as a
/// compatibility contract.
fn compose_run(item: &RichTextItem) -> String {
    let styled = if item.annotations.is_plain() {
        item.plain_text.clone()
    } else {
        let mut surrounds: Vec<&str> = Vec::new();
        if item.annotations.italic {
            surrounds.push("_");
        }
        if item.annotations.bold {
            surrounds.push("*");
        }
        if item.annotations.code {
            surrounds = vec!["`"];
        }
        let begin: String = surrounds.concat();
        let end: String = surrounds.iter().rev().copied().collect();
        format!("{}{}{}", begin, item.plain_text, end)
    };

    match &item.href {
        Some(href) => format!("({})[{}]", styled, href),
        None => styled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockCommon, TextBlockContent, UnsupportedBlock};
    use crate::types::Annotations;
    use pretty_assertions::assert_eq;

    fn run(text: &str, annotations: Annotations) -> RichTextItem {
        RichTextItem::styled(text, annotations)
    }

    fn paragraph(items: Vec<RichTextItem>) -> Block {
        Block::Paragraph {
            common: BlockCommon::new(None),
            content: TextBlockContent::new(items),
        }
    }

    fn bullet(items: Vec<RichTextItem>, children: Vec<Block>) -> Block {
        Block::BulletedListItem {
            common: BlockCommon {
                id: None,
                has_children: !children.is_empty(),
                children,
            },
            content: TextBlockContent::new(items),
        }
    }

    #[test]
    fn annotation_composition() {
        let cases = [
            (Annotations::default(), None, "foobar"),
            (
                Annotations {
                    bold: true,
                    ..Default::default()
                },
                None,
                "*foobar*",
            ),
            (
                Annotations {
                    italic: true,
                    ..Default::default()
                },
                None,
                "_foobar_",
            ),
            (
                Annotations {
                    italic: true,
                    bold: true,
                    ..Default::default()
                },
                None,
                "_*foobar*_",
            ),
            (
                Annotations {
                    code: true,
                    ..Default::default()
                },
                None,
                "`foobar`",
            ),
            (
                Annotations {
                    code: true,
                    bold: true,
                    italic: true,
                    ..Default::default()
                },
                None,
                "`foobar`",
            ),
            (
                Annotations {
                    bold: true,
                    ..Default::default()
                },
                Some("http://foo.com"),
                "(*foobar*)[http://foo.com]",
            ),
            (
                Annotations::default(),
                Some("http://foo.com"),
                "(foobar)[http://foo.com]",
            ),
        ];

        for (annotations, href, want) in cases {
            let mut item = run("foobar", annotations);
            if let Some(href) = href {
                item = item.with_href(href);
            }
            assert_eq!(compose_run(&item), want);
        }
    }

    #[test]
    fn flat_paragraph_is_identity_plus_line_break() {
        let block = paragraph(vec![
            RichTextItem::plain("Hello "),
            RichTextItem::plain("world"),
        ]);
        assert_eq!(render_blocks(&[block]).unwrap(), "Hello world\n");
    }

    #[test]
    fn heading_and_paragraph_document() {
        let blocks = vec![
            Block::Heading1 {
                common: BlockCommon::new(None),
                content: TextBlockContent::new(vec![RichTextItem::plain("Title")]),
            },
            paragraph(vec![
                RichTextItem::plain("Hello "),
                run(
                    "world",
                    Annotations {
                        bold: true,
                        ..Default::default()
                    },
                ),
            ]),
        ];
        assert_eq!(render_blocks(&blocks).unwrap(), "# Title\nHello *world*\n");
    }

    #[test]
    fn heading_levels() {
        for (level, want) in [(1, "# h\n"), (2, "## h\n"), (3, "### h\n")] {
            let common = BlockCommon::new(None);
            let content = TextBlockContent::new(vec![RichTextItem::plain("h")]);
            let block = match level {
                1 => Block::Heading1 { common, content },
                2 => Block::Heading2 { common, content },
                _ => Block::Heading3 { common, content },
            };
            assert_eq!(render_blocks(&[block]).unwrap(), want);
        }
    }

    #[test]
    fn nested_bullets_indent_two_spaces_per_level() {
        let tree = bullet(
            vec![RichTextItem::plain("parent")],
            vec![
                bullet(
                    vec![RichTextItem::plain("child")],
                    vec![bullet(vec![RichTextItem::plain("grandchild")], vec![])],
                ),
                bullet(vec![RichTextItem::plain("second child")], vec![]),
            ],
        );
        let sibling = bullet(vec![RichTextItem::plain("sibling")], vec![]);

        assert_eq!(
            render_blocks(&[tree, sibling]).unwrap(),
            "- parent\n  - child\n    - grandchild\n  - second child\n- sibling\n"
        );
    }

    #[test]
    fn unsupported_blocks_render_nothing() {
        let blocks = vec![
            Block::Unsupported(UnsupportedBlock {
                common: BlockCommon::new(None),
                block_type: "toggle".to_string(),
            }),
            paragraph(vec![RichTextItem::plain("after")]),
        ];
        assert_eq!(render_blocks(&blocks).unwrap(), "after\n");
    }
}
