// tests/dump_rendering.rs
//! Rendering of realistic block trees, including wire-shaped input going
//! through the parser first.

use notion_jot::api::parser::parse_blocks;
use notion_jot::{render_blocks, Annotations, Block, BlockCommon, RichTextItem, TextBlockContent};
use pretty_assertions::assert_eq;

fn heading1(text: &str) -> Block {
    Block::Heading1 {
        common: BlockCommon::new(None),
        content: TextBlockContent::new(vec![RichTextItem::plain(text)]),
    }
}

fn paragraph(items: Vec<RichTextItem>) -> Block {
    Block::Paragraph {
        common: BlockCommon::new(None),
        content: TextBlockContent::new(items),
    }
}

fn bullet(text: &str, children: Vec<Block>) -> Block {
    Block::BulletedListItem {
        common: BlockCommon {
            id: None,
            has_children: !children.is_empty(),
            children,
        },
        content: TextBlockContent::new(vec![RichTextItem::plain(text)]),
    }
}

#[test]
fn document_with_mixed_block_kinds() {
    let blocks = vec![
        heading1("Weekly notes"),
        paragraph(vec![
            RichTextItem::plain("Status: "),
            RichTextItem::styled(
                "on track",
                Annotations {
                    italic: true,
                    bold: true,
                    ..Default::default()
                },
            ),
        ]),
        bullet(
            "top item",
            vec![bullet("nested item", vec![]), bullet("another nested", vec![])],
        ),
        bullet("second top item", vec![]),
    ];

    let want = "\
# Weekly notes
Status: _*on track*_
- top item
  - nested item
  - another nested
- second top item
";
    assert_eq!(render_blocks(&blocks).unwrap(), want);
}

#[test]
fn wire_response_renders_end_to_end() {
    let body = r#"{
        "results": [
            {
                "id": "550e8400-e29b-41d4-a716-446655440001",
                "type": "heading_2",
                "has_children": false,
                "heading_2": { "rich_text": [{ "plain_text": "Links" }] }
            },
            {
                "id": "550e8400-e29b-41d4-a716-446655440002",
                "type": "paragraph",
                "has_children": false,
                "paragraph": { "rich_text": [
                    {
                        "plain_text": "docs",
                        "annotations": { "bold": false, "italic": false, "code": true },
                        "href": "https://example.test/docs"
                    }
                ]}
            },
            {
                "id": "550e8400-e29b-41d4-a716-446655440003",
                "type": "divider",
                "has_children": false,
                "divider": {}
            }
        ]
    }"#;

    let blocks = parse_blocks(body).unwrap();
    // the divider is skipped, not fatal
    assert_eq!(
        render_blocks(&blocks).unwrap(),
        "## Links\n(`docs`)[https://example.test/docs]\n"
    );
}
