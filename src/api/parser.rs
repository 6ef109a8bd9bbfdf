// src/api/parser.rs
//! Value-level parsing of Notion API responses into the domain model.
//!
//! Works on `serde_json::Value` rather than derived structs: the API's
//! property objects are keyed by a type tag, and unknown tags must degrade
//! into the `Unknown`/`Unsupported` variants instead of failing the parse.

use crate::error::AppError;
use crate::model::{
    Block, BlockCommon, PageRef, PropertyKind, Schema, SelectOption, TextBlockContent,
    UnsupportedBlock,
};
use crate::types::{Annotations, BlockId, DatabaseId, PageId, RichTextItem};
use serde_json::Value;

/// Parse a database response into its property schema.
pub fn parse_schema(body: &str) -> Result<Schema, AppError> {
    let json: Value = serde_json::from_str(body)?;
    let properties = json
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("database response has no 'properties' object"))?;

    let mut schema = Schema::new();
    for (name, descriptor) in properties {
        let tag = descriptor
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(&format!("property '{}' has no type tag", name)))?;
        schema.insert(name.as_str(), parse_property_kind(name, tag, descriptor)?);
    }
    Ok(schema)
}

fn parse_property_kind(
    name: &str,
    tag: &str,
    descriptor: &Value,
) -> Result<PropertyKind, AppError> {
    let kind = match tag {
        "title" => PropertyKind::Title,
        "rich_text" => PropertyKind::Text,
        "number" => PropertyKind::Number,
        "select" => PropertyKind::Select {
            options: parse_options(descriptor.get("select")),
        },
        "multi_select" => PropertyKind::MultiSelect {
            options: parse_options(descriptor.get("multi_select")),
        },
        "date" => PropertyKind::Date,
        "checkbox" => PropertyKind::Checkbox,
        "url" => PropertyKind::Url,
        "email" => PropertyKind::Email,
        "phone_number" => PropertyKind::PhoneNumber,
        "relation" => {
            let raw = descriptor
                .get("relation")
                .and_then(|r| r.get("database_id"))
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    malformed(&format!("relation property '{}' has no database_id", name))
                })?;
            PropertyKind::Relation {
                database_id: DatabaseId::parse(raw)?,
            }
        }
        "formula" => PropertyKind::Formula,
        "rollup" => PropertyKind::Rollup,
        "people" => PropertyKind::People,
        "files" => PropertyKind::Files,
        other => PropertyKind::Unknown(other.to_string()),
    };
    Ok(kind)
}

fn parse_options(descriptor: Option<&Value>) -> Vec<SelectOption> {
    descriptor
        .and_then(|d| d.get("options"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|option| {
                    let name = option.get("name").and_then(Value::as_str)?;
                    Some(SelectOption {
                        id: option
                            .get("id")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                        name: name.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a query response into lightweight record references.
pub fn parse_page_refs(body: &str) -> Result<Vec<PageRef>, AppError> {
    let json: Value = serde_json::from_str(body)?;
    let results = json
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("query response has no 'results' array"))?;

    results.iter().map(parse_page_ref).collect()
}

/// Parse a single page object into a record reference.
pub fn parse_created_page(body: &str) -> Result<PageRef, AppError> {
    let json: Value = serde_json::from_str(body)?;
    parse_page_ref(&json)
}

fn parse_page_ref(page: &Value) -> Result<PageRef, AppError> {
    let raw_id = page
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("page object has no id"))?;
    let id = PageId::parse(raw_id)?;

    let url = page
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(PageRef {
        id,
        title: extract_title(page),
        url,
    })
}

/// Concatenate the plain text of the page's title property, wherever the
/// schema placed it.
fn extract_title(page: &Value) -> String {
    let Some(properties) = page.get("properties").and_then(Value::as_object) else {
        return String::new();
    };

    properties
        .values()
        .find(|prop| prop.get("type").and_then(Value::as_str) == Some("title"))
        .and_then(|prop| prop.get("title").and_then(Value::as_array))
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("plain_text").and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Parse a block-children response into one level of blocks.
///
/// Children are not present in the response; the caller fetches them for
/// blocks whose `has_children` flag is set.
pub fn parse_blocks(body: &str) -> Result<Vec<Block>, AppError> {
    let json: Value = serde_json::from_str(body)?;
    let results = json
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("block children response has no 'results' array"))?;

    results.iter().map(parse_block).collect()
}

fn parse_block(block: &Value) -> Result<Block, AppError> {
    let tag = block
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("block object has no type tag"))?;

    let id = block
        .get("id")
        .and_then(Value::as_str)
        .map(BlockId::parse)
        .transpose()?;

    let common = BlockCommon {
        id,
        has_children: block
            .get("has_children")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        children: Vec::new(),
    };

    let content = || {
        let rich_text = block
            .get(tag)
            .and_then(|data| data.get("rich_text"))
            .and_then(Value::as_array)
            .map(|runs| runs.iter().map(parse_rich_text_item).collect())
            .unwrap_or_default();
        TextBlockContent::new(rich_text)
    };

    let parsed = match tag {
        "heading_1" => Block::Heading1 {
            content: content(),
            common,
        },
        "heading_2" => Block::Heading2 {
            content: content(),
            common,
        },
        "heading_3" => Block::Heading3 {
            content: content(),
            common,
        },
        "paragraph" => Block::Paragraph {
            content: content(),
            common,
        },
        "bulleted_list_item" => Block::BulletedListItem {
            content: content(),
            common,
        },
        other => Block::Unsupported(UnsupportedBlock {
            common,
            block_type: other.to_string(),
        }),
    };
    Ok(parsed)
}

fn parse_rich_text_item(run: &Value) -> RichTextItem {
    let annotations = run
        .get("annotations")
        .map(|a| Annotations {
            bold: a.get("bold").and_then(Value::as_bool).unwrap_or(false),
            italic: a.get("italic").and_then(Value::as_bool).unwrap_or(false),
            code: a.get("code").and_then(Value::as_bool).unwrap_or(false),
        })
        .unwrap_or_default();

    RichTextItem {
        plain_text: run
            .get("plain_text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        annotations,
        href: run
            .get("href")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn malformed(message: &str) -> AppError {
    AppError::MalformedResponse(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schema_parse_maps_type_tags() {
        let body = r#"{
            "object": "database",
            "properties": {
                "Name": { "id": "title", "type": "title", "title": {} },
                "Status": {
                    "id": "a1",
                    "type": "select",
                    "select": { "options": [
                        { "id": "o1", "name": "Todo", "color": "red" },
                        { "id": "o2", "name": "Done", "color": "green" }
                    ]}
                },
                "Project": {
                    "id": "b2",
                    "type": "relation",
                    "relation": { "database_id": "550e8400-e29b-41d4-a716-446655440000" }
                },
                "Score": { "id": "c3", "type": "rollup", "rollup": {} },
                "Badge": { "id": "d4", "type": "verification", "verification": {} }
            }
        }"#;

        let schema = parse_schema(body).unwrap();
        assert_eq!(schema.len(), 5);
        assert_eq!(schema.get("Name"), Some(&PropertyKind::Title));
        match schema.get("Status") {
            Some(PropertyKind::Select { options }) => {
                let names: Vec<_> = options.iter().map(|o| o.name.as_str()).collect();
                assert_eq!(names, vec!["Todo", "Done"]);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
        match schema.get("Project") {
            Some(PropertyKind::Relation { database_id }) => {
                assert_eq!(database_id.as_str(), "550e8400e29b41d4a716446655440000");
            }
            other => panic!("unexpected kind: {:?}", other),
        }
        assert_eq!(schema.get("Score"), Some(&PropertyKind::Rollup));
        assert_eq!(
            schema.get("Badge"),
            Some(&PropertyKind::Unknown("verification".to_string()))
        );
    }

    #[test]
    fn page_refs_carry_id_title_and_url() {
        let body = r#"{
            "results": [{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "url": "https://www.notion.so/Example-550e8400e29b41d4a716446655440000",
                "properties": {
                    "Name": {
                        "type": "title",
                        "title": [
                            { "plain_text": "Side " },
                            { "plain_text": "project" }
                        ]
                    }
                }
            }]
        }"#;

        let refs = parse_page_refs(body).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].id.as_str(), "550e8400e29b41d4a716446655440000");
        assert_eq!(refs[0].title, "Side project");
        assert!(refs[0].url.starts_with("https://"));
    }

    #[test]
    fn blocks_parse_with_annotations_and_unknown_fallback() {
        let body = r#"{
            "results": [
                {
                    "id": "550e8400-e29b-41d4-a716-446655440001",
                    "type": "heading_1",
                    "has_children": false,
                    "heading_1": { "rich_text": [
                        { "plain_text": "Title", "annotations": { "bold": false, "italic": false, "code": false } }
                    ]}
                },
                {
                    "id": "550e8400-e29b-41d4-a716-446655440002",
                    "type": "bulleted_list_item",
                    "has_children": true,
                    "bulleted_list_item": { "rich_text": [
                        { "plain_text": "item", "annotations": { "bold": true, "italic": false, "code": false }, "href": "http://foo.com" }
                    ]}
                },
                {
                    "id": "550e8400-e29b-41d4-a716-446655440003",
                    "type": "toggle",
                    "has_children": false,
                    "toggle": {}
                }
            ]
        }"#;

        let blocks = parse_blocks(body).unwrap();
        assert_eq!(blocks.len(), 3);

        assert_eq!(blocks[0].block_type(), "heading_1");
        assert!(!blocks[0].has_children());

        assert_eq!(blocks[1].block_type(), "bulleted_list_item");
        assert!(blocks[1].has_children());
        match &blocks[1] {
            Block::BulletedListItem { content, .. } => {
                assert_eq!(content.rich_text[0].plain_text, "item");
                assert!(content.rich_text[0].annotations.bold);
                assert_eq!(
                    content.rich_text[0].href.as_deref(),
                    Some("http://foo.com")
                );
            }
            other => panic!("unexpected block: {:?}", other),
        }

        assert_eq!(blocks[2].block_type(), "toggle");
    }
}
