// src/model/block.rs
//! Nodes of the hierarchical document tree, immutable once fetched.

use crate::types::{BlockId, RichTextItem};
use serde::{Deserialize, Serialize};

/// Data shared by every block variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: Option<BlockId>,
    pub has_children: bool,
    pub children: Vec<Block>,
}

impl BlockCommon {
    pub fn new(id: Option<BlockId>) -> Self {
        Self {
            id,
            has_children: false,
            children: Vec::new(),
        }
    }
}

/// Inline content carried by text-bearing blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }
}

/// A block kind the renderer does not handle; kept so the skip can be logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
}

/// The block kinds this tool renders, plus a catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Heading1 {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Heading2 {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Heading3 {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Paragraph {
        common: BlockCommon,
        content: TextBlockContent,
    },
    BulletedListItem {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match self {
            Block::Heading1 { common, .. }
            | Block::Heading2 { common, .. }
            | Block::Heading3 { common, .. }
            | Block::Paragraph { common, .. }
            | Block::BulletedListItem { common, .. } => common,
            Block::Unsupported(b) => &b.common,
        }
    }

    /// Get mutable common block data
    pub fn common_mut(&mut self) -> &mut BlockCommon {
        match self {
            Block::Heading1 { common, .. }
            | Block::Heading2 { common, .. }
            | Block::Heading3 { common, .. }
            | Block::Paragraph { common, .. }
            | Block::BulletedListItem { common, .. } => common,
            Block::Unsupported(b) => &mut b.common,
        }
    }

    pub fn id(&self) -> Option<&BlockId> {
        self.common().id.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    pub fn children(&self) -> &[Block] {
        &self.common().children
    }

    pub fn set_children(&mut self, children: Vec<Block>) {
        self.common_mut().children = children;
    }

    /// Get block type name
    pub fn block_type(&self) -> &str {
        match self {
            Block::Heading1 { .. } => "heading_1",
            Block::Heading2 { .. } => "heading_2",
            Block::Heading3 { .. } => "heading_3",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::Unsupported(b) => &b.block_type,
        }
    }
}
