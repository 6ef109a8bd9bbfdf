// src/api/client.rs
//! Blocking HTTP client for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication and converts
//! non-success responses into typed errors. Parsing lives in
//! [`super::parser`]; this module never inspects response bodies beyond
//! error extraction.

use super::NotionRepository;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, CoercionResult, PageRef, Schema};
use crate::types::{ApiKey, BlockId, DatabaseId};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header;
use serde_json::{json, Value};

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// One page of results per request; deeper pagination is out of scope.
const PAGE_SIZE: u32 = 100;

pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn get(&self, endpoint: &str) -> Result<String, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        self.execute(self.client.get(url))
    }

    fn post(&self, endpoint: &str, body: &Value) -> Result<String, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        self.execute(self.client.post(url).json(body))
    }

    /// Send a request and return its body, turning API failures into
    /// [`AppError::NotionService`] with the typed error code.
    fn execute(&self, request: RequestBuilder) -> Result<String, AppError> {
        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;

        if status.is_success() {
            return Ok(text);
        }

        let (code, message) = match serde_json::from_str::<Value>(&text) {
            Ok(body) => (
                body.get("code")
                    .and_then(Value::as_str)
                    .map(NotionErrorCode::from_api_response)
                    .unwrap_or_else(|| NotionErrorCode::from_http_status(status.as_u16())),
                body.get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("no message in error response")
                    .to_string(),
            ),
            Err(_) => (NotionErrorCode::from_http_status(status.as_u16()), text),
        };

        Err(AppError::NotionService {
            code,
            message,
            status,
        })
    }
}

impl NotionRepository for NotionHttpClient {
    fn fetch_schema(&self, database: &DatabaseId) -> Result<Schema, AppError> {
        let body = self.get(&format!("databases/{}", database.to_hyphenated()))?;
        super::parser::parse_schema(&body)
    }

    fn query_rows(&self, database: &DatabaseId) -> Result<Vec<PageRef>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let body = self.post(&endpoint, &json!({ "page_size": PAGE_SIZE }))?;
        super::parser::parse_page_refs(&body)
    }

    fn query_by_title_prefix(
        &self,
        database: &DatabaseId,
        fragment: &str,
    ) -> Result<Vec<PageRef>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let query = json!({
            "page_size": PAGE_SIZE,
            "filter": {
                "property": "title",
                "title": { "starts_with": fragment }
            }
        });
        let body = self.post(&endpoint, &query)?;
        super::parser::parse_page_refs(&body)
    }

    fn fetch_block_tree(&self, parent: &BlockId) -> Result<Vec<Block>, AppError> {
        let endpoint = format!(
            "blocks/{}/children?page_size={}",
            parent.to_hyphenated(),
            PAGE_SIZE
        );
        let body = self.get(&endpoint)?;
        let mut blocks = super::parser::parse_blocks(&body)?;

        for block in &mut blocks {
            if !block.has_children() || matches!(block, Block::Unsupported(_)) {
                continue;
            }
            if let Some(id) = block.id().cloned() {
                let children = self.fetch_block_tree(&id)?;
                block.set_children(children);
            }
        }

        Ok(blocks)
    }

    fn create_page(
        &self,
        database: &DatabaseId,
        properties: &CoercionResult,
    ) -> Result<PageRef, AppError> {
        let mut props = serde_json::Map::new();
        for (name, value) in properties {
            props.insert(name.as_str().to_string(), value.to_wire());
        }

        let request = json!({
            "parent": { "database_id": database.to_hyphenated() },
            "properties": Value::Object(props),
        });

        let body = self.post("pages", &request)?;
        super::parser::parse_created_page(&body)
    }
}
