// src/config.rs
//! Command-line surface and local configuration.
//!
//! The API key comes from the `NOTION_API_KEY` environment variable; the
//! database-name registry lives in a small JSON file so commands can say
//! `--db tasks` instead of pasting IDs.

use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(name = "nj", author, version, about = "Interact with notion.so databases from the command line", long_about = None)]
pub struct CommandLineInput {
    /// Path to the JSON config file (defaults to ~/.config/nj.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a database id under a human-friendly name
    RegisterDb {
        /// Name that will be used to refer to that database
        #[arg(long)]
        name: String,
        /// Database id or notion.so URL
        #[arg(long)]
        id: String,
    },

    /// List records from a database
    List {
        /// Name of the database to operate on
        #[arg(long)]
        db: String,
        /// Output format: fancy or json
        #[arg(long, default_value = "fancy")]
        format: String,
    },

    /// Add a record to a database
    #[command(visible_aliases = ["i", "a"])]
    Insert {
        /// Name of the database to operate on
        #[arg(long)]
        db: String,
        /// Record title
        #[arg(short, long)]
        name: Option<String>,
        /// Property to set, as Key=Value (repeatable)
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,
    },

    /// Dump a page in markdown format
    #[command(visible_alias = "d")]
    Dump {
        /// Page id or notion.so URL
        page: String,
    },
}

/// Persisted name-to-id registry.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub databases: IndexMap<String, String>,
}

impl Registry {
    /// Load the registry from `path`; a missing file is an empty registry.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the registry back to `path`, creating parent directories.
    pub fn store(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn register(&mut self, name: &str, id: &DatabaseId) {
        self.databases
            .insert(name.to_lowercase(), id.as_str().to_string());
    }

    /// Resolve a registered database name to its id.
    pub fn database_id(&self, name: &str) -> Result<DatabaseId, AppError> {
        let raw = self
            .databases
            .get(&name.to_lowercase())
            .ok_or_else(|| AppError::UnknownDatabase(name.to_string()))?;
        Ok(DatabaseId::parse(raw)?)
    }
}

/// Default config file location.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let home = std::env::var_os("HOME").ok_or_else(|| {
        AppError::MissingConfiguration("HOME environment variable not set".to_string())
    })?;
    Ok(PathBuf::from(home).join(".config").join("nj.json"))
}

/// Read and validate the API key from the environment.
pub fn api_key_from_env() -> Result<ApiKey, AppError> {
    let raw = std::env::var("NOTION_API_KEY").map_err(|_| {
        AppError::MissingConfiguration("NOTION_API_KEY environment variable not set".to_string())
    })?;
    Ok(ApiKey::new(raw)?)
}

/// Parse repeated `Key=Value` arguments into raw fields.
///
/// Splits on the first `=` only, so values may themselves contain `=`.
pub fn parse_fields(pairs: &[String]) -> Result<crate::model::RawFields, AppError> {
    let mut fields = crate::model::RawFields::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(AppError::InvalidFieldFormat(pair.clone()));
        };
        fields.insert(key.to_string(), value.to_string());
    }
    Ok(fields)
}
