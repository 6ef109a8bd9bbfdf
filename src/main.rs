// src/main.rs

mod api;
mod config;
mod error;
mod formatting;
mod model;
mod properties;
mod types;

use crate::api::{NotionHttpClient, NotionRepository};
use crate::config::{Command, CommandLineInput, Registry};
use crate::error::AppError;
use crate::model::{PageRef, RawFields, Schema};
use crate::properties::QueryRelationResolver;
use crate::types::{BlockId, DatabaseId};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .build(Root::builder().appender("stderr").build(log_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn run(cli: CommandLineInput) -> Result<(), AppError> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::RegisterDb { name, id } => {
            let id = DatabaseId::parse(&id)?;
            let mut registry = Registry::load(&config_path)?;
            registry.register(&name, &id);
            registry.store(&config_path)?;
            println!("Registered '{}' -> {}", name.to_lowercase(), id);
            Ok(())
        }

        Command::List { db, format } => {
            let registry = Registry::load(&config_path)?;
            let database = registry.database_id(&db)?;
            let client = NotionHttpClient::new(&config::api_key_from_env()?)?;
            let rows = client.query_rows(&database)?;
            print_rows(&rows, &format)
        }

        Command::Insert { db, name, fields } => {
            let registry = Registry::load(&config_path)?;
            let database = registry.database_id(&db)?;
            let fields = config::parse_fields(&fields)?;
            let client = NotionHttpClient::new(&config::api_key_from_env()?)?;
            let page = insert_record(&client, &database, name.as_deref(), fields)?;
            println!("{}", page.url);
            Ok(())
        }

        Command::Dump { page } => {
            let id = BlockId::parse(&page)?;
            let client = NotionHttpClient::new(&config::api_key_from_env()?)?;
            let blocks = client.fetch_block_tree(&id)?;
            let markdown = formatting::render_blocks(&blocks)?;
            print!("{}", markdown);
            Ok(())
        }
    }
}

/// Coerce the raw fields against the live schema and create the record.
fn insert_record(
    repo: &dyn NotionRepository,
    database: &DatabaseId,
    title: Option<&str>,
    mut fields: RawFields,
) -> Result<PageRef, AppError> {
    let schema = repo.fetch_schema(database)?;
    log::debug!("fetched schema with {} properties", schema.len());

    if let Some(title) = title {
        route_title(&schema, title, &mut fields)?;
    }

    let resolver = QueryRelationResolver::new(repo);
    let properties = properties::coerce_fields(&schema, &fields, &resolver)?;
    repo.create_page(database, &properties)
}

/// Place `--name` under whatever property the schema declares as the title.
fn route_title(schema: &Schema, title: &str, fields: &mut RawFields) -> Result<(), AppError> {
    let property = schema.title_property_name().ok_or_else(|| {
        AppError::MalformedResponse("database schema declares no title property".to_string())
    })?;
    fields.insert(property.as_str().to_string(), title.to_string());
    Ok(())
}

fn print_rows(rows: &[PageRef], format: &str) -> Result<(), AppError> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        _ => {
            for row in rows {
                println!("{}  {}", row.title, row.url);
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    if let Err(err) = run(cli) {
        log::error!("{}", err);
        std::process::exit(1);
    }

    Ok(())
}
