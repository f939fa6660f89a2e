mod cli;

use crate::cli::Cli;

use anyhow::Result;
use clap::Parser;
use mongo_ops::{model, mongo};
use mongodb::Database;
use std::process::ExitCode;

/// Database the client falls back to when the URI path names none.
const DEFAULT_DB: &str = "test";

#[tokio::main]
async fn main() -> ExitCode {
    Cli::parse();

    match run().await {
        Ok(count) => {
            println!("Seeded {} items into {}", count, model::COLLECTION);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Seeding failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<usize> {
    let uri = mongo::uri_from_env()?;
    let client = mongo::connect(&uri).await?;
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DB));

    // Hold the outcome so the client is shut down on the failure path too.
    let outcome = seed(&db).await;
    client.shutdown().await;
    outcome
}

/// Submits the fixed batch with ordered semantics: the insert halts at the
/// first failing record, leaving later records unattempted.
async fn seed(db: &Database) -> Result<usize> {
    let items = model::sample_batch();
    let collection = db.collection::<model::SampleItem>(model::COLLECTION);
    collection.insert_many(&items).ordered(true).await?;
    Ok(items.len())
}
