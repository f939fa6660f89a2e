mod cli;

use crate::cli::Cli;

use anyhow::Result;
use bson::doc;
use clap::Parser;
use mongo_ops::mongo;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    Cli::parse();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("MongoDB healthcheck failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let uri = mongo::uri_from_env()?;
    let client = mongo::connect(&uri).await?;

    // Hold the outcome so the client is shut down on the failure path too.
    let outcome = client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await;
    client.shutdown().await;

    let reply = outcome?;
    println!("MongoDB ping OK: {}", reply);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn ping_round_trips() {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = mongo::connect(&uri).await.unwrap();
        let reply = client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .unwrap();
        client.shutdown().await;
        assert_eq!(reply.get_f64("ok").unwrap(), 1.0);
    }
}
