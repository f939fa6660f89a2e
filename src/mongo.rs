// src/mongo.rs
use anyhow::{bail, Context, Result};
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;

/// Upper bound on server selection, i.e. how long the driver waits for a
/// reachable server before the first operation fails.
pub const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_millis(5000);

/// Reads the connection string from `MONGODB_URI`. An empty value counts as
/// unset. Does no I/O.
pub fn uri_from_env() -> Result<String> {
    match std::env::var("MONGODB_URI") {
        Ok(uri) if !uri.is_empty() => Ok(uri),
        _ => bail!("MONGODB_URI is not set"),
    }
}

pub async fn client_options(uri: &str) -> Result<ClientOptions> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("invalid MongoDB connection string")?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    Ok(options)
}

/// Builds a client for the given URI. The driver connects lazily, so the
/// first operation carries the server-selection bound.
pub async fn connect(uri: &str) -> Result<Client> {
    let options = client_options(uri).await?;
    let client = Client::with_options(options)?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn options_bound_server_selection() {
        let options = client_options("mongodb://localhost:27017").await.unwrap();
        assert_eq!(
            options.server_selection_timeout,
            Some(SERVER_SELECTION_TIMEOUT)
        );
    }

    #[tokio::test]
    async fn malformed_uri_is_rejected() {
        assert!(client_options("not-a-connection-string").await.is_err());
    }

    #[test]
    fn unset_or_empty_uri_is_a_config_error() {
        std::env::remove_var("MONGODB_URI");
        let err = uri_from_env().unwrap_err();
        assert_eq!(err.to_string(), "MONGODB_URI is not set");

        std::env::set_var("MONGODB_URI", "");
        let err = uri_from_env().unwrap_err();
        assert_eq!(err.to_string(), "MONGODB_URI is not set");
        std::env::remove_var("MONGODB_URI");
    }
}
