//! Database connection and initialization.

use mongodb::{bson::doc, error::ErrorKind, Client, Collection};

use crate::config::Config;
use crate::domain::Credential;
use crate::errors::AppResult;

/// Server error code returned when creating a collection that already exists
const NAMESPACE_EXISTS: i32 = 48;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB and verify the server answers a ping.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        match Self::try_connect(config).await {
            Ok(db) => {
                tracing::info!("Connected to MongoDB database {}", config.database_name);
                Ok(db)
            }
            Err(e) => {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                Err(e)
            }
        }
    }

    async fn try_connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_url).await?;
        let database = client.database(&config.database_name);
        database.run_command(doc! { "ping": 1 }).await?;
        Ok(Self { database })
    }

    /// Return a typed handle to `name`, creating the collection if missing.
    pub async fn ensure_collection(&self, name: &str) -> AppResult<Collection<Credential>> {
        match self.create_if_missing(name).await {
            Ok(created) => {
                if created {
                    tracing::info!("Collection {} created", name);
                }
                tracing::info!("Collection {} ready", name);
                Ok(self.database.collection::<Credential>(name))
            }
            Err(e) => {
                tracing::error!("Failed to create collection {}: {}", name, e);
                Err(e)
            }
        }
    }

    async fn create_if_missing(&self, name: &str) -> AppResult<bool> {
        let existing = self.database.list_collection_names().await?;
        if existing.iter().any(|c| c == name) {
            return Ok(false);
        }

        match self.database.create_collection(name).await {
            Ok(()) => Ok(true),
            // Another client created it between the listing and the create
            Err(e) if is_namespace_exists(command_code(&e)) => {
                tracing::debug!("Collection {} appeared concurrently", name);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn command_code(error: &mongodb::error::Error) -> Option<i32> {
    match error.kind.as_ref() {
        ErrorKind::Command(command) => Some(command.code),
        _ => None,
    }
}

fn is_namespace_exists(code: Option<i32>) -> bool {
    code == Some(NAMESPACE_EXISTS)
}
