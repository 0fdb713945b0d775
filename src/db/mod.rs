use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

/// Collection holding one sequence document per id series.
pub const COUNTERS_COLLECTION: &str = "counters";

/// Handle on the quiz database and the collections it owns.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
    quizzes_collection: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.database_url).await?;

        client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(10);
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let db = Self {
            client: Client::with_options(client_options)?,
            db_name: config.database_name.clone(),
            quizzes_collection: config.quizzes_collection.clone(),
        };
        db.health_check().await?;

        log::info!(
            "Connected to MongoDB database '{}' (quizzes in '{}')",
            db.db_name,
            db.quizzes_collection
        );
        Ok(db)
    }

    /// Quiz records, typed as the caller's document shape.
    pub fn quizzes<T>(&self) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.collection(&self.quizzes_collection)
    }

    pub fn counters<T>(&self) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.collection(COUNTERS_COLLECTION)
    }

    fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client.database(&self.db_name).collection(name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database(&self.db_name)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
