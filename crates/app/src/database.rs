//! Database connection management

use mongodb::{
    Client, Collection, Database,
    bson::doc,
};

/// Collection holding task documents.
pub const TASKS_COLLECTION: &str = "tasks";

/// Collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "products";

#[derive(Debug, Clone)]
pub struct Db {
    database: Database,
}

impl Db {
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Typed handle to a collection of this database.
    #[must_use]
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.database.name()
    }
}

/// Connect to `MongoDB` and verify the server answers.
///
/// The database named in the connection string is used when present, otherwise
/// `fallback_database`.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server does not
/// respond to a ping.
pub async fn connect(url: &str, fallback_database: &str) -> Result<Db, mongodb::error::Error> {
    let client = Client::with_uri_str(url).await?;

    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(fallback_database));

    database.run_command(doc! { "ping": 1 }).await?;

    Ok(Db::new(database))
}
