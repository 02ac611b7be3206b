mod error;
mod events_repository;
mod listings_repository;
mod tickets_repository;
mod transactions_repository;
mod users_repository;

pub use error::*;
pub use events_repository::*;
pub use listings_repository::*;
pub use tickets_repository::*;
pub use transactions_repository::*;
pub use users_repository::*;

use mongodb::Database;

///
/// Creates collection unless it was created by previous run
///
pub async fn create_collection_if_not_exists(
    database: &Database,
    name: &str,
) -> Result<(), mongodb::error::Error> {
    let collection_names = database.list_collection_names().await?;
    if collection_names.iter().any(|collection_name| collection_name == name) {
        return Ok(());
    }

    tracing::debug!(collection = name, "creating collection");
    database.create_collection(name).await?;

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::application::ApplicationEnv;
    use anyhow::Context;
    use mongodb::{options::ClientOptions, Client, Database};
    use uuid::Uuid;

    pub async fn create_test_database() -> anyhow::Result<Database> {
        let _ = dotenvy::dotenv();
        let env = ApplicationEnv::parse().context("failed to parse env variables")?;
        let db_name = format!("test_{}", Uuid::new_v4().simple());

        println!("creating test database: {db_name}");

        let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
        let db_client = Client::with_options(db_client_options)?;
        let db = db_client.database(&db_name);

        Ok(db)
    }

    pub async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }
}
