//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let names = mongo.database().list_collection_names().await.unwrap();
/// assert!(names.is_empty());
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    database: Database,
}

impl TestMongo {
    /// Database name used by [`TestMongo::new`]
    pub const DEFAULT_DATABASE: &'static str = "test_library";

    /// Create a new test MongoDB instance
    ///
    /// Uses the module's default MongoDB image.
    pub async fn new() -> Self {
        Self::with_database(Self::DEFAULT_DATABASE).await
    }

    /// Create a new test MongoDB instance targeting `database_name`
    pub async fn with_database(database_name: &str) -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .expect("Failed to ping MongoDB");

        let database = client.database(database_name);

        tracing::info!(port = host_port, database = database_name, "Test MongoDB ready");

        Self {
            container,
            database,
        }
    }

    /// Get the test database handle
    pub fn database(&self) -> Database {
        self.database.clone()
    }
}
