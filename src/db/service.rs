use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct DbService {
    pub(crate) db: DatabaseConnection,
}

impl DbService {
    /// Connects to the database named by `url` (postgres or sqlite) and
    /// brings the schema up to date before handing out the service.
    pub async fn new(url: &str) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging(false);
        if url.starts_with("sqlite::memory:") {
            // An in-memory sqlite database exists per connection; a second
            // pool connection would see an empty schema.
            opts.max_connections(1).min_connections(1);
        }
        let db = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }
}
