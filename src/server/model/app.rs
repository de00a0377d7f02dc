use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Version reported by the health endpoint
    pub version: String,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
