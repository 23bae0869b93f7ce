#[derive(Clone)]
pub struct DbConnection {
    pub(super) db_connection: sea_orm::DatabaseConnection,
}

impl DbConnection {
    pub fn new(db_connection: sea_orm::DatabaseConnection) -> Self {
        Self { db_connection }
    }
}
