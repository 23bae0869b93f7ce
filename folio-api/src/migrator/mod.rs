mod m00000000_000001_create_blog_posts_table;
mod m00000000_000002_create_photos_table;
mod m00000000_000003_create_comments_table;
mod m00000000_000004_create_reactions_table;

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m00000000_000001_create_blog_posts_table::Migration {}),
            Box::new(m00000000_000002_create_photos_table::Migration {}),
            Box::new(m00000000_000003_create_comments_table::Migration {}),
            Box::new(m00000000_000004_create_reactions_table::Migration {}),
        ]
    }
}
