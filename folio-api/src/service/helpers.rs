use folio_commons::data_structures::ContentKind;
use sea_orm::{DbErr, EntityTrait};

use super::DbConnection;
use crate::entity::prelude::*;
use crate::errors::ServiceError;

pub fn parse_content_kind(raw: &str) -> Result<ContentKind, ServiceError> {
    ContentKind::parse(raw).ok_or_else(|| ServiceError::Validation {
        reason: "Invalid content type".to_owned(),
    })
}

/// Checks that the referenced content row exists.
pub async fn content_exists(
    kind: ContentKind,
    content_id: i32,
    db: &DbConnection,
) -> Result<bool, DbErr> {
    let found = match kind {
        ContentKind::Blog => BlogPosts::find_by_id(content_id)
            .one(&db.db_connection)
            .await?
            .is_some(),
        ContentKind::Photo => Photos::find_by_id(content_id)
            .one(&db.db_connection)
            .await?
            .is_some(),
    };
    Ok(found)
}

/// Resolves the display title of a content item. Blog posts use their title,
/// photos their caption. `None` when the row is gone.
pub async fn content_title(
    kind: ContentKind,
    content_id: i32,
    db: &DbConnection,
) -> Result<Option<String>, DbErr> {
    let title = match kind {
        ContentKind::Blog => BlogPosts::find_by_id(content_id)
            .one(&db.db_connection)
            .await?
            .map(|post| post.title),
        ContentKind::Photo => Photos::find_by_id(content_id)
            .one(&db.db_connection)
            .await?
            .map(|photo| photo.caption),
    };
    Ok(title)
}
