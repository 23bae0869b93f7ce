use actix_web::{web, HttpResponse};
use chrono::Utc;
use folio_commons::data_structures::{
    ContentKind, ReactionSummaryData, ReactionToggleData, ReactionToggleResponse,
    ReactionsClearedResponse, ToggleAction, ValidationErrorResponse,
};
use log::debug;
use sea_orm::{
    ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, SqlErr, TransactionTrait,
};
use validator::Validate;

use super::{helpers, DbConnection, ServiceResult};
use crate::entity::prelude::*;
use crate::entity::reactions;

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    let scope = actix_web::web::scope("/reactions")
        .service(reactions_summary)
        .service(reactions_user)
        .service(reactions_get)
        .service(reactions_toggle)
        .service(reactions_clear);
    cfg.service(scope);
}

#[actix_web::post("")]
pub async fn reactions_toggle(
    reaction: web::Json<ReactionToggleData>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let reaction = reaction.into_inner();
    if let Err(errors) = reaction.validate() {
        return Ok(HttpResponse::BadRequest().json(ValidationErrorResponse {
            reason: "reaction toggle data validation failed".to_owned(),
            errors,
        }));
    }
    let kind = helpers::parse_content_kind(&reaction.content_type)?;

    // Unlike comment submission, toggling never checks that the content
    // row exists.
    let txn = db.db_connection.begin().await?;
    let existing = Reactions::find()
        .filter(reactions::Column::ContentType.eq(kind.as_str()))
        .filter(reactions::Column::ContentId.eq(reaction.content_id))
        .filter(reactions::Column::ReactionType.eq(reaction.reaction_type.as_str()))
        .filter(reactions::Column::UserIdentifier.eq(reaction.user_identifier.as_str()))
        .one(&txn)
        .await?;
    let action = match existing {
        Some(model) => {
            Reactions::delete_by_id(model.id).exec(&txn).await?;
            ToggleAction::Removed
        }
        None => {
            let model = reactions::ActiveModel {
                content_type: ActiveValue::Set(kind.to_string()),
                content_id: ActiveValue::Set(reaction.content_id),
                reaction_type: ActiveValue::Set(reaction.reaction_type.clone()),
                user_identifier: ActiveValue::Set(reaction.user_identifier.clone()),
                created_date: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            // A concurrent insert of the same tuple trips the unique index;
            // the reaction is present either way, so report it as added.
            match Reactions::insert(model).exec(&txn).await {
                Ok(_) => ToggleAction::Added,
                Err(source) => match source.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => ToggleAction::Added,
                    _ => return Err(source.into()),
                },
            }
        }
    };
    txn.commit().await?;
    debug!(
        "reaction {} {:?} for {} {} by {}",
        reaction.reaction_type, action, kind, reaction.content_id, reaction.user_identifier
    );
    Ok(HttpResponse::Ok().json(ReactionToggleResponse {
        action,
        reaction_type: reaction.reaction_type,
    }))
}

#[actix_web::get("{content_type}/{content_id}")]
pub async fn reactions_get(
    path: web::Path<(String, i32)>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let (raw_kind, content_id) = path.into_inner();
    let kind = helpers::parse_content_kind(&raw_kind)?;
    let mut counts: Vec<(String, i64)> = Reactions::find()
        .select_only()
        .column(reactions::Column::ReactionType)
        .column_as(reactions::Column::Id.count(), "count")
        .filter(reactions::Column::ContentType.eq(kind.as_str()))
        .filter(reactions::Column::ContentId.eq(content_id))
        .group_by(reactions::Column::ReactionType)
        .into_tuple()
        .all(&db.db_connection)
        .await?;
    counts.sort_by(|left, right| right.1.cmp(&left.1));
    let mut summary = serde_json::Map::new();
    for (reaction_type, count) in counts {
        summary.insert(reaction_type, count.into());
    }
    Ok(HttpResponse::Ok().json(summary))
}

#[actix_web::get("{content_type}/{content_id}/user/{user_identifier}")]
pub async fn reactions_user(
    path: web::Path<(String, i32, String)>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let (raw_kind, content_id, user_identifier) = path.into_inner();
    let kind = helpers::parse_content_kind(&raw_kind)?;
    let held: Vec<String> = Reactions::find()
        .select_only()
        .column(reactions::Column::ReactionType)
        .filter(reactions::Column::ContentType.eq(kind.as_str()))
        .filter(reactions::Column::ContentId.eq(content_id))
        .filter(reactions::Column::UserIdentifier.eq(user_identifier.as_str()))
        .into_tuple()
        .all(&db.db_connection)
        .await?;
    Ok(HttpResponse::Ok().json(held))
}

#[actix_web::get("summary")]
pub async fn reactions_summary(db: web::Data<DbConnection>) -> ServiceResult {
    let mut rows: Vec<(String, i32, String, i64)> = Reactions::find()
        .select_only()
        .column(reactions::Column::ContentType)
        .column(reactions::Column::ContentId)
        .column(reactions::Column::ReactionType)
        .column_as(reactions::Column::Id.count(), "count")
        .group_by(reactions::Column::ContentType)
        .group_by(reactions::Column::ContentId)
        .group_by(reactions::Column::ReactionType)
        .into_tuple()
        .all(&db.db_connection)
        .await?;
    rows.sort_by(|left, right| right.3.cmp(&left.3));
    let mut summary = Vec::with_capacity(rows.len());
    for (content_type, content_id, reaction_type, count) in rows {
        let content_title = match ContentKind::parse(&content_type) {
            Some(kind) => helpers::content_title(kind, content_id, &db).await?,
            None => None,
        };
        summary.push(ReactionSummaryData {
            content_type,
            content_id,
            reaction_type,
            count,
            content_title,
        });
    }
    Ok(HttpResponse::Ok().json(summary))
}

#[actix_web::delete("{content_type}/{content_id}")]
pub async fn reactions_clear(
    path: web::Path<(String, i32)>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let (raw_kind, content_id) = path.into_inner();
    let kind = helpers::parse_content_kind(&raw_kind)?;
    let result = Reactions::delete_many()
        .filter(reactions::Column::ContentType.eq(kind.as_str()))
        .filter(reactions::Column::ContentId.eq(content_id))
        .exec(&db.db_connection)
        .await?;
    debug!(
        "cleared {} reactions for {} {}",
        result.rows_affected, kind, content_id
    );
    Ok(HttpResponse::Ok().json(ReactionsClearedResponse {
        message: "All reactions cleared".to_owned(),
        deleted_count: result.rows_affected,
    }))
}
