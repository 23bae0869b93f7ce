use actix_web::{web, HttpResponse};
use chrono::Utc;
use folio_commons::data_structures::{
    CommentCreatedResponse, CommentCreationData, CommentData, ContentKind, MessageResponse,
    PendingCommentData, ValidationErrorResponse,
};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};
use validator::Validate;

use super::{helpers, DbConnection, ServiceResult};
use crate::entity::comments;
use crate::entity::prelude::*;
use crate::errors::ServiceError;

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    let scope = actix_web::web::scope("/comments")
        .service(comments_pending)
        .service(comments_get)
        .service(comments_post)
        .service(comments_approve)
        .service(comments_delete);
    cfg.service(scope);
}

#[actix_web::get("{content_type}/{content_id}")]
pub async fn comments_get(
    path: web::Path<(String, i32)>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let (raw_kind, content_id) = path.into_inner();
    let kind = helpers::parse_content_kind(&raw_kind)?;
    let comments = Comments::find()
        .filter(comments::Column::ContentType.eq(kind.as_str()))
        .filter(comments::Column::ContentId.eq(content_id))
        .filter(comments::Column::IsApproved.eq(true))
        .order_by_asc(comments::Column::CreatedDate)
        .all(&db.db_connection)
        .await?;
    // Author emails never leave the moderation queue.
    let comments = comments
        .into_iter()
        .map(|model| CommentData {
            id: model.id,
            author_name: model.author_name,
            content: model.content,
            created_date: model.created_date,
        })
        .collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(comments))
}

#[actix_web::get("pending")]
pub async fn comments_pending(db: web::Data<DbConnection>) -> ServiceResult {
    let pending = Comments::find()
        .filter(comments::Column::IsApproved.eq(false))
        .order_by_desc(comments::Column::CreatedDate)
        .all(&db.db_connection)
        .await?;
    let mut decorated = Vec::with_capacity(pending.len());
    for model in pending {
        let title = match ContentKind::parse(&model.content_type) {
            Some(kind) => helpers::content_title(kind, model.content_id, &db).await?,
            None => None,
        };
        let content_title =
            title.unwrap_or_else(|| format!("{} #{}", model.content_type, model.content_id));
        decorated.push(PendingCommentData {
            id: model.id,
            content_type: model.content_type,
            content_id: model.content_id,
            author_name: model.author_name,
            author_email: model.author_email,
            content: model.content,
            created_date: model.created_date,
            is_approved: model.is_approved,
            content_title,
        });
    }
    Ok(HttpResponse::Ok().json(decorated))
}

#[actix_web::post("")]
pub async fn comments_post(
    comment: web::Json<CommentCreationData>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let comment = comment.into_inner();
    if let Err(errors) = comment.validate() {
        return Ok(HttpResponse::BadRequest().json(ValidationErrorResponse {
            reason: "comment creation data validation failed".to_owned(),
            errors,
        }));
    }
    let kind = helpers::parse_content_kind(&comment.content_type)?;
    if !helpers::content_exists(kind, comment.content_id, &db).await? {
        return Err(ServiceError::NotFound { what: "Content" });
    }
    let model = comments::ActiveModel {
        content_type: ActiveValue::Set(kind.to_string()),
        content_id: ActiveValue::Set(comment.content_id),
        author_name: ActiveValue::Set(comment.author_name),
        author_email: ActiveValue::Set(comment.author_email),
        content: ActiveValue::Set(comment.content),
        created_date: ActiveValue::Set(Utc::now().naive_utc()),
        is_approved: ActiveValue::Set(false),
        ..Default::default()
    };
    let result = Comments::insert(model).exec(&db.db_connection).await?;
    debug!(
        "comment {} submitted for {} {}",
        result.last_insert_id, kind, comment.content_id
    );
    Ok(HttpResponse::Created().json(CommentCreatedResponse {
        message: "Comment submitted successfully and is pending approval".to_owned(),
        id: result.last_insert_id,
    }))
}

#[actix_web::put("{id}/approve")]
pub async fn comments_approve(id: web::Path<i32>, db: web::Data<DbConnection>) -> ServiceResult {
    let id = id.into_inner();
    let Some(model) = Comments::find_by_id(id).one(&db.db_connection).await? else {
        return Err(ServiceError::NotFound { what: "Comment" });
    };
    // Approving an already approved comment is a no-op success.
    if !model.is_approved {
        let mut model = model.into_active_model();
        model.is_approved = ActiveValue::Set(true);
        model.update(&db.db_connection).await?;
    }
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Comment approved successfully".to_owned(),
    }))
}

#[actix_web::delete("{id}")]
pub async fn comments_delete(id: web::Path<i32>, db: web::Data<DbConnection>) -> ServiceResult {
    let result = Comments::delete_by_id(id.into_inner())
        .exec(&db.db_connection)
        .await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound { what: "Comment" });
    }
    Ok(HttpResponse::NoContent().finish())
}
