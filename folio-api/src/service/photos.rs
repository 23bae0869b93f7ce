use std::io;

use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::{log, Level};
use sea_orm::{ActiveValue, EntityTrait, QueryOrder};
use tokio::sync::Mutex;

use super::{DbConnection, ServiceResult};
use crate::cache::FileCache;
use crate::entity::photos;
use crate::entity::prelude::*;
use crate::errors::ServiceError;
use crate::storage::PhotoStore;

static PHOTO_BYTES_MAX: usize = 10_000_000;
static CAPTION_CHARS_MAX: usize = 200;
static ALLOWED_PHOTO_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    // The extractor limit sits above the checked maximum so oversized
    // uploads still get the JSON error instead of a bare 413.
    let scope = actix_web::web::scope("/photo")
        .app_data(web::PayloadConfig::new(16 * 1024 * 1024))
        .service(photos_all)
        .service(photos_id)
        .service(photos_file)
        .service(photos_upload)
        .service(photos_delete);
    cfg.service(scope);
}

#[actix_web::get("")]
async fn photos_all(db: web::Data<DbConnection>) -> ServiceResult {
    let photos = Photos::find()
        .order_by_desc(photos::Column::UploadedDate)
        .all(&db.db_connection)
        .await?;
    Ok(HttpResponse::Ok().json(photos))
}

#[actix_web::get("{id}")]
async fn photos_id(id: web::Path<i32>, db: web::Data<DbConnection>) -> ServiceResult {
    match Photos::find_by_id(id.into_inner())
        .one(&db.db_connection)
        .await?
    {
        Some(photo) => Ok(HttpResponse::Ok().json(photo)),
        None => Err(ServiceError::NotFound { what: "Photo" }),
    }
}

#[actix_web::get("{id}/file")]
async fn photos_file(
    id: web::Path<i32>,
    db: web::Data<DbConnection>,
    cache: web::Data<Mutex<FileCache>>,
) -> ServiceResult {
    let Some(photo) = Photos::find_by_id(id.into_inner())
        .one(&db.db_connection)
        .await?
    else {
        return Err(ServiceError::NotFound { what: "Photo" });
    };
    let loaded = {
        let mut cache = cache.lock().await;
        cache.get_or_load(&photo.file_path).await
    };
    let bytes = match loaded {
        Ok(bytes) => bytes,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(ServiceError::NotFound { what: "Photo file" });
        }
        Err(source) => return Err(source.into()),
    };
    Ok(HttpResponse::Ok()
        .content_type(
            photo
                .content_type
                .as_deref()
                .unwrap_or("application/octet-stream")
                .to_owned(),
        )
        .insert_header((
            "Content-Disposition",
            format!("inline; filename=\"{}\"", photo.file_name),
        ))
        .body(bytes))
}

#[derive(serde::Deserialize)]
struct PhotoUploadQuery {
    #[serde(default)]
    caption: String,
}

#[actix_web::post("")]
async fn photos_upload(
    payload: web::Bytes,
    query: web::Query<PhotoUploadQuery>,
    db: web::Data<DbConnection>,
    store: web::Data<PhotoStore>,
) -> ServiceResult {
    let caption = query.into_inner().caption;
    if caption.trim().is_empty() {
        return Err(ServiceError::Validation {
            reason: "Caption is required".to_owned(),
        });
    }
    // The caption column is 200 characters wide.
    if caption.chars().count() > CAPTION_CHARS_MAX {
        return Err(ServiceError::Validation {
            reason: "caption of disallowed size".to_owned(),
        });
    }
    if payload.is_empty() {
        return Err(ServiceError::Validation {
            reason: "No file uploaded".to_owned(),
        });
    }
    if payload.len() > PHOTO_BYTES_MAX {
        return Err(ServiceError::Validation {
            reason: "uploaded file exceeded allowed size".to_owned(),
        });
    }
    let file_type = infer::get(&payload)
        .filter(|file_type| ALLOWED_PHOTO_TYPES.contains(&file_type.mime_type()));
    let Some(file_type) = file_type else {
        return Err(ServiceError::Validation {
            reason: "Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed".to_owned(),
        });
    };
    let file_name = store.save(file_type.extension(), &payload).await?;
    let file_path = store.path_of(&file_name);
    let model = photos::ActiveModel {
        caption: ActiveValue::Set(caption),
        file_name: ActiveValue::Set(file_name),
        file_path: ActiveValue::Set(file_path.to_string_lossy().into_owned()),
        content_type: ActiveValue::Set(Some(file_type.mime_type().to_owned())),
        file_size: ActiveValue::Set(payload.len() as i64),
        uploaded_date: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };
    let created = Photos::insert(model)
        .exec_with_returning(&db.db_connection)
        .await?;
    log!(
        Level::Info,
        "photo {} uploaded ({} bytes, {})",
        created.id,
        created.file_size,
        file_type.mime_type()
    );
    Ok(HttpResponse::Created().json(created))
}

#[actix_web::delete("{id}")]
async fn photos_delete(
    id: web::Path<i32>,
    db: web::Data<DbConnection>,
    store: web::Data<PhotoStore>,
    cache: web::Data<Mutex<FileCache>>,
) -> ServiceResult {
    let Some(photo) = Photos::find_by_id(id.into_inner())
        .one(&db.db_connection)
        .await?
    else {
        return Err(ServiceError::NotFound { what: "Photo" });
    };
    store.remove(&photo.file_path).await?;
    cache.lock().await.evict(&photo.file_path);
    Photos::delete_by_id(photo.id).exec(&db.db_connection).await?;
    Ok(HttpResponse::NoContent().finish())
}
