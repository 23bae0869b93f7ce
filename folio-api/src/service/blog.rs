use actix_web::{web, HttpResponse};
use chrono::Utc;
use folio_commons::data_structures::{
    BlogPostCreationData, BlogPostUpdateData, ValidationErrorResponse,
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel, QueryOrder};
use validator::Validate;

use super::{DbConnection, ServiceResult};
use crate::entity::blog_posts;
use crate::entity::prelude::*;
use crate::errors::ServiceError;

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    let scope = actix_web::web::scope("/blog")
        .service(blog_all)
        .service(blog_id)
        .service(blog_create)
        .service(blog_update)
        .service(blog_delete);
    cfg.service(scope);
}

#[actix_web::get("")]
async fn blog_all(db: web::Data<DbConnection>) -> ServiceResult {
    let posts = BlogPosts::find()
        .order_by_desc(blog_posts::Column::CreatedDate)
        .all(&db.db_connection)
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[actix_web::get("{id}")]
async fn blog_id(id: web::Path<i32>, db: web::Data<DbConnection>) -> ServiceResult {
    match BlogPosts::find_by_id(id.into_inner())
        .one(&db.db_connection)
        .await?
    {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(ServiceError::NotFound { what: "Blog post" }),
    }
}

#[actix_web::post("")]
async fn blog_create(
    post: web::Json<BlogPostCreationData>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let post = post.into_inner();
    if let Err(errors) = post.validate() {
        return Ok(HttpResponse::BadRequest().json(ValidationErrorResponse {
            reason: "post creation data validation failed".to_owned(),
            errors,
        }));
    }
    let model = blog_posts::ActiveModel {
        title: ActiveValue::Set(post.title),
        content: ActiveValue::Set(post.content),
        author: ActiveValue::Set(post.author),
        created_date: ActiveValue::Set(Utc::now().naive_utc()),
        updated_date: ActiveValue::Set(None),
        ..Default::default()
    };
    let created = BlogPosts::insert(model)
        .exec_with_returning(&db.db_connection)
        .await?;
    Ok(HttpResponse::Created().json(created))
}

#[actix_web::put("{id}")]
async fn blog_update(
    id: web::Path<i32>,
    update: web::Json<BlogPostUpdateData>,
    db: web::Data<DbConnection>,
) -> ServiceResult {
    let update = update.into_inner();
    if let Err(errors) = update.validate() {
        return Ok(HttpResponse::BadRequest().json(ValidationErrorResponse {
            reason: "post update data validation failed".to_owned(),
            errors,
        }));
    }
    let Some(existing) = BlogPosts::find_by_id(id.into_inner())
        .one(&db.db_connection)
        .await?
    else {
        return Err(ServiceError::NotFound { what: "Blog post" });
    };
    let mut model = existing.into_active_model();
    if let Some(title) = update.title {
        model.title = ActiveValue::Set(title);
    }
    if let Some(content) = update.content {
        model.content = ActiveValue::Set(content);
    }
    if let Some(author) = update.author {
        model.author = ActiveValue::Set(author);
    }
    model.updated_date = ActiveValue::Set(Some(Utc::now().naive_utc()));
    model.update(&db.db_connection).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[actix_web::delete("{id}")]
async fn blog_delete(id: web::Path<i32>, db: web::Data<DbConnection>) -> ServiceResult {
    let result = BlogPosts::delete_by_id(id.into_inner())
        .exec(&db.db_connection)
        .await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound { what: "Blog post" });
    }
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrator::Migrator;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::NaiveDateTime;
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use sea_orm_migration::MigratorTrait;

    async fn test_db() -> DatabaseConnection {
        let mut c_opt = ConnectOptions::new("sqlite::memory:");
        c_opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(c_opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_post(db: &DatabaseConnection, title: &str, created_date: NaiveDateTime) -> i32 {
        let model = blog_posts::ActiveModel {
            title: ActiveValue::Set(title.to_owned()),
            content: ActiveValue::Set("body".to_owned()),
            author: ActiveValue::Set("jo".to_owned()),
            created_date: ActiveValue::Set(created_date),
            updated_date: ActiveValue::Set(None),
            ..Default::default()
        };
        BlogPosts::insert(model)
            .exec(db)
            .await
            .unwrap()
            .last_insert_id
    }

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    macro_rules! test_app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(DbConnection::new($db.clone())))
                    .configure(configure_service),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn created_post_is_returned_and_fetchable() {
        let db = test_db().await;
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(serde_json::json!({
                "title": "First post",
                "content": "Hello there",
                "author": "jo"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(created["title"], "First post");
        assert!(created["createdDate"].is_string());
        assert!(created["updatedDate"].is_null());
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::get().uri(&format!("/blog/{id}")).to_request();
        let fetched: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["content"], "Hello there");
    }

    #[actix_web::test]
    async fn posts_listed_newest_first() {
        let db = test_db().await;
        seed_post(&db, "old", at(2024, 1, 1)).await;
        seed_post(&db, "new", at(2024, 6, 1)).await;
        seed_post(&db, "middle", at(2024, 3, 1)).await;
        let app = test_app!(db);

        let req = test::TestRequest::get().uri("/blog").to_request();
        let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let titles = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|post| post["title"].as_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["new", "middle", "old"]);
    }

    #[actix_web::test]
    async fn update_touches_only_provided_fields() {
        let db = test_db().await;
        let id = seed_post(&db, "Before", at(2024, 1, 1)).await;
        let app = test_app!(db);

        let req = test::TestRequest::put()
            .uri(&format!("/blog/{id}"))
            .set_json(serde_json::json!({ "title": "Renamed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri(&format!("/blog/{id}")).to_request();
        let fetched: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["title"], "Renamed");
        assert_eq!(fetched["content"], "body");
        assert!(fetched["updatedDate"].is_string());
    }

    #[actix_web::test]
    async fn create_validates_fields() {
        let db = test_db().await;
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(serde_json::json!({
                "title": "",
                "content": "Hello",
                "author": "jo"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let stored = BlogPosts::find().all(&db).await.unwrap();
        assert!(stored.is_empty());
    }

    #[actix_web::test]
    async fn missing_post_is_not_found() {
        let db = test_db().await;
        let app = test_app!(db);

        let req = test::TestRequest::get().uri("/blog/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Blog post not found");

        let req = test::TestRequest::put()
            .uri("/blog/999")
            .set_json(serde_json::json!({ "title": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_removes_post() {
        let db = test_db().await;
        let id = seed_post(&db, "Doomed", at(2024, 1, 1)).await;
        let app = test_app!(db);

        let req = test::TestRequest::delete().uri(&format!("/blog/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri(&format!("/blog/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri(&format!("/blog/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
