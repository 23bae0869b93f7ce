pub mod blog;
pub mod comments;
mod helpers;
mod objects;
pub mod photos;
pub mod reactions;

use actix_web::{HttpResponse, Responder};

use crate::errors::ServiceError;
pub use objects::DbConnection;

pub type ServiceResult = Result<HttpResponse, ServiceError>;

#[actix_web::get("/")]
pub async fn hello_world() -> impl Responder {
    "hello world"
}
