use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

/// JSON body used for every error response.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{reason}")]
    Validation { reason: String },

    #[error("{what} not found")]
    NotFound { what: &'static str },

    #[error("Database error")]
    Database {
        #[from]
        source: sea_orm::DbErr,
    },

    #[error("File storage error")]
    Storage {
        #[from]
        source: std::io::Error,
    },
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Validation { .. } => {
                HttpResponse::BadRequest().json(ErrorBody::new(self.to_string()))
            }
            ServiceError::NotFound { .. } => {
                HttpResponse::NotFound().json(ErrorBody::new(self.to_string()))
            }
            ServiceError::Database { source } => {
                error!("database error: {:?}", source);
                HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
            }
            ServiceError::Storage { source } => {
                error!("file storage error: {:?}", source);
                HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
            }
        }
    }
}
