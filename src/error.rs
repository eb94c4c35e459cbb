use crate::actix_web::http::StatusCode;
use crate::actix_web::{HttpResponse, ResponseError};
use crate::dotenv::Error as DotError;
use crate::response::{
    RestErrorDto, RestFieldsErrorsDto, INTERNAL_ERROR_CODE, INTERNAL_ERROR_MESSAGE, INVALID_ARGUMENT_CODE, QUESTIONS_NOT_FOUND_CODE,
};
use crate::thiserror::Error as ThisError;
use std::num;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{message}: {source}")]
    DaoError {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("validation error: {0:?}")]
    ValidationError(RestFieldsErrorsDto),

    #[error("questions not found: {0:?}")]
    QuestionsNotFound(Vec<i64>),

    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("dotenv error")]
    DotEnvError(#[from] DotError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("parse int error: {0}")]
    ParseIntError(#[from] num::ParseIntError),
}

/// Builds the mapper wrapping a driver fault raised inside a DAO operation.
pub fn dao_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> Error {
    move |source| Error::DaoError { message, source }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ValidationError(_) | Error::InvalidArgument(_) | Error::ParseIntError(_) => StatusCode::BAD_REQUEST,
            Error::QuestionsNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Error::ValidationError(errors) => builder.json(errors),
            Error::InvalidArgument(message) => builder.json(RestErrorDto::new(INVALID_ARGUMENT_CODE, *message)),
            Error::ParseIntError(e) => builder.json(RestErrorDto::new(INVALID_ARGUMENT_CODE, e.to_string())),
            Error::QuestionsNotFound(ids) => {
                let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
                builder.json(RestErrorDto::new(QUESTIONS_NOT_FOUND_CODE, format!("Questions not found: {}", ids)))
            }
            _ => {
                log::error!("{}", self);
                builder.json(RestErrorDto::new(INTERNAL_ERROR_CODE, INTERNAL_ERROR_MESSAGE))
            }
        }
    }
}
