pub mod subject;
pub mod user_response;

use crate::actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    web::{get, post, resource, JsonConfig, QueryConfig, ServiceConfig},
    HttpRequest, HttpResponse,
};
use crate::response::{RestErrorDto, REQUEST_BODY_ERROR_CODE};
use std::fmt::{Debug, Display};

fn bad_request<E>(err: E, _req: &HttpRequest) -> actix_web::Error
where
    E: Debug + Display + 'static,
{
    let response = HttpResponse::BadRequest().json(RestErrorDto::new(REQUEST_BODY_ERROR_CODE, err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(bad_request::<JsonPayloadError>))
        .app_data(QueryConfig::default().error_handler(bad_request::<QueryPayloadError>))
        .service(resource("/subjects").route(get().to(subject::list)))
        .service(
            resource("/users/{user_id}/responses")
                .route(get().to(user_response::list))
                .route(post().to(user_response::submit)),
        );
}
