use crate::actix_web::{
    http::StatusCode,
    web::{Data, Json, Path, Query},
    HttpResponse,
};
use crate::core::services::user_response;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::request::{ResponsesQuery, UserResponseForQuestionDto, UserResponsesForQuestionListDto};

pub async fn submit(manager: Data<PgSqlxManager>, user_id: Path<(i64,)>, Json(list): Json<UserResponsesForQuestionListDto>) -> Result<HttpResponse, Error> {
    let user_id = user_id.into_inner().0;
    list.validate().map_err(Error::ValidationError)?;
    let tx = manager.begin().await?;
    let saved = user_response::save_responses_of_user(tx, user_id, list).await?;
    Ok(HttpResponse::build(StatusCode::CREATED).json(saved))
}

pub async fn list(manager: Data<PgSqlxManager>, user_id: Path<(i64,)>, query: Query<ResponsesQuery>) -> Result<Json<Vec<UserResponseForQuestionDto>>, Error> {
    let user_id = user_id.into_inner().0;
    let questions_ids = query.ids()?;
    let mut store = manager.acquire().await?;
    let responses = user_response::find_responses_of_user(&mut store, user_id, &questions_ids).await?;
    Ok(Json(responses))
}
