use crate::actix_web::web::{Data, Json};
use crate::core::services::subject;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::SubjectDto;

pub async fn list(manager: Data<PgSqlxManager>) -> Result<Json<Vec<SubjectDto>>, Error> {
    let mut store = manager.acquire().await?;
    let subjects = subject::find_all_subjects_and_questions(&mut store).await?;
    Ok(Json(subjects))
}
