use crate::core::models::user_response::UserResponse;
use crate::core::ports::repository::{QuestionDao, Store, TxStore, UserResponseDao};
use crate::error::Error;
use crate::request::{UserResponseForQuestionDto, UserResponsesForQuestionListDto};

async fn ensure_questions_exist<S>(store: &mut S, questions_ids: &[i64]) -> Result<(), Error>
where
    S: Store,
{
    let non_existing = QuestionDao::find_non_existing_questions_by_questions_ids(store, questions_ids).await?;
    if !non_existing.is_empty() {
        return Err(Error::QuestionsNotFound(non_existing));
    }
    Ok(())
}

pub async fn find_responses_of_user<S>(store: &mut S, user_id: i64, questions_ids: &[i64]) -> Result<Vec<UserResponseForQuestionDto>, Error>
where
    S: Store,
{
    ensure_questions_exist(store, questions_ids).await?;
    let responses = UserResponseDao::find_responses_of_user_by_user_id_and_question_ids(store, user_id, questions_ids).await?;
    Ok(responses.into_iter().map(UserResponseForQuestionDto::from).collect())
}

/// Saves the submitted responses of `user_id`: answers to questions the user
/// already responded to are updated, the others inserted. Nothing is written
/// when one of the questions does not exist.
pub async fn save_responses_of_user<S>(mut store: S, user_id: i64, list: UserResponsesForQuestionListDto) -> Result<Vec<UserResponseForQuestionDto>, Error>
where
    S: TxStore,
{
    let responses = list.into_user_responses(user_id)?;
    let questions_ids: Vec<i64> = responses.iter().map(|r| r.question_id).collect();
    if let Err(e) = ensure_questions_exist(&mut store, &questions_ids).await {
        store.rollback().await?;
        return Err(e);
    }
    let existing = UserResponseDao::find_responses_of_user_by_user_id_and_question_ids(&mut store, user_id, &questions_ids).await?;
    let (updates, inserts): (Vec<UserResponse>, Vec<UserResponse>) = responses
        .into_iter()
        .partition(|r| existing.iter().any(|e| e.question_id == r.question_id));
    if !updates.is_empty() {
        UserResponseDao::update_user_responses(&mut store, &updates).await?;
    }
    if !inserts.is_empty() {
        UserResponseDao::add_user_responses(&mut store, &inserts).await?;
    }
    log::info!("user {} saved {} new and {} updated responses", user_id, inserts.len(), updates.len());
    let saved = UserResponseDao::find_responses_of_user_by_user_id_and_question_ids(&mut store, user_id, &questions_ids).await?;
    store.commit().await?;
    Ok(saved.into_iter().map(UserResponseForQuestionDto::from).collect())
}
