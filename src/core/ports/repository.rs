use crate::core::models::{question::Question, user_response::UserResponse};
use crate::error::Error;

pub trait QuestionDao {
    /// All questions joined with their subject, ordered by question id.
    async fn find_all_questions_and_subjects(&mut self) -> Result<Vec<Question>, Error>;

    /// Ids from `questions_ids` with no matching question row, in the order given.
    async fn find_non_existing_questions_by_questions_ids(&mut self, questions_ids: &[i64]) -> Result<Vec<i64>, Error>;
}

pub trait UserResponseDao {
    /// Inserts every response and returns the affected-row count of each statement.
    async fn add_user_responses(&mut self, user_responses: &[UserResponse]) -> Result<Vec<u64>, Error>;

    /// Updates content keyed by `(user_id, question_id)`; a count of 0 means no such pair.
    async fn update_user_responses(&mut self, user_responses: &[UserResponse]) -> Result<Vec<u64>, Error>;

    async fn find_responses_of_user_by_user_id_and_question_ids(&mut self, user_id: i64, questions_ids: &[i64]) -> Result<Vec<UserResponse>, Error>;
}

pub trait Common: QuestionDao + UserResponseDao {}

pub trait Store: Common {}

pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
    async fn rollback(self) -> Result<(), Error>;
}

pub trait Manager<'m, S, T>
where
    S: Store,
    T: TxStore,
{
    async fn db(&'m self) -> Result<S, Error>;
    async fn tx(&'m self) -> Result<T, Error>;
}
