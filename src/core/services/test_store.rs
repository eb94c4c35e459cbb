use crate::core::models::{question::Question, subject::Subject, user_response::UserResponse};
use crate::core::ports::repository::{Common, QuestionDao, Store, TxStore, UserResponseDao};
use crate::error::Error;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Tables {
    pub questions: Vec<Question>,
    pub user_responses: Vec<UserResponse>,
    pub inserted_batches: usize,
    pub updated_batches: usize,
    pub committed: bool,
}

/// In-memory store following the same contracts as the Postgres DAO.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    pub tables: Rc<RefCell<Tables>>,
}

impl MemStore {
    pub fn with_question(self, id: i64, subject: Option<Subject>) -> Self {
        self.tables.borrow_mut().questions.push(Question {
            id,
            label: format!("q{}", id),
            subject,
        });
        self
    }

    pub fn with_response(self, user_id: i64, question_id: i64, content: &str) -> Self {
        self.tables.borrow_mut().user_responses.push(UserResponse {
            user_id,
            question_id,
            content: content.into(),
        });
        self
    }
}

impl QuestionDao for MemStore {
    async fn find_all_questions_and_subjects(&mut self) -> Result<Vec<Question>, Error> {
        let mut questions = self.tables.borrow().questions.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn find_non_existing_questions_by_questions_ids(&mut self, questions_ids: &[i64]) -> Result<Vec<i64>, Error> {
        if questions_ids.is_empty() {
            return Err(Error::InvalidArgument("Ids of the questions cannot be null or empty"));
        }
        let tables = self.tables.borrow();
        Ok(questions_ids.iter().copied().filter(|id| !tables.questions.iter().any(|q| q.id == *id)).collect())
    }
}

impl UserResponseDao for MemStore {
    async fn add_user_responses(&mut self, user_responses: &[UserResponse]) -> Result<Vec<u64>, Error> {
        if user_responses.is_empty() {
            return Err(Error::InvalidArgument("User responses cannot be null or empty"));
        }
        let mut tables = self.tables.borrow_mut();
        tables.inserted_batches += 1;
        tables.user_responses.extend_from_slice(user_responses);
        Ok(vec![1; user_responses.len()])
    }

    async fn update_user_responses(&mut self, user_responses: &[UserResponse]) -> Result<Vec<u64>, Error> {
        if user_responses.is_empty() {
            return Err(Error::InvalidArgument("User responses cannot be null or empty"));
        }
        let mut tables = self.tables.borrow_mut();
        tables.updated_batches += 1;
        let mut counts = Vec::with_capacity(user_responses.len());
        for update in user_responses {
            let mut count = 0;
            for row in tables.user_responses.iter_mut() {
                if row.user_id == update.user_id && row.question_id == update.question_id {
                    row.content = update.content.clone();
                    count += 1;
                }
            }
            counts.push(count);
        }
        Ok(counts)
    }

    async fn find_responses_of_user_by_user_id_and_question_ids(&mut self, user_id: i64, questions_ids: &[i64]) -> Result<Vec<UserResponse>, Error> {
        if questions_ids.is_empty() {
            return Err(Error::InvalidArgument("Questions ids cannot be null or empty"));
        }
        let mut responses: Vec<UserResponse> = self
            .tables
            .borrow()
            .user_responses
            .iter()
            .filter(|r| r.user_id == user_id && questions_ids.contains(&r.question_id))
            .cloned()
            .collect();
        responses.sort_by_key(|r| (r.question_id, r.user_id));
        Ok(responses)
    }
}

impl Common for MemStore {}
impl Store for MemStore {}

impl TxStore for MemStore {
    async fn commit(self) -> Result<(), Error> {
        self.tables.borrow_mut().committed = true;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        Ok(())
    }
}
