use crate::core::models::{question::Question, subject::Subject, user_response::UserResponse};
use crate::core::ports::repository::{Common, Manager, QuestionDao, Store, TxStore, UserResponseDao};
use crate::error::{dao_error, Error};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{query, query_scalar, Executor, PgPool, Postgres, Row, Transaction};
use std::collections::HashSet;

const SELECT_QUESTIONS_AND_SUBJECTS: &str = "
    SELECT q.id AS id, q.label AS label, s.id AS subject_id, s.label AS subject_label
    FROM questions q
    LEFT OUTER JOIN subjects s ON q.subject_id = s.id
    ORDER BY q.id";

const FIND_QUESTIONS_BY_IDS: &str = "SELECT q.id AS id FROM questions q WHERE q.id = ANY($1)";

const INSERT_USER_RESPONSE: &str = "INSERT INTO user_responses (content, user_id, question_id) VALUES ($1, $2, $3)";

const UPDATE_USER_RESPONSE: &str = "UPDATE user_responses SET content = $1 WHERE user_id = $2 AND question_id = $3";

const SELECT_USER_RESPONSES_FOR_QUESTIONS: &str = "
    SELECT ur.content AS content, ur.question_id AS question_id, ur.user_id AS user_id
    FROM user_responses AS ur
    WHERE ur.user_id = $1 AND ur.question_id = ANY($2)
    ORDER BY ur.question_id, ur.user_id";

pub struct PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    executor: E,
}

impl<E> PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

fn ensure_not_empty<T>(items: &[T], message: &'static str) -> Result<(), Error> {
    if items.is_empty() {
        return Err(Error::InvalidArgument(message));
    }
    Ok(())
}

/// Keeps the ids of `requested` that are absent from `found`, in request order.
fn non_existing_ids(requested: &[i64], found: &[i64]) -> Vec<i64> {
    let found: HashSet<i64> = found.iter().copied().collect();
    requested.iter().copied().filter(|id| !found.contains(id)).collect()
}

fn question_from_row(row: PgRow) -> Result<Question, sqlx::Error> {
    let subject_id: Option<i64> = row.try_get("subject_id")?;
    let subject_label: Option<String> = row.try_get("subject_label")?;
    Ok(Question {
        id: row.try_get("id")?,
        label: row.try_get("label")?,
        subject: subject_id.zip(subject_label).map(|(id, label)| Subject { id, label }),
    })
}

fn user_response_from_row(row: PgRow) -> Result<UserResponse, sqlx::Error> {
    Ok(UserResponse {
        user_id: row.try_get("user_id")?,
        question_id: row.try_get("question_id")?,
        content: row.try_get("content")?,
    })
}

// Insert and update statements both take ($1 content, $2 user_id, $3 question_id).
fn bind_user_response<'q>(statement: &'q str, batch: &'q [UserResponse], i: usize) -> Query<'q, Postgres, PgArguments> {
    let response = &batch[i];
    query(statement).bind(response.content.as_str()).bind(response.user_id).bind(response.question_id)
}

impl<E> PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn execute_batch(&mut self, statement: &'static str, batch: &[UserResponse]) -> Result<Vec<u64>, sqlx::Error> {
        let mut counts = Vec::with_capacity(batch.len());
        for i in 0..batch.len() {
            let result = bind_user_response(statement, batch, i).execute(&mut self.executor).await?;
            counts.push(result.rows_affected());
        }
        log::debug!("executed batch of {} user responses", counts.len());
        Ok(counts)
    }
}

impl<E> QuestionDao for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn find_all_questions_and_subjects(&mut self) -> Result<Vec<Question>, Error> {
        let questions = query(SELECT_QUESTIONS_AND_SUBJECTS)
            .try_map(question_from_row)
            .fetch_all(&mut self.executor)
            .await
            .map_err(dao_error("Unable to find subjects and questions"))?;
        Ok(questions)
    }

    async fn find_non_existing_questions_by_questions_ids(&mut self, questions_ids: &[i64]) -> Result<Vec<i64>, Error> {
        ensure_not_empty(questions_ids, "Ids of the questions cannot be null or empty")?;
        let found: Vec<i64> = query_scalar(FIND_QUESTIONS_BY_IDS)
            .bind(questions_ids)
            .fetch_all(&mut self.executor)
            .await
            .map_err(dao_error("Unable to find questions by ids"))?;
        Ok(non_existing_ids(questions_ids, &found))
    }
}

impl<E> UserResponseDao for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn add_user_responses(&mut self, user_responses: &[UserResponse]) -> Result<Vec<u64>, Error> {
        ensure_not_empty(user_responses, "User responses cannot be null or empty")?;
        let counts = self
            .execute_batch(INSERT_USER_RESPONSE, user_responses)
            .await
            .map_err(dao_error("Unable to add responses of the questions for the user"))?;
        Ok(counts)
    }

    async fn update_user_responses(&mut self, user_responses: &[UserResponse]) -> Result<Vec<u64>, Error> {
        ensure_not_empty(user_responses, "User responses cannot be null or empty")?;
        let counts = self
            .execute_batch(UPDATE_USER_RESPONSE, user_responses)
            .await
            .map_err(dao_error("Unable to update responses of the questions for the user"))?;
        Ok(counts)
    }

    async fn find_responses_of_user_by_user_id_and_question_ids(&mut self, user_id: i64, questions_ids: &[i64]) -> Result<Vec<UserResponse>, Error> {
        ensure_not_empty(questions_ids, "Questions ids cannot be null or empty")?;
        let responses = query(SELECT_USER_RESPONSES_FOR_QUESTIONS)
            .bind(user_id)
            .bind(questions_ids)
            .try_map(user_response_from_row)
            .fetch_all(&mut self.executor)
            .await
            .map_err(dao_error("Unable to find responses of the user for the questions"))?;
        Ok(responses)
    }
}

pub struct PgSqlxManager {
    pool: PgPool,
}

pub type PgStore = PgSqlx<PoolConnection<Postgres>>;
pub type PgTxStore = PgSqlx<Transaction<'static, Postgres>>;

impl PgSqlxManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn begin(&self) -> Result<PgTxStore, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSqlx { executor: tx })
    }

    pub async fn acquire(&self) -> Result<PgStore, Error> {
        let conn = self.pool.acquire().await?;
        Ok(PgSqlx { executor: conn })
    }
}

impl Common for PgSqlx<PoolConnection<Postgres>> {}
impl<'a> Common for PgSqlx<Transaction<'a, Postgres>> {}
impl Store for PgSqlx<PoolConnection<Postgres>> {}
impl<'a> Store for PgSqlx<Transaction<'a, Postgres>> {}

impl<'a> TxStore for PgSqlx<Transaction<'a, Postgres>> {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        self.executor.rollback().await?;
        Ok(())
    }
}

impl<'a> Manager<'a, PgStore, PgTxStore> for PgSqlxManager {
    async fn db(&'a self) -> Result<PgStore, Error> {
        let d = self.acquire().await?;
        Ok(d)
    }

    async fn tx(&'a self) -> Result<PgTxStore, Error> {
        let t = self.begin().await?;
        Ok(t)
    }
}
