use serde::Serialize;

/// One user's answer to one question, identified by `(user_id, question_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub question_id: i64,
    pub content: String,
}
