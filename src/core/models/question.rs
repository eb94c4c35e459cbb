use crate::core::models::subject::Subject;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub label: String,
    pub subject: Option<Subject>,
}
