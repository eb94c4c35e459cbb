use crate::core::models::question::Question;
use crate::serde::Serialize;

pub const VALIDATION_ERROR_CODE: &str = "error.validation";
pub const VALIDATION_ERROR_MESSAGE: &str = "Request content is invalid";
pub const INTERNAL_ERROR_CODE: &str = "error.internal";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something unexpected went wrong";
pub const INVALID_ARGUMENT_CODE: &str = "error.invalid_argument";
pub const QUESTIONS_NOT_FOUND_CODE: &str = "error.questions.not_found";
pub const REQUEST_BODY_ERROR_CODE: &str = "error.request.body";

/// General error payload: `{code, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestErrorDto {
    pub code: String,
    pub message: String,
}

impl RestErrorDto {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A single rejected field of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestFieldErrorDto {
    pub field: String,
    pub message: String,
}

impl RestFieldErrorDto {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The general error shape plus the list of field violations:
/// `{code, message, fieldsErrors: [{field, message}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestFieldsErrorsDto {
    #[serde(flatten)]
    pub error: RestErrorDto,
    pub fields_errors: Vec<RestFieldErrorDto>,
}

impl RestFieldsErrorsDto {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: RestErrorDto::new(code, message),
            fields_errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: RestFieldErrorDto) {
        self.fields_errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields_errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub label: String,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            label: question.label,
        }
    }
}

/// A subject with the questions it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectDto {
    pub id: i64,
    pub label: String,
    pub questions: Vec<QuestionDto>,
}
