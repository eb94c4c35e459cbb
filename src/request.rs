use crate::core::models::user_response::UserResponse;
use crate::error::Error;
use crate::response::{RestFieldErrorDto, RestFieldsErrorsDto, VALIDATION_ERROR_CODE, VALIDATION_ERROR_MESSAGE};
use crate::serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseForQuestionDto {
    pub question_id: Option<i64>,
    pub content: Option<String>,
}

impl From<UserResponse> for UserResponseForQuestionDto {
    fn from(response: UserResponse) -> Self {
        Self {
            question_id: Some(response.question_id),
            content: Some(response.content),
        }
    }
}

impl UserResponseForQuestionDto {
    fn collect_errors(&self, index: usize, errors: &mut RestFieldsErrorsDto) {
        if self.question_id.is_none() {
            errors.add_error(RestFieldErrorDto::new(format!("responses[{}].questionId", index), "must not be null"));
        }
        if self.content.as_deref().map_or(true, |c| c.trim().is_empty()) {
            errors.add_error(RestFieldErrorDto::new(format!("responses[{}].content", index), "must not be blank"));
        }
    }
}

/// Request body for submitting a batch of responses. The list must be non-empty
/// and every element must be valid on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponsesForQuestionListDto {
    #[serde(default)]
    pub responses: Vec<UserResponseForQuestionDto>,
}

impl UserResponsesForQuestionListDto {
    pub fn validate(&self) -> Result<(), RestFieldsErrorsDto> {
        let mut errors = RestFieldsErrorsDto::new(VALIDATION_ERROR_CODE, VALIDATION_ERROR_MESSAGE);
        if self.responses.is_empty() {
            errors.add_error(RestFieldErrorDto::new("responses", "must not be empty"));
        }
        for (i, response) in self.responses.iter().enumerate() {
            response.collect_errors(i, &mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates and converts into domain responses of `user_id`. When a question
    /// appears more than once the last content wins, at the position it was first seen.
    pub fn into_user_responses(self, user_id: i64) -> Result<Vec<UserResponse>, Error> {
        self.validate().map_err(Error::ValidationError)?;
        let mut responses: Vec<UserResponse> = Vec::with_capacity(self.responses.len());
        for dto in self.responses {
            let (Some(question_id), Some(content)) = (dto.question_id, dto.content) else {
                return Err(Error::InvalidArgument("User response must carry a question id and a content"));
            };
            match responses.iter_mut().find(|r| r.question_id == question_id) {
                Some(existing) => existing.content = content,
                None => responses.push(UserResponse { user_id, question_id, content }),
            }
        }
        Ok(responses)
    }
}

/// Query string of the responses lookup: `?questions_ids=1,2,3`.
#[derive(Debug, Deserialize)]
pub struct ResponsesQuery {
    pub questions_ids: String,
}

impl ResponsesQuery {
    pub fn ids(&self) -> Result<Vec<i64>, Error> {
        if self.questions_ids.trim().is_empty() {
            return Err(Error::InvalidArgument("Questions ids cannot be null or empty"));
        }
        let mut ids = Vec::new();
        for segment in self.questions_ids.split(',').map(str::trim) {
            if segment.is_empty() {
                return Err(Error::InvalidArgument("Id of the question cannot be null"));
            }
            ids.push(segment.parse::<i64>()?);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dto(question_id: Option<i64>, content: Option<&str>) -> UserResponseForQuestionDto {
        UserResponseForQuestionDto {
            question_id,
            content: content.map(String::from),
        }
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let list: UserResponsesForQuestionListDto = serde_json::from_str("{}").unwrap();
        let errors = list.validate().unwrap_err();
        assert_eq!(errors.error.code, VALIDATION_ERROR_CODE);
        assert_eq!(errors.fields_errors, vec![RestFieldErrorDto::new("responses", "must not be empty")]);
    }

    #[test]
    fn test_each_element_is_validated() {
        let list = UserResponsesForQuestionListDto {
            responses: vec![dto(Some(1), Some("yes")), dto(None, Some("no")), dto(Some(3), Some("   "))],
        };
        let errors = list.validate().unwrap_err();
        let fields: Vec<&str> = errors.fields_errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["responses[1].questionId", "responses[2].content"]);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let list: UserResponsesForQuestionListDto = serde_json::from_str(r#"{"responses":[{"questionId":7,"content":"blue"}]}"#).unwrap();
        assert_eq!(list.responses, vec![dto(Some(7), Some("blue"))]);
        assert!(list.validate().is_ok());
    }

    #[test]
    fn test_into_user_responses_last_duplicate_wins() {
        let list = UserResponsesForQuestionListDto {
            responses: vec![dto(Some(2), Some("a")), dto(Some(1), Some("b")), dto(Some(2), Some("c"))],
        };
        let responses = list.into_user_responses(10).unwrap();
        assert_eq!(
            responses,
            vec![
                UserResponse { user_id: 10, question_id: 2, content: "c".into() },
                UserResponse { user_id: 10, question_id: 1, content: "b".into() },
            ]
        );
    }

    #[test]
    fn test_into_user_responses_invalid() {
        let err = UserResponsesForQuestionListDto::default().into_user_responses(10).unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn test_query_ids() {
        let query = ResponsesQuery { questions_ids: "3, 1,2".into() };
        assert_eq!(query.ids().unwrap(), vec![3, 1, 2]);
        let query = ResponsesQuery { questions_ids: "1,,3".into() };
        assert!(matches!(query.ids(), Err(Error::InvalidArgument("Id of the question cannot be null"))));
        let query = ResponsesQuery { questions_ids: "1,2,".into() };
        assert!(matches!(query.ids(), Err(Error::InvalidArgument(_))));
        let query = ResponsesQuery { questions_ids: "1,x".into() };
        assert!(matches!(query.ids(), Err(Error::ParseIntError(_))));
        let query = ResponsesQuery { questions_ids: " ".into() };
        assert!(matches!(query.ids(), Err(Error::InvalidArgument("Questions ids cannot be null or empty"))));
    }
}
