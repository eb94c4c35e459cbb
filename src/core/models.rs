pub mod question;
pub mod subject;
pub mod user_response;
