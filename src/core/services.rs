pub mod subject;
pub mod user_response;

#[cfg(test)]
mod test_store;
