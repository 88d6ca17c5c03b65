pub mod errors;
pub mod member;

pub use errors::{ServiceError, ServiceResult};
