//! Business logic services

pub mod context;
pub mod error;
pub mod spam_check;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use spam_check::SpamCheckService;
