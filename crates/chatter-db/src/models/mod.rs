//! Database models (rows as stored)

mod spam_check;

pub use spam_check::SpamCheckModel;
