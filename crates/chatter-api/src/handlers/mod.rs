//! Route handlers

pub mod health;
pub mod spam_checks;
