//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod spam_check;

pub use spam_check::{SpamCheckInsert, SpamCheckUpdate};
