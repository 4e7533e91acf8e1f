pub mod column;
pub mod record;

pub use column::{Column, Screener, COLUMN_COUNT};
pub use record::Record;
