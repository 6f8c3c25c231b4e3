pub mod listing;
pub mod query;
