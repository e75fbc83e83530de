pub mod add;
pub mod backup;
pub mod query;
pub mod render;
