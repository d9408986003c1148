pub mod cover;
pub mod query;
pub mod scanner;
pub mod skiplist;
pub mod tagger;
