pub mod food;
pub mod repository;
pub mod script;
pub mod sqlite_db;
