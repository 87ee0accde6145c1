pub mod catalog;
pub mod category;
pub mod data;
pub mod error;
pub mod global;
pub mod index;
pub mod record;
