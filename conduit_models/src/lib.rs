pub mod article;
pub mod comment;
pub mod cursor;
mod macros;
pub mod pagination;
pub mod user;
