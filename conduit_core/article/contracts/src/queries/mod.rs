pub mod feed;
pub mod list;
pub mod list_by_offset;
