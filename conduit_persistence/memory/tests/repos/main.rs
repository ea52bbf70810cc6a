mod article;
mod comment;
mod common;
mod favorite;
mod follow;
mod user;
