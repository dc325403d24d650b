#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const NEWPOST_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod post;
pub mod slug;

pub use config::{POSTS_DIR_NAME, PostConfig};
pub use error::PostError;
pub use post::{ARTICLE_TEMPLATE, create_file_name, create_new_post_file, file_name_for_date};
pub use slug::{slugify, slugify_ascii};
