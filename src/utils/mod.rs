//! Shared helpers: dates, external programs, minification and slugs.

pub mod date;
pub mod exec;
pub mod minify;
pub mod slug;
