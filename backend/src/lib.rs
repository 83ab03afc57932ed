//! Backend for the skipper rating tracker: a REST API over SQLite that
//! lets raters record skill-level ratings for members and serves each
//! member's shareable progress report.

pub mod auth;
pub mod clock;
pub mod config;
pub mod db;
pub mod services;
