//! Data models exchanged between the API and its clients.

pub mod criteria;
pub mod member;
pub mod rater;
pub mod rating;
pub mod report;
