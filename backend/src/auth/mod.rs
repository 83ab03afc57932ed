//! Authentication building blocks: the password digest and the request
//! extractor that turns an `x-auth-token` header into an acting rater.

pub mod identity;
pub mod password;

pub use identity::RaterIdentity;
