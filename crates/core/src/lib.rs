//! Domain types, error kinds, and pure validation logic shared by the
//! persistence, review, and HTTP layers.

pub mod error;
pub mod rating;
pub mod review;
pub mod session;
pub mod student;
pub mod tutor;
pub mod types;
