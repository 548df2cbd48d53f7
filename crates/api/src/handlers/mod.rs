pub mod review;
pub mod session;
pub mod student;
pub mod tutor;
