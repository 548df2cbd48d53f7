//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod review_repo;
pub mod session_repo;
pub mod student_repo;
pub mod tutor_repo;

pub use review_repo::ReviewRepo;
pub use session_repo::SessionRepo;
pub use student_repo::StudentRepo;
pub use tutor_repo::TutorRepo;
