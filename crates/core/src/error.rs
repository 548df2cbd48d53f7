use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session {session_id} is {status}; only completed sessions can be reviewed")]
    SessionNotEligible { session_id: DbId, status: String },

    #[error("Student {student_id} has already reviewed session {session_id}")]
    DuplicateReview { student_id: DbId, session_id: DbId },

    #[error("Invalid session transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
