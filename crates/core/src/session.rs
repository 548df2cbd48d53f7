//! Session lifecycle and booking validation.
//!
//! Statuses are stored as capitalized strings (`"Pending"`, `"Completed"`, ...)
//! and parsed into [`SessionStatus`] at the boundaries.
//!
//! ```text
//! Pending ──> Accepted ──> Completed
//!    └──────> Declined
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Status enums
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
            Self::Completed => "Completed",
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: SessionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Declined)
                | (Self::Accepted, Self::Completed)
        )
    }

    /// Only completed sessions may be reviewed.
    pub fn is_reviewable(self) -> bool {
        self == Self::Completed
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            "Declined" => Ok(Self::Declined),
            "Completed" => Ok(Self::Completed),
            other => Err(CoreError::InvalidInput(format!(
                "Invalid session status '{other}'. Must be one of: Pending, Accepted, Declined, Completed"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a lifecycle transition, returning the target status on success.
pub fn validate_transition(
    current: SessionStatus,
    next: SessionStatus,
) -> Result<SessionStatus, CoreError> {
    if current.can_transition_to(next) {
        Ok(next)
    } else {
        Err(CoreError::InvalidTransition {
            from: current.to_string(),
            to: next.to_string(),
        })
    }
}

/// Validate a booking time in 24-hour `HH:MM` form.
pub fn validate_session_time(time: &str) -> Result<(), CoreError> {
    let invalid = || {
        CoreError::InvalidInput(format!(
            "Invalid session time '{time}'. Expected HH:MM (24-hour)"
        ))
    };

    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: u8 = hours.parse().map_err(|_| invalid())?;
    let minutes: u8 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(())
}

/// Duration is expressed in hours and must be positive.
pub fn validate_duration_hours(duration: f64) -> Result<(), CoreError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "Session duration must be a positive number of hours, got {duration}"
        )))
    }
}

pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "Price must be zero or positive, got {price}"
        )))
    }
}

/// Price charged for a booking when the client does not quote one.
pub fn default_session_price(hourly_price: f64, duration_hours: f64) -> f64 {
    hourly_price * duration_hours
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
