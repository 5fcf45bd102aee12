use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("unknown appointment status: {0}")]
pub struct ParseStatusError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Confirmed,
    Completed,
    Cancelled,
    Rescheduled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Approved => "approved",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Rescheduled => "rescheduled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "approved" => Ok(AppointmentStatus::Approved),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "rescheduled" => Ok(AppointmentStatus::Rescheduled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// The five status-changing operations on an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Approve,
    Confirm,
    Complete,
    Cancel,
    Reschedule,
}

impl AppointmentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentAction::Approve => "approve",
            AppointmentAction::Confirm => "confirm",
            AppointmentAction::Complete => "complete",
            AppointmentAction::Cancel => "cancel",
            AppointmentAction::Reschedule => "reschedule",
        }
    }

    pub fn target_status(&self) -> AppointmentStatus {
        match self {
            AppointmentAction::Approve => AppointmentStatus::Approved,
            AppointmentAction::Confirm => AppointmentStatus::Confirmed,
            AppointmentAction::Complete => AppointmentStatus::Completed,
            AppointmentAction::Cancel => AppointmentStatus::Cancelled,
            AppointmentAction::Reschedule => AppointmentStatus::Rescheduled,
        }
    }

    fn permits(&self, from: AppointmentStatus) -> bool {
        use AppointmentStatus::*;

        match self {
            AppointmentAction::Approve => matches!(from, Pending | Rescheduled),
            AppointmentAction::Confirm => matches!(from, Approved),
            AppointmentAction::Complete => matches!(from, Confirmed),
            AppointmentAction::Cancel => matches!(from, Pending | Approved | Rescheduled),
            AppointmentAction::Reschedule => matches!(from, Pending | Approved | Rescheduled),
        }
    }

    /// Decide what applying this action to `from` means. Re-applying an
    /// action whose target the appointment already holds is a no-op,
    /// not an error, so double-taps and retried requests stay safe.
    pub fn evaluate(&self, from: AppointmentStatus) -> TransitionOutcome {
        if from == self.target_status() {
            // Reschedule is its own target but carries a new date, so
            // it must re-apply rather than no-op.
            if *self == AppointmentAction::Reschedule {
                return TransitionOutcome::Apply(AppointmentStatus::Rescheduled);
            }
            return TransitionOutcome::Noop;
        }

        if self.permits(from) {
            TransitionOutcome::Apply(self.target_status())
        } else {
            TransitionOutcome::Invalid
        }
    }
}

impl fmt::Display for AppointmentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Write the new status.
    Apply(AppointmentStatus),
    /// Already there; only the row's updated_at moves.
    Noop,
    /// The graph forbids this edge.
    Invalid,
}
