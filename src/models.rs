use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub type AppointmentId = i64;

/// A scheduled patient-doctor meeting, as supplied by the host page.
///
/// Times are already display-formatted; nothing here parses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient: String,
    pub doctor: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    pub fn tone(&self) -> StatusTone {
        StatusTone::from_status(&self.status)
    }

    /// Notes worth showing, if any.
    pub fn visible_notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment for {} with Dr. {} on {}",
            self.patient, self.doctor, self.start_time
        )
    }
}

/// Visual grouping of the open-ended status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Done,
    Cancelled,
    Neutral,
}

impl StatusTone {
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "scheduled" | "rescheduled" => StatusTone::Pending,
            "completed" | "confirmed" => StatusTone::Done,
            "cancelled" | "canceled" => StatusTone::Cancelled,
            _ => StatusTone::Neutral,
        }
    }

    /// Tailwind classes for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTone::Pending => "bg-yellow-900/40 text-yellow-300",
            StatusTone::Done => "bg-green-900/40 text-green-300",
            StatusTone::Cancelled => "bg-red-900/40 text-red-300",
            StatusTone::Neutral => "bg-gray-700 text-gray-300",
        }
    }
}

/// Identifiers that occur more than once, each reported once in first-seen order.
pub fn duplicate_ids(appointments: &[Appointment]) -> Vec<AppointmentId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for appointment in appointments {
        if !seen.insert(appointment.id) && reported.insert(appointment.id) {
            duplicates.push(appointment.id);
        }
    }

    duplicates
}

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;
