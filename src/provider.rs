//! Sources of appointment data.
//!
//! Pages never fetch or invent appointments; whoever mounts them picks an
//! [`AppointmentProvider`] and hands the result down.

use crate::error::{AppError, Result};
use crate::models::{Appointment, AppointmentId, duplicate_ids};

#[cfg(test)]
use mockall::automock;

/// Supplies the ordered list of appointments to display.
#[cfg_attr(test, automock)]
pub trait AppointmentProvider {
    fn appointments(&self) -> Result<Vec<Appointment>>;
}

/// Fixed, in-memory appointments.
#[derive(Debug, Clone, Default)]
pub struct StaticAppointments(pub Vec<Appointment>);

impl AppointmentProvider for StaticAppointments {
    fn appointments(&self) -> Result<Vec<Appointment>> {
        Ok(self.0.clone())
    }
}

/// Appointments decoded from a JSON array.
#[derive(Debug, Clone)]
pub struct JsonAppointments {
    raw: String,
}

impl JsonAppointments {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl AppointmentProvider for JsonAppointments {
    fn appointments(&self) -> Result<Vec<Appointment>> {
        if self.raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&self.raw)?)
    }
}

/// Loaded appointments plus the ids that would confuse keyed rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedAppointments {
    pub appointments: Vec<Appointment>,
    pub duplicate_ids: Vec<AppointmentId>,
}

/// Pull appointments from a provider without rejecting duplicate ids.
pub fn load(provider: &dyn AppointmentProvider) -> Result<LoadedAppointments> {
    let appointments = provider.appointments()?;
    let duplicate_ids = duplicate_ids(&appointments);
    Ok(LoadedAppointments {
        appointments,
        duplicate_ids,
    })
}

/// Load from `primary`, falling back to `fallback` when it fails.
///
/// The primary error is returned alongside so callers can report it.
pub fn load_or_fallback(
    primary: &dyn AppointmentProvider,
    fallback: &dyn AppointmentProvider,
) -> (LoadedAppointments, Option<AppError>) {
    match load(primary) {
        Ok(loaded) => (loaded, None),
        Err(e) => (load(fallback).unwrap_or_default(), Some(e)),
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;
