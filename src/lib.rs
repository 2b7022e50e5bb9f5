pub mod config;
pub mod error;
pub mod models;
pub mod provider;

#[cfg(feature = "frontend")]
pub mod frontend;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use models::{Appointment, AppointmentId, StatusTone};
pub use provider::{AppointmentProvider, JsonAppointments, StaticAppointments};
