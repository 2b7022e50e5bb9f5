//! Reads configuration and appointment data embedded in the host page.

use crate::config::{AppConfig, DEFAULT_CONFIG_ELEMENT_ID};
use crate::error::{AppError, Result};
use crate::models::Appointment;
use crate::provider::{self, AppointmentProvider, JsonAppointments, StaticAppointments};

/// Appointments stored as JSON inside a `<script type="application/json">` element.
#[derive(Debug, Clone)]
pub struct DocumentAppointments {
    element_id: String,
}

impl DocumentAppointments {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl AppointmentProvider for DocumentAppointments {
    fn appointments(&self) -> Result<Vec<Appointment>> {
        let raw = element_text(&self.element_id)?;
        JsonAppointments::new(raw).appointments()
    }
}

fn element_text(id: &str) -> Result<String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("no document available".to_string()))?;

    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))?;

    Ok(element.text_content().unwrap_or_default())
}

/// Load the page config, falling back to defaults when it is absent or broken.
pub fn load_config() -> AppConfig {
    match element_text(DEFAULT_CONFIG_ELEMENT_ID).and_then(|raw| AppConfig::from_json(&raw)) {
        Ok(config) => config,
        Err(AppError::MissingElement(_)) => AppConfig::default(),
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading config: {}", e).into());
            AppConfig::default()
        }
    }
}

/// Load appointments for display. Failures render as an empty list.
pub fn load_appointments(source: &dyn AppointmentProvider) -> Vec<Appointment> {
    let (loaded, error) = provider::load_or_fallback(source, &StaticAppointments::default());

    match error {
        Some(AppError::MissingElement(id)) => web_sys::console::warn_1(
            &format!("No #{} element on the page, showing no appointments", id).into(),
        ),
        Some(e) => {
            web_sys::console::error_1(&format!("Error loading appointments: {}", e).into())
        }
        None => {}
    }

    if !loaded.duplicate_ids.is_empty() {
        web_sys::console::warn_1(
            &format!("Duplicate appointment ids: {:?}", loaded.duplicate_ids).into(),
        );
    }
    web_sys::console::log_1(&format!("Loaded {} appointments", loaded.appointments.len()).into());

    loaded.appointments
}
