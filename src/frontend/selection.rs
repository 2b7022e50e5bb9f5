use gloo_storage::{LocalStorage, Storage};

use crate::models::AppointmentId;

/// Load the last selected appointment from localStorage
pub fn load_selection(key: &str) -> Option<AppointmentId> {
    LocalStorage::get(key).ok()
}

/// Save (or clear) the selected appointment in localStorage
pub fn save_selection(key: &str, id: Option<AppointmentId>) {
    match id {
        Some(id) => {
            let _ = LocalStorage::set(key, id);
        }
        None => LocalStorage::delete(key),
    }
}
