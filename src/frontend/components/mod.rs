pub mod appointment_detail;
pub mod appointment_list;

pub use appointment_detail::AppointmentDetail;
pub use appointment_list::{AppointmentList, select_appointment};
