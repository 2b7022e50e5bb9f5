use leptos::prelude::*;

use crate::frontend::components::AppointmentList;
use crate::models::{Appointment, AppointmentId};

/// Landing page. Appointment data and the click handler come from whoever
/// mounts the page and are forwarded to the list untouched.
#[component]
pub fn Home(
    #[prop(into)] appointments: Signal<Vec<Appointment>>,
    on_appointment_click: Callback<AppointmentId>,
    #[prop(optional, into)] selected: MaybeProp<AppointmentId>,
) -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <h1 class="text-3xl font-bold text-gray-100 mb-4">"Welcome to the Healthcare System"</h1>
            <p class="text-gray-400">"Manage your appointments efficiently."</p>
            <AppointmentList
                appointments=appointments
                on_appointment_click=on_appointment_click
                selected=selected
            />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "home_test.rs"]
mod home_test;
