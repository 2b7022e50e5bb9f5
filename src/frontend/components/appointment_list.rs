use leptos::prelude::*;

use crate::models::{Appointment, AppointmentId};

/// Bind an appointment id to the list's click handler.
///
/// Each run of the returned callback forwards `id` exactly once.
pub fn select_appointment(
    on_appointment_click: Callback<AppointmentId>,
    id: AppointmentId,
) -> Callback<()> {
    Callback::new(move |_| on_appointment_click.run(id))
}

/// Renders appointments in the order given, one clickable item each.
///
/// # Props
/// - `appointments`: Signal<Vec<Appointment>> - The appointments to show
/// - `on_appointment_click`: Callback<AppointmentId> - Called with the id of a clicked item
/// - `selected`: MaybeProp<AppointmentId> - Highlights the matching item
#[component]
pub fn AppointmentList(
    #[prop(into)] appointments: Signal<Vec<Appointment>>,
    on_appointment_click: Callback<AppointmentId>,
    #[prop(optional, into)] selected: MaybeProp<AppointmentId>,
) -> impl IntoView {
    view! {
        <div class="mt-6">
            <h2 class="text-2xl font-semibold text-gray-100 mb-4">"Appointment List"</h2>
            <ul class="space-y-2">
                {move || {
                    appointments
                        .get()
                        .into_iter()
                        .map(|appointment| {
                            let on_select = select_appointment(on_appointment_click, appointment.id);
                            view! {
                                <AppointmentItem
                                    appointment=appointment
                                    on_select=on_select
                                    selected=selected
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[component]
fn AppointmentItem(
    appointment: Appointment,
    on_select: Callback<()>,
    selected: MaybeProp<AppointmentId>,
) -> impl IntoView {
    let id = appointment.id;
    let is_selected = move || selected.get() == Some(id);
    let time_range = appointment.time_range();
    let badge_class = format!(
        "px-2 py-0.5 rounded text-xs {}",
        appointment.tone().badge_class()
    );

    view! {
        <li
            data-appointment-id=id.to_string()
            aria-selected=move || is_selected().to_string()
            on:click=move |_| on_select.run(())
            class="bg-gray-800 border border-gray-700 rounded-lg p-4 cursor-pointer hover:border-blue-500 transition-colors"
            class:border-blue-500=is_selected
        >
            <strong class="text-gray-100">{appointment.patient}</strong>
            " with Dr. "
            {appointment.doctor}
            <br/>
            <span class="text-sm text-gray-400 font-mono">{time_range}</span>
            <br/>
            <span class=badge_class>"Status: " {appointment.status}</span>
            <span class="text-sm text-gray-400">" | Reason: " {appointment.reason}</span>
        </li>
    }
}

#[cfg(test)]
#[path = "appointment_list_test.rs"]
mod appointment_list_test;
