use leptos::prelude::*;

use crate::models::{Appointment, AppointmentId};

/// Details of the selected appointment. Renders nothing when no listed appointment is selected.
#[component]
pub fn AppointmentDetail(
    #[prop(into)] appointments: Signal<Vec<Appointment>>,
    #[prop(into)] selected: MaybeProp<AppointmentId>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let current = move || {
        let id = selected.get()?;
        appointments.with(|list| list.iter().find(|a| a.id == id).cloned())
    };

    move || {
        current().map(|appointment| {
            let time_range = appointment.time_range();
            let notes = appointment.visible_notes().map(str::to_string);

            view! {
                <section class="mt-6 bg-gray-800 border border-gray-700 rounded-lg p-4">
                    <div class="flex justify-between items-start mb-3">
                        <h3 class="text-xl font-semibold text-gray-100">
                            {appointment.to_string()}
                        </h3>
                        {on_close
                            .map(|on_close| {
                                view! {
                                    <button
                                        on:click=move |_| on_close.run(())
                                        class="text-gray-400 hover:text-gray-100 transition-colors"
                                        title="Close"
                                    >
                                        "✕"
                                    </button>
                                }
                            })}
                    </div>
                    <dl class="grid grid-cols-[max-content_1fr] gap-x-4 gap-y-1 text-sm">
                        <dt class="text-gray-400">"Patient"</dt>
                        <dd>{appointment.patient}</dd>
                        <dt class="text-gray-400">"Doctor"</dt>
                        <dd>"Dr. " {appointment.doctor}</dd>
                        <dt class="text-gray-400">"Time"</dt>
                        <dd class="font-mono">{time_range}</dd>
                        <dt class="text-gray-400">"Status"</dt>
                        <dd>{appointment.status}</dd>
                        <dt class="text-gray-400">"Reason"</dt>
                        <dd>{appointment.reason}</dd>
                        {notes
                            .map(|notes| {
                                view! {
                                    <dt class="text-gray-400">"Notes"</dt>
                                    <dd class="whitespace-pre-wrap">{notes}</dd>
                                }
                            })}
                    </dl>
                </section>
            }
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn appointment(id: AppointmentId, patient: &str, notes: Option<&str>) -> Appointment {
        Appointment {
            id,
            patient: patient.to_string(),
            doctor: "Jones".to_string(),
            start_time: "14:00".to_string(),
            end_time: "14:45".to_string(),
            status: "scheduled".to_string(),
            reason: "follow-up".to_string(),
            notes: notes.map(str::to_string),
        }
    }

    fn render(list: Vec<Appointment>, selected: Option<AppointmentId>) -> String {
        Owner::new().with(|| {
            view! {
                <AppointmentDetail
                    appointments=Signal::stored(list)
                    selected=Signal::stored(selected)
                />
            }
            .to_html()
        })
    }

    #[test]
    fn shows_selected_appointment() {
        let html = render(
            vec![
                appointment(1, "Alice", None),
                appointment(2, "Bob", Some("bring referral")),
            ],
            Some(2),
        );
        assert!(html.contains("Appointment for Bob with Dr. Jones on 14:00"));
        assert!(html.contains("follow-up"));
        assert!(html.contains("bring referral"));
        assert!(!html.contains("Alice"));
    }

    #[test]
    fn hides_notes_when_absent() {
        let html = render(vec![appointment(1, "Alice", None)], Some(1));
        assert!(html.contains("Alice"));
        assert!(!html.contains("Notes"));
    }

    #[test]
    fn renders_nothing_without_selection() {
        let html = render(vec![appointment(1, "Alice", None)], None);
        assert!(!html.contains("<section"));
    }

    #[test]
    fn renders_nothing_for_unknown_id() {
        let html = render(vec![appointment(1, "Alice", None)], Some(9));
        assert!(!html.contains("<section"));
    }
}
