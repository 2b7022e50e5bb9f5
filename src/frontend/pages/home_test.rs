use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use crate::frontend::pages::Home;
use crate::models::{Appointment, AppointmentId};

fn render(list: Vec<Appointment>) -> String {
    Owner::new().with(|| {
        let on_click = Callback::new(|_: AppointmentId| {});
        view! { <Home appointments=Signal::stored(list) on_appointment_click=on_click/> }.to_html()
    })
}

#[test]
fn renders_heading_and_single_paragraph() {
    let html = render(Vec::new());
    assert!(html.contains("Welcome to the Healthcare System"));
    assert!(html.contains("Manage your appointments efficiently."));
    assert_eq!(html.matches("<h1").count(), 1);
    assert_eq!(html.matches("<p").count(), 1);
}

#[test]
fn embeds_empty_appointment_list_without_inventing_data() {
    let html = render(Vec::new());
    assert!(html.contains("Appointment List"));
    assert_eq!(html.matches("<li").count(), 0);
}

#[test]
fn forwards_supplied_appointments_to_the_list() {
    let list = vec![Appointment {
        id: 42,
        patient: "Dana".to_string(),
        doctor: "Okafor".to_string(),
        start_time: "11:00".to_string(),
        end_time: "11:20".to_string(),
        status: "rescheduled".to_string(),
        reason: "lab results".to_string(),
        notes: None,
    }];
    let html = render(list);
    assert_eq!(html.matches("<li").count(), 1);
    assert!(html.contains("Dana"));
    assert!(html.contains(r#"data-appointment-id="42""#));
    assert_eq!(html.matches("<p").count(), 1);
}
