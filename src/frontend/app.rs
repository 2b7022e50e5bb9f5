use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use thaw::*;

use crate::config::AppConfig;
use crate::frontend::components::AppointmentDetail;
use crate::frontend::document::{DocumentAppointments, load_appointments, load_config};
use crate::frontend::pages::Home;
use crate::frontend::selection::{load_selection, save_selection};
use crate::models::AppointmentId;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Set dark theme for Thaw UI components
    let theme = RwSignal::new(Theme::dark());

    let config = load_config();
    let title = config.title.clone();
    provide_context(config);

    view! {
        <ConfigProvider theme>
            <Title text=title/>
            <Router>
                <main class="min-h-screen bg-gray-900 text-gray-100 flex flex-col">
                    <div class="flex-1">
                        <Routes fallback=|| view! { <p>"Page not found"</p> }>
                            <Route path=path!("/") view=HomeRoute/>
                        </Routes>
                    </div>
                    <footer class="py-6 px-6 border-t border-gray-700 text-center text-xs text-gray-500">
                        "healthcare-frontend v" {env!("CARGO_PKG_VERSION")}
                    </footer>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// Wires the page-supplied appointments and the persisted selection into Home.
#[component]
fn HomeRoute() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let source = DocumentAppointments::new(config.data_element_id.clone());
    let appointments = RwSignal::new(load_appointments(&source));
    let selected = RwSignal::new(load_selection(&config.selection_storage_key));

    let storage_key = config.selection_storage_key.clone();
    let on_appointment_click = Callback::new(move |id: AppointmentId| {
        appointments.with_untracked(|list| {
            if let Some(appointment) = list.iter().find(|a| a.id == id) {
                web_sys::console::log_1(&format!("Selected: {}", appointment).into());
            }
        });
        selected.set(Some(id));
        save_selection(&storage_key, Some(id));
    });

    let storage_key = config.selection_storage_key;
    let on_close = Callback::new(move |_: ()| {
        selected.set(None);
        save_selection(&storage_key, None);
    });

    let selected: Signal<Option<AppointmentId>> = selected.into();

    view! {
        <Home
            appointments=appointments
            on_appointment_click=on_appointment_click
            selected=selected
        />
        <div class="container mx-auto px-6 pb-6">
            <AppointmentDetail appointments=appointments selected=selected on_close=on_close/>
        </div>
    }
}
