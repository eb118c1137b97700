use std::sync::Arc;

use dioxus::{core::spawn_forever, prelude::*, router::Navigator, signals::Signal};

use crate::{
    domain::{AppState, CalculationRecord, CalculationResult, EndpointSettings},
    infra::{
        submit::{ResultSink, SubmitError, SubmitGate, Submitter},
        transport::HttpTransport,
    },
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{ProjectPage, ResultsPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Project {},
    #[route("/results")]
    Results {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    // Environment default first; a previously saved endpoint wins over it.
    let state = use_signal(|| AppState {
        endpoint: EndpointSettings::from_env(),
        ..AppState::default()
    });
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Render-side mirror of the submit gate; the gate itself cannot trigger
    // a re-render when it flips.
    let submitting = use_signal(|| false);
    use_context_provider(|| submitting.clone());
    use_context_provider(SubmitGate::new);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!("failed to persist user state: {err}");
    }
}

/// Snapshots the current draft and sends it to the calculation service.
///
/// The snapshot is taken before anything is awaited, so edits made while the
/// request is in flight cannot change what was sent. The task outlives the
/// page that started it; a mid-flight route change does not abort the request.
pub fn submit_calculation(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut submitting: Signal<bool>,
    gate: SubmitGate,
    nav: Navigator,
) {
    if gate.is_in_flight() {
        push_toast(
            toasts.clone(),
            ToastKind::Warning,
            "A calculation is already running.",
        );
        return;
    }

    let snapshot = state.with(|st| st.form.clone());
    let base_url = state.with(|st| st.endpoint.base_url.clone());
    let transport = match HttpTransport::with_base_url(&base_url) {
        Ok(transport) => Arc::new(transport),
        Err(err) => {
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Calculation service address is not usable: {err}"),
            );
            return;
        }
    };
    let submitter = Submitter::with_gate(transport, gate);

    submitting.set(true);
    spawn_forever(async move {
        let project_name = snapshot.project_name.clone();
        let sink: ResultSink = Arc::new(move |result: CalculationResult| {
            // Signal handles are Copy; write through a local so the sink stays Fn.
            let mut state = state;
            state.with_mut(|st| st.last_result = Some(result));
        });

        match submitter.submit(snapshot, sink).await {
            Ok(()) => {
                let record = state.with(|st| {
                    st.last_result
                        .as_ref()
                        .map(|result| CalculationRecord::new(project_name.clone(), result))
                });
                if let Some(record) = record {
                    state.with_mut(|st| st.record_calculation(record));
                }
                persist_user_state(&state);
                push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Calculated life cycle cost for {}.", toast_label(&project_name)),
                );
                nav.push(Route::Results {});
            }
            Err(SubmitError::InFlight) => {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "A calculation is already running.",
                );
            }
            Err(SubmitError::Transport(err)) => {
                tracing::warn!("calculation request failed: {err}");
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Calculation failed: {err}"),
                );
            }
        }
        submitting.set(false);
    });
}

fn toast_label(project_name: &str) -> String {
    let trimmed = project_name.trim();
    if trimmed.is_empty() {
        "the untitled project".to_string()
    } else {
        format!("\"{trimmed}\"")
    }
}

#[component]
pub fn Project() -> Element {
    rsx! { Shell { ProjectPage {} } }
}

#[component]
pub fn Results() -> Element {
    rsx! { Shell { ResultsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
