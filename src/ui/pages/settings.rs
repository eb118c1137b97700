use dioxus::prelude::*;
use url::Url;

use crate::{
    app::persist_user_state,
    domain::{AppState, EndpointSettings, FormState, BASE_URL_ENV},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial_endpoint = state.with(|st| st.endpoint.clone());
    let mut base_url_input = use_signal(|| initial_endpoint.base_url.clone());

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let mut base_url_input = base_url_input.clone();
        move |_| {
            match parse_base_url(&base_url_input()) {
                Ok(base_url) => {
                    base_url_input.set(base_url.clone());
                    state.with_mut(|st| st.endpoint.base_url = base_url);
                    persist_user_state(&state);
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        "Updated the calculation service address.",
                    );
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let mut base_url_input = base_url_input.clone();
        move |_| {
            let defaults = EndpointSettings::from_env();
            base_url_input.set(defaults.base_url.clone());
            state.with_mut(|st| st.endpoint = defaults);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Restored the default service address.",
            );
        }
    };

    let on_clear_draft = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.form = FormState::default());
            persist_user_state(&state);
            push_toast(toasts.clone(), ToastKind::Info, "Cleared the project draft.");
        }
    };

    let on_clear_history = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.clear_history());
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Cleared recent calculations.",
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Calculation Service" }
                div { class: "mt-4",
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Base URL" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                        value: base_url_input(),
                        oninput: move |evt| base_url_input.set(evt.value()),
                    }
                    p { class: "mt-2 text-xs text-slate-500",
                        "Project drafts are POSTed to the calculate endpoint under this address. Include a trailing slash when the service lives under a path. {BASE_URL_ENV} overrides the built-in default."
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400", onclick: on_apply, "Apply" }
                    button { class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800", onclick: on_reset, "Reset Default" }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Data Controls" }
                p { class: "mt-2 text-sm text-slate-400", "Both actions update the saved state on disk immediately." }
                div { class: "mt-3 flex gap-3",
                    button { class: "rounded-lg border border-amber-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-amber-200 hover:bg-amber-500/10", onclick: on_clear_draft, "Clear Project Draft" }
                    button { class: "rounded-lg border border-rose-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10", onclick: on_clear_history, "Clear Recent Calculations" }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-center text-slate-400",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-2 text-sm", "{APP_NAME} {version_label()}" }
                p { class: "mt-1 text-xs text-slate-500",
                    "Life cycle cost estimation for bridge projects. The heavy math happens in a separate calculation service."
                }
            }
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter the base URL of the calculation service.".to_string());
    }
    let url = Url::parse(trimmed).map_err(|err| format!("Invalid base URL: {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("The calculation service must be reached over http or https.".to_string());
    }
    Ok(url.to_string())
}
