use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppState, HISTORY_CAP},
    ui::components::kpi_card::KpiCard,
};

#[component]
pub fn ResultsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let last_result = state.with(|st| st.last_result.clone());
    let history = state.with(|st| st.history.clone());
    let latest_name = history
        .first()
        .map(|record| display_name(&record.project_name))
        .unwrap_or_else(|| "Untitled project".to_string());

    rsx! {
        div { class: "space-y-8",
            if let Some(result) = last_result {
                section {
                    class: "grid gap-4 sm:grid-cols-3",
                    KpiCard {
                        title: "Total Life Cycle Cost".to_string(),
                        value: total_label(result.total_lcc()),
                        description: Some("As reported by the calculation service".to_string()),
                    }
                    KpiCard {
                        title: "Project".to_string(),
                        value: latest_name.clone(),
                        description: None,
                    }
                    KpiCard {
                        title: "Recent Calculations".to_string(),
                        value: history.len().to_string(),
                        description: Some(format!("Keeping the last {HISTORY_CAP}")),
                    }
                }

                section {
                    class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                    h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Service Response" }
                    pre {
                        class: "mt-3 overflow-x-auto rounded-lg bg-slate-950 px-4 py-3 text-xs text-slate-300",
                        "{result.pretty()}"
                    }
                }
            } else {
                section {
                    class: "flex flex-col items-center gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-6 py-16 text-center",
                    h2 { class: "text-lg font-semibold text-slate-200", "No calculation yet" }
                    p { class: "text-sm text-slate-400",
                        "Describe the project and run a calculation to see its life cycle cost here."
                    }
                    button {
                        class: "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400",
                        onclick: move |_| { nav.push(Route::Project {}); },
                        "Open Project Form"
                    }
                }
            }

            section {
                class: "space-y-3",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Recent Calculations" }
                div {
                    class: "overflow-hidden rounded-xl border border-slate-800",
                    table {
                        class: "min-w-full divide-y divide-slate-800 text-sm",
                        thead {
                            class: "bg-slate-900/60 text-left text-xs uppercase tracking-wide text-slate-500",
                            tr {
                                th { class: "px-4 py-3 font-medium", "Project" }
                                th { class: "px-4 py-3 font-medium", "Total LCC" }
                                th { class: "px-4 py-3 font-medium", "Calculated" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-slate-800",
                            for record in history.iter() {
                                tr {
                                    class: "transition-colors hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium text-slate-200", {display_name(&record.project_name)} }
                                    td { class: "px-4 py-3 text-slate-200", {total_label(record.total_lcc)} }
                                    td { class: "px-4 py-3 text-xs text-slate-500", {record.calculated_at_label()} }
                                }
                            }
                            if history.is_empty() {
                                tr {
                                    td {
                                        class: "px-4 py-6 text-center text-sm text-slate-500",
                                        colspan: "3",
                                        "Completed calculations will show up here."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn total_label(total: Option<f64>) -> String {
    match total {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    }
}

fn display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Untitled project".to_string()
    } else {
        trimmed.to_string()
    }
}
