use dioxus::prelude::*;
use serde_json::Value;

use crate::{
    app::{persist_user_state, submit_calculation},
    domain::{AppState, FormEdit},
    infra::SubmitGate,
    ui::components::{
        quantity_table::{QuantityRow, QuantityTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn ProjectPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let submitting = use_context::<Signal<bool>>();
    let gate = use_context::<SubmitGate>();
    let nav = use_navigator();

    let mut item_input = use_signal(String::new);
    let mut amount_input = use_signal(String::new);

    let project_name = state.with(|st| st.form.project_name.clone());
    let quantities = state.with(|st| st.form.bill_of_quantity.clone());
    let quantity_count = quantities.len();

    let rows: Vec<QuantityRow> = quantities
        .iter()
        .map(|(item, amount)| QuantityRow {
            item: item.clone(),
            amount: amount_label(amount),
        })
        .collect();

    let on_name_input = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            state.with_mut(|st| st.form.apply(FormEdit::ProjectName(evt.value())));
        }
    };

    // Text input drafts are saved on blur rather than per keystroke.
    let on_name_change = {
        let state = state.clone();
        move |_| persist_user_state(&state)
    };

    let on_calculate = {
        let state = state.clone();
        let toasts = toasts.clone();
        let submitting = submitting.clone();
        let gate = gate.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            submit_calculation(
                state.clone(),
                toasts.clone(),
                submitting.clone(),
                gate.clone(),
                nav,
            );
        }
    };

    let on_add_item = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let mut item_input = item_input.clone();
        let mut amount_input = amount_input.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let item = item_input().trim().to_string();
            if item.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Name the quantity item first.");
                return;
            }

            let amount = match parse_amount(&amount_input()) {
                Ok(value) => value,
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                    return;
                }
            };

            state.with_mut(|st| {
                st.form.apply(FormEdit::SetQuantity {
                    item: item.clone(),
                    amount,
                })
            });
            persist_user_state(&state);
            item_input.set(String::new());
            amount_input.set(String::new());
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("Recorded {item} in the bill of quantities."),
            );
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |item: String| {
            state.with_mut(|st| {
                st.form.apply(FormEdit::RemoveQuantity { item: item.clone() })
            });
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                format!("Removed {item} from the bill of quantities."),
            );
        }
    };

    let in_flight = submitting();
    let calculate_class = if in_flight {
        "cursor-wait rounded-lg bg-indigo-500/50 px-4 py-2 text-sm font-semibold text-white/70"
    } else {
        "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400"
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Project" }
                form {
                    class: "mt-4 flex flex-wrap items-end gap-4",
                    onsubmit: on_calculate,
                    div { class: "flex-1 min-w-[240px]",
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Project Name" }
                        input {
                            class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                            value: project_name,
                            oninput: on_name_input,
                            onchange: on_name_change,
                            placeholder: "e.g. Riverside Crossing",
                        }
                    }
                    button {
                        class: "{calculate_class}",
                        r#type: "submit",
                        disabled: in_flight,
                        if in_flight { "Calculating..." } else { "Calculate Life Cycle Cost" }
                    }
                }
                p { class: "mt-3 text-xs text-slate-500",
                    "Sends the project draft to the calculation service exactly as shown here."
                }
            }

            section {
                class: "space-y-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Bill of Quantities" }
                    span { class: "text-xs text-slate-500", "{quantity_count} items" }
                }
                form {
                    class: "flex flex-wrap items-end gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-4",
                    onsubmit: on_add_item,
                    div { class: "flex-1 min-w-[200px]",
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Item" }
                        input {
                            class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                            value: item_input(),
                            oninput: move |evt| item_input.set(evt.value()),
                            placeholder: "e.g. structural steel (t)",
                        }
                    }
                    div { class: "w-32",
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Quantity" }
                        input {
                            class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                            inputmode: "decimal",
                            value: amount_input(),
                            oninput: move |evt| amount_input.set(evt.value()),
                            placeholder: "120",
                        }
                    }
                    button {
                        class: "rounded-lg border border-indigo-500/40 px-4 py-2 text-sm font-semibold text-indigo-200 hover:bg-indigo-500/10",
                        r#type: "submit",
                        "Add Item"
                    }
                }

                QuantityTable { rows, on_remove }
            }
        }
    }
}

fn parse_amount(raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter a quantity amount.".to_string());
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| "Quantity amounts must be numeric.".to_string())?;
    serde_json::Number::from_f64(amount)
        .map(Value::Number)
        .ok_or_else(|| "Quantity amounts must be finite.".to_string())
}

fn amount_label(amount: &Value) -> String {
    match amount {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amounts_parse_as_json_numbers() {
        assert_eq!(parse_amount("120"), Ok(json!(120.0)));
        assert_eq!(parse_amount(" 3.5 "), Ok(json!(3.5)));
    }

    #[test]
    fn junk_amounts_are_rejected_with_a_message() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("many").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn labels_render_numbers_and_strings_bare() {
        assert_eq!(amount_label(&json!(120.0)), "120.0");
        assert_eq!(amount_label(&json!("two spans")), "two spans");
        assert_eq!(amount_label(&json!({ "raw": 1 })), "{\"raw\":1}");
    }
}
