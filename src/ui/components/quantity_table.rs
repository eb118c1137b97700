use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct QuantityRow {
    pub item: String,
    pub amount: String,
}

#[component]
pub fn QuantityTable(rows: Vec<QuantityRow>, on_remove: EventHandler<String>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "overflow-hidden rounded-xl border border-slate-800",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "bg-slate-900/60 text-left text-xs uppercase tracking-wide text-slate-500",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Item" }
                        th { class: "px-4 py-3 font-medium", "Quantity" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for row in rows {
                        QuantityRowView { row, on_remove: on_remove.clone() }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-slate-500",
                                colspan: "3",
                                "Add bill of quantity items to describe the project."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuantityRowView(row: QuantityRow, on_remove: EventHandler<String>) -> Element {
    let remove_item = row.item.clone();
    rsx! {
        tr {
            class: "transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-medium text-slate-200", "{row.item}" }
            td { class: "px-4 py-3 text-slate-200", "{row.amount}" }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                    onclick: move |_| on_remove.call(remove_item.clone()),
                    "Remove"
                }
            }
        }
    }
}
