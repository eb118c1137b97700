//! Form draft for a calculation request: the fields the user fills in
//! before submitting them to the costing service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User-entered calculation inputs, serialized verbatim as the request body.
///
/// `bill_of_quantity` maps an item label (e.g. a material) to whatever value
/// the costing service expects for it; the client treats the values as opaque
/// JSON and never interprets them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub project_name: String,
    pub bill_of_quantity: BTreeMap<String, Value>,
}

impl FormState {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            bill_of_quantity: BTreeMap::new(),
        }
    }

    /// Replace exactly the field addressed by `edit`, leaving the rest of the
    /// draft untouched. Any string is accepted for the project name, empty
    /// included; validation is the service's job, not the form's.
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::ProjectName(name) => {
                self.project_name = name;
            }
            FormEdit::SetQuantity { item, amount } => {
                self.bill_of_quantity.insert(item, amount);
            }
            FormEdit::RemoveQuantity { item } => {
                self.bill_of_quantity.remove(&item);
            }
        }
    }
}

/// A single-field edit of the form draft.
#[derive(Clone, Debug, PartialEq)]
pub enum FormEdit {
    ProjectName(String),
    SetQuantity { item: String, amount: Value },
    RemoveQuantity { item: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft_with_quantities() -> FormState {
        let mut form = FormState::new("Ravi River Crossing");
        form.apply(FormEdit::SetQuantity {
            item: "concrete_m35".into(),
            amount: json!(1450.0),
        });
        form.apply(FormEdit::SetQuantity {
            item: "steel_fe500".into(),
            amount: json!(860.5),
        });
        form
    }

    #[test]
    fn project_name_edit_leaves_quantities_untouched() {
        let mut form = draft_with_quantities();
        let quantities_before = form.bill_of_quantity.clone();

        form.apply(FormEdit::ProjectName("Ravi River Crossing (rev B)".into()));

        assert_eq!(form.project_name, "Ravi River Crossing (rev B)");
        assert_eq!(form.bill_of_quantity, quantities_before);
    }

    #[test]
    fn set_quantity_overwrites_only_the_named_item() {
        let mut form = draft_with_quantities();

        form.apply(FormEdit::SetQuantity {
            item: "steel_fe500".into(),
            amount: json!(900.0),
        });

        assert_eq!(form.project_name, "Ravi River Crossing");
        assert_eq!(form.bill_of_quantity["steel_fe500"], json!(900.0));
        assert_eq!(form.bill_of_quantity["concrete_m35"], json!(1450.0));
        assert_eq!(form.bill_of_quantity.len(), 2);
    }

    #[test]
    fn remove_quantity_only_drops_the_named_item() {
        let mut form = draft_with_quantities();

        form.apply(FormEdit::RemoveQuantity {
            item: "concrete_m35".into(),
        });

        assert_eq!(form.bill_of_quantity.len(), 1);
        assert!(form.bill_of_quantity.contains_key("steel_fe500"));
    }

    #[test]
    fn removing_an_unknown_item_is_a_no_op() {
        let mut form = draft_with_quantities();
        let before = form.clone();

        form.apply(FormEdit::RemoveQuantity {
            item: "bitumen".into(),
        });

        assert_eq!(form, before);
    }

    #[test]
    fn empty_project_name_is_accepted() {
        let mut form = draft_with_quantities();
        form.apply(FormEdit::ProjectName(String::new()));
        assert_eq!(form.project_name, "");
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let mut form = FormState::new("Bridge A");
        form.apply(FormEdit::SetQuantity {
            item: "concrete_m35".into(),
            amount: json!(100),
        });

        let body = serde_json::to_value(&form).expect("form serializes");
        assert_eq!(
            body,
            json!({
                "project_name": "Bridge A",
                "bill_of_quantity": { "concrete_m35": 100 }
            })
        );
    }

    #[test]
    fn quantity_values_stay_opaque() {
        // The service owns the meaning of quantity values; non-numeric JSON
        // must survive the round trip untouched.
        let mut form = FormState::new("Bridge A");
        form.apply(FormEdit::SetQuantity {
            item: "notes".into(),
            amount: json!({ "grade": "M35", "source": "schedule of rates" }),
        });

        let body = serde_json::to_value(&form).expect("form serializes");
        assert_eq!(
            body["bill_of_quantity"]["notes"],
            json!({ "grade": "M35", "source": "schedule of rates" })
        );
    }
}
