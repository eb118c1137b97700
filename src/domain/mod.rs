//! Domain logic for life cycle cost estimation lives here.

pub mod app_state;
pub mod entities;
pub mod form;

#[allow(unused_imports)]
pub use app_state::{
    AppState, EndpointSettings, PersistedState, BASE_URL_ENV, DEFAULT_BASE_URL, HISTORY_CAP,
};
#[allow(unused_imports)]
pub use entities::{CalculationRecord, CalculationResult};
#[allow(unused_imports)]
pub use form::{FormEdit, FormState};
