mod fixtures;
pub use fixtures::*;

// Crate types the tests touch most, pulled up for brevity.
pub use lcc_workbench::domain::{AppState, EndpointSettings, PersistedState};
pub use lcc_workbench::{
    CalculationRecord, CalculationResult, FormEdit, FormState, SubmitError, Submitter,
    TransportError,
};
