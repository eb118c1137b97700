//! Desktop workbench for estimating the life cycle cost of bridge projects.
//!
//! The UI collects a project description, a name plus a bill of quantities,
//! posts it to a calculation service, and keeps track of the results that
//! come back.

pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;

pub use app::App;
pub use domain::{AppState, CalculationRecord, CalculationResult, FormEdit, FormState};
pub use infra::{
    HttpTransport, ResultSink, SubmitError, SubmitGate, Submitter, Transport, TransportError,
};
