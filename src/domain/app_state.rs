use serde::{Deserialize, Serialize};

use super::entities::{CalculationRecord, CalculationResult};
use super::form::FormState;

/// Recent calculations kept in the history list.
pub const HISTORY_CAP: usize = 25;

/// Environment override for the costing service base URL.
pub const BASE_URL_ENV: &str = "LCC_API_BASE";

/// Local development address of the costing service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// The form draft being edited; submitted as-is.
    pub form: FormState,
    /// Payload of the most recent successful calculation. Not persisted.
    pub last_result: Option<CalculationResult>,
    /// Most recent calculations first.
    pub history: Vec<CalculationRecord>,
    pub endpoint: EndpointSettings,
}

impl AppState {
    pub fn record_calculation(&mut self, record: CalculationRecord) {
        self.history.insert(0, record);
        self.history.truncate(HISTORY_CAP);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.last_result = None;
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.form = persisted.form;
        self.history = persisted.history;
        if let Some(endpoint) = persisted.endpoint {
            self.endpoint = endpoint;
        }
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            form: self.form.clone(),
            history: self.history.clone(),
            endpoint: Some(self.endpoint.clone()),
        }
    }
}

/// Where the costing service lives. The `/calculate` path is fixed; only the
/// base is configurable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointSettings {
    pub base_url: String,
}

impl EndpointSettings {
    /// Out-of-the-box value: `LCC_API_BASE` when set, the bundled default
    /// otherwise. Persisted user settings take precedence once saved.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// On-disk snapshot of everything worth keeping between runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub form: FormState,
    #[serde(default)]
    pub history: Vec<CalculationRecord>,
    #[serde(default)]
    pub endpoint: Option<EndpointSettings>,
}
