pub mod project;
pub mod results;
pub mod settings;

pub use project::ProjectPage;
pub use results::ResultsPage;
pub use settings::SettingsPage;
