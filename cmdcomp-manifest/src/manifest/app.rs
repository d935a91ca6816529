use serde::Deserialize;

/// Application metadata
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Name of the command being completed
    pub name: String,

    /// Description shown by `cmdcomp check`
    pub description: Option<String>,
}
