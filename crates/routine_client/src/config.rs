use crate::RoutineApiError;
use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://fitness-tracker-production-ba8c.up.railway.app";

#[derive(Clone, Debug)]
pub struct Config {
    pub token: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, RoutineApiError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Read configuration through `get` instead of the process environment,
    /// so tests never have to mutate global state.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, RoutineApiError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("ROUTINE_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| RoutineApiError::Config("ROUTINE_API_TOKEN missing".into()))?;
        let base_url = get("ROUTINE_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Ok(Self {
            token: SecretString::new(token.into()),
            base_url,
        })
    }
}
