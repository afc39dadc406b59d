//! Coach registration configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Default shared key, for development only.
const DEFAULT_REGISTRATION_KEY: &str = "BadmintonCoach2024";

/// Coach registration gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CoachConfig {
    /// Shared secret a registrant must present to create a coach account
    #[serde(default = "default_registration_key")]
    pub registration_key: Secret<String>,
}

impl CoachConfig {
    /// The expected key, for handlers performing the gate check.
    pub fn registration_key(&self) -> &str {
        self.registration_key.expose_secret()
    }

    /// Validate coach configuration
    ///
    /// Production deployments must override the shipped default key.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.registration_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("COACH_REGISTRATION_KEY"));
        }
        if *environment == Environment::Production
            && self.registration_key.expose_secret() == DEFAULT_REGISTRATION_KEY
        {
            return Err(ValidationError::DefaultCoachKeyInProduction);
        }
        Ok(())
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            registration_key: default_registration_key(),
        }
    }
}

fn default_registration_key() -> Secret<String> {
    Secret::new(DEFAULT_REGISTRATION_KEY.to_string())
}
