//! Network environment selection for the CoinGate API.
//!
//! CoinGate runs two independent deployments: the live payment gateway and a
//! sandbox for merchant integration testing. Orders and credentials are not
//! shared between them.

use std::fmt;
use std::str::FromStr;

use crate::api::error::ClientError;

/// Hostname of the live CoinGate API.
pub const LIVE_HOSTNAME: &str = "api.coingate.com";

/// Hostname of the sandbox CoinGate API.
pub const SANDBOX_HOSTNAME: &str = "api-sandbox.coingate.com";

/// CoinGate deployment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Integration-testing deployment. Payments are simulated.
    #[default]
    Sandbox,
    /// Production deployment handling real payments.
    Live,
}

impl Environment {
    /// Hostname of the deployment.
    pub fn hostname(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_HOSTNAME,
            Environment::Live => LIVE_HOSTNAME,
        }
    }

    /// `https://` base URL of the deployment, without the version path.
    pub fn base_url(self) -> String {
        format!("https://{}", self.hostname())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => f.write_str("sandbox"),
            Environment::Live => f.write_str("live"),
        }
    }
}

impl FromStr for Environment {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Environment::Sandbox),
            "live" => Ok(Environment::Live),
            other => Err(ClientError::InvalidEnvironment(other.to_string())),
        }
    }
}
