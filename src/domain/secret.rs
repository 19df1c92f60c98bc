//! Shared token-signing secret.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::TryRngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, RunConfig};

const SECRET_BYTES: usize = 64;

/// Secret material shared by every application that validates tokens.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw secret value, for rendering into manifests.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(**redacted**)")
    }
}

/// Where the run's secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretOrigin {
    /// Loaded from a previous run and kept unchanged.
    Reused,
    /// Generated during this run.
    Generated,
}

/// Ensures a run carries exactly one shared secret.
pub struct SecretProvisioner;

impl SecretProvisioner {
    /// Reuse the persisted secret, or generate one from the OS random source.
    pub fn provision(config: RunConfig) -> Result<(RunConfig, SecretOrigin), AppError> {
        Self::provision_with(config, &mut OsRng)
    }

    /// Same as [`SecretProvisioner::provision`] with an explicit random source.
    pub fn provision_with<R: TryRngCore>(
        mut config: RunConfig,
        rng: &mut R,
    ) -> Result<(RunConfig, SecretOrigin), AppError> {
        if config.jwt_secret.as_ref().is_some_and(|secret| !secret.expose().is_empty()) {
            return Ok((config, SecretOrigin::Reused));
        }

        let secret = generate_secret(rng)?;
        config.jwt_secret = Some(secret);
        Ok((config, SecretOrigin::Generated))
    }
}

/// 64 random bytes, hex-encoded, then base64-encoded.
fn generate_secret<R: TryRngCore>(rng: &mut R) -> Result<SharedSecret, AppError> {
    let mut bytes = [0u8; SECRET_BYTES];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|err| AppError::SecretGenerationFailed(err.to_string()))?;
    Ok(SharedSecret(STANDARD.encode(hex::encode(bytes))))
}
