/*!
 * Poll Configuration
 *
 * Duration/interval presets for the polling entry points, with environment
 * overrides for slow machines and serde support for config files.
 */

use super::{secs_to_duration, Timeout};
use crate::errors::{ProbeError, ProbeResult};
use crate::eventually;
use crate::probe::IntoProbe;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSecondsWithFrac};
use std::time::Duration;

/// Default time to wait for a probe (5s)
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Default delay between samples (10ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Overrides the duration, in fractional seconds
pub const ENV_DURATION_SECS: &str = "PROBE_SYNC_DURATION_SECS";

/// Overrides the poll interval, in fractional seconds
pub const ENV_POLL_INTERVAL_SECS: &str = "PROBE_SYNC_POLL_INTERVAL_SECS";

/// How long to poll and how often to sample
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(rename = "duration_secs")]
    #[serde_as(as = "DurationSecondsWithFrac<f64>")]
    pub duration: Duration,

    #[serde(rename = "poll_interval_secs")]
    #[serde_as(as = "DurationSecondsWithFrac<f64>")]
    pub poll_interval: Duration,
}

impl PollConfig {
    /// Create default configuration (5s, sampling every 10ms)
    pub const fn new() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Short waits for conditions expected to settle almost immediately
    pub const fn fast() -> Self {
        Self {
            duration: Duration::from_millis(500),
            poll_interval: Duration::from_millis(1),
        }
    }

    /// Generous waits for slow or heavily loaded environments
    pub const fn relaxed() -> Self {
        Self {
            duration: Duration::from_secs(60),
            poll_interval: Duration::from_millis(100),
        }
    }

    /// Build from fractional seconds
    pub fn from_secs_f64(duration: f64, poll_interval: f64) -> ProbeResult<Self> {
        Ok(Self {
            duration: secs_to_duration("duration", duration)?,
            poll_interval: secs_to_duration("poll interval", poll_interval)?,
        })
    }

    /// Defaults with `PROBE_SYNC_DURATION_SECS` / `PROBE_SYNC_POLL_INTERVAL_SECS` applied
    pub fn from_env() -> ProbeResult<Self> {
        let mut config = Self::new();
        if let Some(duration) = env_secs(ENV_DURATION_SECS)? {
            config.duration = duration;
        }
        if let Some(poll_interval) = env_secs(ENV_POLL_INTERVAL_SECS)? {
            config.poll_interval = poll_interval;
        }
        tracing::debug!(
            duration_ms = config.duration.as_millis() as u64,
            poll_interval_ms = config.poll_interval.as_millis() as u64,
            "Loaded poll configuration from environment"
        );
        Ok(config)
    }

    /// Parse from JSON (`{"duration_secs": 5.0, "poll_interval_secs": 0.01}`)
    pub fn from_json(json: &str) -> ProbeResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ProbeError::contract_violation(format!("invalid poll configuration: {e}")))
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Start a timeout with this configuration
    pub fn timeout(&self) -> Timeout {
        Timeout::new(self.duration, self.poll_interval)
    }

    /// [`assert_eventually`](crate::assert_eventually) with this configuration
    #[track_caller]
    pub fn assert_eventually<M>(&self, probe: impl IntoProbe<M>, reason: &str) {
        eventually::assert_eventually(probe, self.duration, self.poll_interval, reason)
    }

    /// [`try_assert_eventually`](crate::try_assert_eventually) with this configuration
    pub fn try_assert_eventually<M>(&self, probe: impl IntoProbe<M>, reason: &str) -> ProbeResult<()> {
        eventually::try_assert_eventually(probe, self.duration, self.poll_interval, reason)
    }

    /// [`wait_until`](crate::wait_until) with this configuration
    pub fn wait_until<M>(&self, probe: impl IntoProbe<M>, reason: &str) -> ProbeResult<()> {
        eventually::wait_until(probe, self.duration, self.poll_interval, reason)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_secs(key: &str) -> ProbeResult<Option<Duration>> {
    let raw = match std::env::var(key) {
        Ok(raw) => raw,
        Err(std::env::VarError::NotPresent) => return Ok(None),
        Err(e) => return Err(ProbeError::contract_violation(format!("{key}: {e}"))),
    };
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ProbeError::contract_violation(format!("{key}: `{raw}` is not a number of seconds")))?;
    secs_to_duration(key, secs).map(Some)
}
