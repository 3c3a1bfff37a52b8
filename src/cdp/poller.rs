//! CDP readiness polling
//!
//! A freshly launched remote browser takes an unpredictable amount of time
//! before its control endpoint accepts connections. Instead of sleeping a
//! fixed duration, the poller probes the version endpoint with exponential
//! backoff until it answers 200 or the overall budget runs out.
//!
//! The backoff logic lives in a pure [`PollState::step`] function so it can
//! be tested without any transport.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::{Error, Result};

/// Well-known sub-path of the CDP version/health endpoint
pub const VERSION_PATH: &str = "/json/version";

/// Default initial polling interval
pub const DEFAULT_INITIAL_INTERVAL: Duration = Duration::from_millis(500);

/// Ceiling for the backed-off polling interval
const MAX_INTERVAL: Duration = Duration::from_secs(8);

/// Number of attempts at the initial cadence before backoff starts
const BACKOFF_AFTER_ATTEMPTS: u32 = 3;

/// Bounds for the per-attempt timeout
const MIN_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(250);
const MAX_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(3);

/// Ephemeral state of one poll loop
#[derive(Debug, Clone)]
pub(crate) struct PollState {
    /// Absolute time after which polling fails
    pub(crate) deadline: Instant,
    /// Current polling interval
    pub(crate) interval: Duration,
    /// Attempts completed so far
    pub(crate) attempts: u32,
}

/// Result of a single probe of the version endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttemptOutcome {
    /// Endpoint answered 200
    Ready,
    /// Non-200 status, connection refusal or per-attempt timeout
    NotReady,
}

/// What the loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PollDecision {
    /// Endpoint is reachable
    Ready,
    /// Sleep for the given remainder of the interval, then probe again
    RetryAfter(Duration),
    /// Deadline exceeded
    Fail,
}

impl PollState {
    pub(crate) fn new(now: Instant, overall_timeout: Duration, initial_interval: Duration) -> Self {
        Self {
            deadline: now + overall_timeout,
            interval: initial_interval,
            attempts: 0,
        }
    }

    /// Timeout budget for a single probe: shorter than the current interval
    /// so one slow attempt cannot stall the cadence
    pub(crate) fn attempt_timeout(&self) -> Duration {
        (self.interval * 3 / 4).clamp(MIN_ATTEMPT_TIMEOUT, MAX_ATTEMPT_TIMEOUT)
    }

    /// Advance the state machine with the outcome of one probe.
    ///
    /// `attempt_elapsed` is the time the probe itself consumed; the retry
    /// sleep is the remainder of the current interval, never negative, and
    /// never overshooting the deadline.
    pub(crate) fn step(
        &mut self,
        now: Instant,
        attempt_elapsed: Duration,
        outcome: AttemptOutcome,
    ) -> PollDecision {
        match outcome {
            AttemptOutcome::Ready => PollDecision::Ready,
            AttemptOutcome::NotReady => {
                self.attempts += 1;

                if now >= self.deadline {
                    return PollDecision::Fail;
                }

                if self.attempts > BACKOFF_AFTER_ATTEMPTS {
                    self.interval = (self.interval * 2).min(MAX_INTERVAL);
                }

                let sleep = self
                    .interval
                    .saturating_sub(attempt_elapsed)
                    .min(self.deadline - now);

                PollDecision::RetryAfter(sleep)
            }
        }
    }
}

/// Derive the version/health URL from a remote-debugging base URL
pub fn health_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), VERSION_PATH)
}

/// Poll a remote browser's CDP endpoint until it is reachable.
///
/// Probes `{base_url}/json/version` sequentially; exactly a 200 response
/// counts as ready, anything else (non-200 status, connection refusal,
/// per-attempt timeout) is swallowed as "not ready yet". Fails with
/// [`Error::PollTimeout`] once `overall_timeout` is exhausted.
pub async fn wait_for_ready(
    base_url: &str,
    overall_timeout: Duration,
    initial_interval: Duration,
) -> Result<()> {
    let endpoint = health_url(base_url);
    let client = reqwest::Client::new();

    let start = Instant::now();
    let mut state = PollState::new(start, overall_timeout, initial_interval);

    debug!(
        "Waiting for CDP endpoint {} (budget {}ms)",
        endpoint,
        overall_timeout.as_millis()
    );

    loop {
        let attempt_start = Instant::now();
        let outcome = probe(&client, &endpoint, state.attempt_timeout()).await;

        match state.step(Instant::now(), attempt_start.elapsed(), outcome) {
            PollDecision::Ready => {
                info!(
                    "CDP endpoint {} ready after {} attempt(s), {}ms",
                    endpoint,
                    state.attempts + 1,
                    start.elapsed().as_millis()
                );
                return Ok(());
            }
            PollDecision::RetryAfter(sleep) => {
                if !sleep.is_zero() {
                    tokio::time::sleep(sleep).await;
                }
            }
            PollDecision::Fail => {
                return Err(Error::poll_timeout(
                    endpoint,
                    start.elapsed().as_millis() as u64,
                ));
            }
        }
    }
}

/// Issue one probe; the response body is not inspected
async fn probe(client: &reqwest::Client, endpoint: &str, timeout: Duration) -> AttemptOutcome {
    match client.get(endpoint).timeout(timeout).send().await {
        Ok(response) if response.status() == reqwest::StatusCode::OK => AttemptOutcome::Ready,
        Ok(response) => {
            debug!("CDP endpoint not ready yet: status {}", response.status());
            AttemptOutcome::NotReady
        }
        Err(err) => {
            debug!("CDP endpoint not ready yet: {}", err);
            AttemptOutcome::NotReady
        }
    }
}
