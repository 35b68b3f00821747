//! Simulated job: single-flight, cancellable stand-in for a service call.
//!
//! DESIGN
//! ======
//! Every panel action that "calls an AI" follows the same lifecycle:
//! validate → pending → wait → synthesize → append → idle. `SimulatedJob`
//! owns the pending flag, the cancellation token and the last outcome for
//! one panel instance. Validation happens in the panel before `try_begin`.
//!
//! Single-flight: `try_begin` flips an atomic flag and returns an RAII
//! `FlightGuard`. A second caller while the guard lives gets `None` and
//! must treat the invocation as a no-op. Dropping the guard clears pending.
//!
//! TRADE-OFFS
//! ==========
//! Cancellation is sticky: once a panel is unmounted its token stays
//! cancelled and every later run resolves to `Cancelled` immediately. A
//! remounted panel is a fresh instance with a fresh token.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::services::ServiceError;

// =============================================================================
// DELAY
// =============================================================================

/// Smallest per-tick upload step, in percent. Smaller configured steps are
/// raised to this so a progress delay always finishes in bounded time.
pub const MIN_PROGRESS_STEP: f64 = 1.0;

/// How long a simulated call takes before its result is delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum Delay {
    Fixed(Duration),
    /// `base` plus a uniformly random extra in `[0, spread]`.
    Jittered { base: Duration, spread: Duration },
    /// Upload-style progress: each `tick` adds a random step in
    /// `(0, max_step]` percent until 100, then waits `settle`. `max_step`
    /// is floored at `MIN_PROGRESS_STEP`.
    Progress { tick: Duration, max_step: f64, settle: Duration },
}

impl Delay {
    /// Wait out the delay, reporting progress percentages for `Progress`.
    pub async fn elapse(&self, on_progress: &mut (dyn FnMut(f64) + Send)) {
        match self {
            Self::Fixed(d) => tokio::time::sleep(*d).await,
            Self::Jittered { base, spread } => {
                let extra = jitter(*spread);
                tokio::time::sleep(*base + extra).await;
            }
            Self::Progress { tick, max_step, settle } => {
                let mut progress = 0.0_f64;
                on_progress(progress);
                while progress < 100.0 {
                    tokio::time::sleep(*tick).await;
                    progress = (progress + progress_step(*max_step)).min(100.0);
                    on_progress(progress);
                }
                tokio::time::sleep(*settle).await;
            }
        }
    }
}

fn jitter(spread: Duration) -> Duration {
    let spread_ms = u64::try_from(spread.as_millis()).unwrap_or(u64::MAX);
    if spread_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::rng().random_range(0..=spread_ms))
}

fn progress_step(max_step: f64) -> f64 {
    if !max_step.is_finite() {
        return 100.0;
    }
    // Half-open at zero so every tick makes progress.
    max_step.max(MIN_PROGRESS_STEP) * (1.0 - rand::rng().random::<f64>())
}

// =============================================================================
// STATUS
// =============================================================================

/// Where a panel's job currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPhase {
    Idle,
    Pending,
}

/// Terminal outcome of the most recent job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Succeeded,
    Failed,
    Cancelled,
}

/// Result of running one admitted job.
#[derive(Debug)]
pub enum JobOutcome<T> {
    Succeeded(T),
    Failed(ServiceError),
    Cancelled,
}

// =============================================================================
// JOB
// =============================================================================

pub struct SimulatedJob {
    name: &'static str,
    in_flight: AtomicBool,
    last: Mutex<Option<JobStatus>>,
    cancel: CancellationToken,
    timeout: Duration,
}

/// Proof that the holder owns the single in-flight slot.
#[must_use = "dropping the guard immediately clears the pending state"]
pub struct FlightGuard<'a> {
    job: &'a SimulatedJob,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.job.in_flight.store(false, Ordering::Release);
        debug!(job = self.job.name, "job: idle");
    }
}

impl SimulatedJob {
    #[must_use]
    pub fn new(name: &'static str, timeout: Duration) -> Self {
        Self { name, in_flight: AtomicBool::new(false), last: Mutex::new(None), cancel: CancellationToken::new(), timeout }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn phase(&self) -> JobPhase {
        if self.in_flight.load(Ordering::Acquire) { JobPhase::Pending } else { JobPhase::Idle }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase() == JobPhase::Pending
    }

    #[must_use]
    pub fn last_status(&self) -> Option<JobStatus> {
        *self
            .last
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Claim the in-flight slot. `None` means a job is already pending.
    pub fn try_begin(&self) -> Option<FlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            info!(job = self.name, "job: ignored, already pending");
            return None;
        }
        debug!(job = self.name, "job: pending");
        Some(FlightGuard { job: self })
    }

    /// Cancel the in-flight job (if any) and every later one.
    pub fn cancel(&self) {
        if !self.cancel.is_cancelled() {
            info!(job = self.name, pending = self.is_pending(), "job: cancelled");
        }
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run an admitted job: wait out `delay`, then await `work` under the
    /// configured timeout. Cancellation wins over both.
    pub async fn run<T, Fut>(
        &self,
        _flight: &FlightGuard<'_>,
        delay: &Delay,
        on_progress: &mut (dyn FnMut(f64) + Send),
        work: Fut,
    ) -> JobOutcome<T>
    where
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        let waited = tokio::select! {
            biased;
            () = self.cancel.cancelled() => false,
            () = delay.elapse(on_progress) => true,
        };
        if !waited {
            return self.finish(JobOutcome::Cancelled);
        }

        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return self.finish(JobOutcome::Cancelled),
            r = tokio::time::timeout(self.timeout, work) => r,
        };

        let outcome = match result {
            Ok(Ok(value)) => JobOutcome::Succeeded(value),
            Ok(Err(e)) => JobOutcome::Failed(e),
            Err(_) => JobOutcome::Failed(ServiceError::Timeout {
                after_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        };
        self.finish(outcome)
    }

    fn finish<T>(&self, outcome: JobOutcome<T>) -> JobOutcome<T> {
        let status = match &outcome {
            JobOutcome::Succeeded(_) => JobStatus::Succeeded,
            JobOutcome::Failed(e) => {
                warn!(job = self.name, error = %e, "job: failed");
                JobStatus::Failed
            }
            JobOutcome::Cancelled => JobStatus::Cancelled,
        };
        info!(job = self.name, ?status, "job: finished");
        *self
            .last
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(status);
        outcome
    }
}

/// Progress sink for delays that report none.
pub fn no_progress(_: f64) {}

#[cfg(test)]
#[path = "job_test.rs"]
mod job_test;
