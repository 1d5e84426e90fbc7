//! API liveness polling.
//!
//! The monitor probes the health endpoint; the [`Poller`] decides when. Both the
//! HTTP transport and the interval timer are injected so the state machine can
//! be driven deterministically in tests.

use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Checking,
    Connected,
    Disconnected,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "Checking API...",
            ApiStatus::Connected => "API Connected",
            ApiStatus::Disconnected => "API Disconnected",
        }
    }
}

/// Current status plus the time the last probe finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub status: ApiStatus,
    pub last_check: Option<DateTime<Local>>,
}

impl Default for HealthSnapshot {
    fn default() -> Self {
        Self {
            status: ApiStatus::Checking,
            last_check: None,
        }
    }
}

impl HealthSnapshot {
    /// A probe is in flight; the previous timestamp stays visible.
    pub fn begin_check(self) -> Self {
        Self {
            status: ApiStatus::Checking,
            ..self
        }
    }

    pub fn complete(self, status: ApiStatus, at: DateTime<Local>) -> Self {
        Self {
            status,
            last_check: Some(at),
        }
    }

    /// `HH:MM:SS` of the last completed probe.
    pub fn last_check_label(&self) -> Option<String> {
        self.last_check.map(|t| t.format("%H:%M:%S").to_string())
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub struct HealthMonitor<T: Transport, C: Clock = SystemClock> {
    transport: T,
    clock: C,
    url: String,
}

impl<T: Transport> HealthMonitor<T, SystemClock> {
    pub fn from_config(transport: T, config: &DashboardConfig) -> Result<Self, DashboardError> {
        Ok(Self::new(transport, SystemClock, config.health_url()?))
    }
}

impl<T: Transport, C: Clock> HealthMonitor<T, C> {
    pub fn new(transport: T, clock: C, url: impl Into<String>) -> Self {
        Self {
            transport,
            clock,
            url: url.into(),
        }
    }

    /// Probe the endpoint once. Any 2xx is connected; everything else,
    /// including transport failures, is disconnected.
    pub async fn probe(&self) -> ApiStatus {
        match self.transport.get(&self.url).await {
            Ok(response) if response.is_success() => ApiStatus::Connected,
            Ok(response) => {
                warn!("Health check returned {} from {}", response.status, self.url);
                ApiStatus::Disconnected
            }
            Err(e) => {
                warn!("Health check failed: {}", e);
                ApiStatus::Disconnected
            }
        }
    }

    /// Probe and fold the outcome into `previous`.
    pub async fn check(&self, previous: HealthSnapshot) -> HealthSnapshot {
        let status = self.probe().await;
        previous.complete(status, self.clock.now())
    }
}

/// Something that can fire a callback on a fixed period, like `setInterval`.
pub trait IntervalTimer {
    type Handle;

    fn set_interval(
        &self,
        period: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<Self::Handle, DashboardError>;

    fn clear_interval(&self, handle: Self::Handle);
}

/// Runs a tick immediately and then on every period, keeping at most one
/// interval registered with the timer.
pub struct Poller<I: IntervalTimer> {
    timer: I,
    period: Duration,
    active: Option<I::Handle>,
}

impl<I: IntervalTimer> Poller<I> {
    pub fn new(timer: I, period: Duration) -> Self {
        Self {
            timer,
            period,
            active: None,
        }
    }

    pub fn start<F>(&mut self, tick: F) -> Result<(), DashboardError>
    where
        F: Fn() + 'static,
    {
        self.stop();
        let tick: Rc<dyn Fn()> = Rc::new(tick);
        tick();
        let handle = self.timer.set_interval(self.period, tick)?;
        self.active = Some(handle);
        info!("Health polling every {} ms", self.period.as_millis());
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            self.timer.clear_interval(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

impl<I: IntervalTimer> Drop for Poller<I> {
    fn drop(&mut self) {
        self.stop();
    }
}
