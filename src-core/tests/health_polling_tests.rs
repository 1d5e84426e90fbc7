use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use exodetect_core::health::{ApiStatus, Clock, HealthMonitor, HealthSnapshot, IntervalTimer, Poller};
use exodetect_core::transport::{HttpResponse, ReqwestTransport, Transport, Upload};
use exodetect_core::DashboardError;
use tokio::task::{spawn_local, JoinHandle, LocalSet};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Health endpoint that plays back a scripted sequence of outcomes.
/// `Some(status)` is an HTTP reply, `None` a network failure.
struct ScriptedEndpoint {
    outcomes: RefCell<VecDeque<Option<u16>>>,
}

impl ScriptedEndpoint {
    fn new(outcomes: &[Option<u16>]) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.iter().copied().collect()),
        }
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedEndpoint {
    async fn get(&self, url: &str) -> Result<HttpResponse, DashboardError> {
        assert!(url.ends_with("/health"), "unexpected url {}", url);
        match self.outcomes.borrow_mut().pop_front().expect("script exhausted") {
            Some(status) => Ok(HttpResponse { status, body: "{\"status\":\"healthy\"}".to_string() }),
            None => Err(DashboardError::Transport("connection refused".to_string())),
        }
    }

    async fn post_multipart(&self, _: &str, _: &str, _: &Upload) -> Result<HttpResponse, DashboardError> {
        unreachable!("health monitor never uploads")
    }
}

/// Clock that advances one minute per reading.
struct SteppingClock {
    start: DateTime<Local>,
    reads: Cell<i64>,
}

impl SteppingClock {
    fn new() -> Self {
        Self {
            start: Local.with_ymd_and_hms(2025, 10, 4, 9, 0, 0).unwrap(),
            reads: Cell::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let n = self.reads.get();
        self.reads.set(n + 1);
        self.start + chrono::Duration::minutes(n)
    }
}

#[derive(Default)]
struct TimerState {
    next_id: u32,
    registered: BTreeMap<u32, (Duration, Rc<dyn Fn()>)>,
    max_outstanding: usize,
}

/// In-memory stand-in for `setInterval`; ticks fire only when the test says so.
#[derive(Clone, Default)]
struct ManualInterval {
    state: Rc<RefCell<TimerState>>,
}

impl ManualInterval {
    fn outstanding(&self) -> usize {
        self.state.borrow().registered.len()
    }

    fn max_outstanding(&self) -> usize {
        self.state.borrow().max_outstanding
    }

    fn fire(&self) {
        let ticks: Vec<Rc<dyn Fn()>> = self
            .state
            .borrow()
            .registered
            .values()
            .map(|(_, tick)| tick.clone())
            .collect();
        for tick in ticks {
            tick();
        }
    }
}

impl IntervalTimer for ManualInterval {
    type Handle = u32;

    fn set_interval(&self, period: Duration, tick: Rc<dyn Fn()>) -> Result<u32, DashboardError> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.registered.insert(id, (period, tick));
        state.max_outstanding = state.max_outstanding.max(state.registered.len());
        Ok(id)
    }

    fn clear_interval(&self, handle: u32) {
        self.state.borrow_mut().registered.remove(&handle);
    }
}

#[tokio::test]
async fn test_status_tracks_alternating_endpoint() {
    let script = [Some(200), Some(503), Some(204), None, Some(200)];
    let monitor = HealthMonitor::new(
        ScriptedEndpoint::new(&script),
        SteppingClock::new(),
        "http://localhost:8000/health",
    );
    let timer = ManualInterval::default();
    let mut poller = Poller::new(timer.clone(), Duration::from_millis(30_000));

    let due = Rc::new(Cell::new(0usize));
    let due_in_tick = due.clone();
    poller.start(move || due_in_tick.set(due_in_tick.get() + 1)).unwrap();
    assert_eq!(due.get(), 1, "first check runs immediately");

    let expected = [
        ApiStatus::Connected,
        ApiStatus::Disconnected,
        ApiStatus::Connected,
        ApiStatus::Disconnected,
        ApiStatus::Connected,
    ];
    let mut snapshot = HealthSnapshot::default();
    for (cycle, want) in expected.iter().enumerate() {
        if cycle > 0 {
            timer.fire();
        }
        assert_eq!(due.get(), cycle + 1);
        snapshot = snapshot.begin_check();
        assert_eq!(snapshot.status, ApiStatus::Checking);

        snapshot = monitor.check(snapshot).await;
        assert_eq!(snapshot.status, *want, "cycle {}", cycle);
        assert_eq!(timer.outstanding(), 1);
    }

    assert_eq!(snapshot.last_check_label().as_deref(), Some("09:04:00"));
    assert_eq!(timer.max_outstanding(), 1);
}

/// Await every check the ticks have queued so far.
async fn settle(in_flight: &RefCell<Vec<JoinHandle<()>>>) {
    let pending: Vec<_> = in_flight.borrow_mut().drain(..).collect();
    for handle in pending {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_tick_queues_check_and_updates_snapshot() {
    LocalSet::new()
        .run_until(async {
            let monitor = Rc::new(HealthMonitor::new(
                ScriptedEndpoint::new(&[Some(200), None, Some(204)]),
                SteppingClock::new(),
                "http://localhost:8000/health",
            ));
            let snapshot = Rc::new(Cell::new(HealthSnapshot::default()));
            let in_flight = Rc::new(RefCell::new(Vec::new()));
            let timer = ManualInterval::default();
            let mut poller = Poller::new(timer.clone(), Duration::from_millis(30_000));

            let (m, s, queue) = (monitor.clone(), snapshot.clone(), in_flight.clone());
            poller
                .start(move || {
                    let previous = s.get();
                    s.set(previous.begin_check());
                    let (m, s) = (m.clone(), s.clone());
                    queue.borrow_mut().push(spawn_local(async move {
                        s.set(m.check(previous).await);
                    }));
                })
                .unwrap();

            assert_eq!(snapshot.get().status, ApiStatus::Checking);
            assert_eq!(in_flight.borrow().len(), 1, "first check is queued on start");
            settle(&in_flight).await;
            assert_eq!(snapshot.get().status, ApiStatus::Connected);
            assert_eq!(snapshot.get().last_check_label().as_deref(), Some("09:00:00"));

            timer.fire();
            assert_eq!(snapshot.get().status, ApiStatus::Checking);
            assert_eq!(
                snapshot.get().last_check_label().as_deref(),
                Some("09:00:00"),
                "previous time stays visible while checking"
            );
            settle(&in_flight).await;
            assert_eq!(snapshot.get().status, ApiStatus::Disconnected);

            timer.fire();
            settle(&in_flight).await;
            assert_eq!(snapshot.get().status, ApiStatus::Connected);
            assert_eq!(snapshot.get().last_check_label().as_deref(), Some("09:02:00"));
            assert_eq!(timer.max_outstanding(), 1);
        })
        .await;
}

#[test]
fn test_restart_replaces_interval() {
    let timer = ManualInterval::default();
    let mut poller = Poller::new(timer.clone(), Duration::from_secs(30));
    let ticks = Rc::new(Cell::new(0));

    for _ in 0..3 {
        let t = ticks.clone();
        poller.start(move || t.set(t.get() + 1)).unwrap();
        assert_eq!(timer.outstanding(), 1);
    }
    assert_eq!(timer.max_outstanding(), 1);
    assert_eq!(ticks.get(), 3);

    timer.fire();
    assert_eq!(ticks.get(), 4, "only the latest interval fires");
}

#[test]
fn test_stop_and_drop_clear_interval() {
    let timer = ManualInterval::default();
    let mut poller = Poller::new(timer.clone(), Duration::from_secs(30));
    poller.start(|| {}).unwrap();
    assert!(poller.is_running());

    poller.stop();
    assert!(!poller.is_running());
    assert_eq!(timer.outstanding(), 0);

    poller.start(|| {}).unwrap();
    assert_eq!(timer.outstanding(), 1);
    drop(poller);
    assert_eq!(timer.outstanding(), 0, "teardown must clear the timer");
}

#[test]
fn test_interval_uses_configured_period() {
    let timer = ManualInterval::default();
    let mut poller = Poller::new(timer.clone(), Duration::from_millis(30_000));
    poller.start(|| {}).unwrap();

    let state = timer.state.borrow();
    let (period, _) = state.registered.values().next().unwrap();
    assert_eq!(*period, Duration::from_millis(30_000));
}

#[tokio::test]
async fn test_reqwest_health_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":\"healthy\"}"))
        .mount(&server)
        .await;

    let up = HealthMonitor::new(
        ReqwestTransport::new(),
        SteppingClock::new(),
        format!("{}/health", server.uri()),
    );
    assert_eq!(up.probe().await, ApiStatus::Connected);

    let wrong_path = HealthMonitor::new(
        ReqwestTransport::new(),
        SteppingClock::new(),
        format!("{}/healthz", server.uri()),
    );
    assert_eq!(wrong_path.probe().await, ApiStatus::Disconnected);
}
