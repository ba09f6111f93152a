//! Simulation worker for timed panel operations.
//!
//! The UI thread never sleeps: every simulated operation is sent here, waits
//! out its fixed delay on a timer thread, and reports back through the event
//! channel. Delays are injectable so worker tests run in milliseconds.

use crate::backend::{MountId, SimCmd, SimEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tabdeck_core::constants;
use tabdeck_core::panels::build::BuildKind;
use tabdeck_core::panels::cache::CacheRecord;
use tabdeck_core::panels::fetch::FetchRecord;
use tabdeck_core::panels::transition::TransitionRecord;
use tracing::debug;

/// Granularity of stale-mount checks during a delay.
const SLEEP_SLICE: Duration = Duration::from_millis(25);

/// Fixed delays for every simulated operation.
#[derive(Debug, Clone)]
pub struct SimDelays {
    pub fetch: Duration,
    pub cache_fetch: Duration,
    pub transition_load: Duration,
    pub quick_form: Duration,
    pub quick_form_reset: Duration,
    pub contact_submit: Duration,
    pub todo_add: Duration,
    pub todo_mutate: Duration,
    pub profile_update: Duration,
    pub build_tick: Duration,
    pub webpack_build: Duration,
    pub turbopack_build: Duration,
}

impl Default for SimDelays {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(constants::FETCH_DELAY_MS),
            cache_fetch: Duration::from_millis(constants::CACHE_FETCH_DELAY_MS),
            transition_load: Duration::from_millis(constants::TRANSITION_LOAD_DELAY_MS),
            quick_form: Duration::from_millis(constants::QUICK_FORM_DELAY_MS),
            quick_form_reset: Duration::from_millis(constants::QUICK_FORM_RESET_DELAY_MS),
            contact_submit: Duration::from_millis(constants::CONTACT_SUBMIT_DELAY_MS),
            todo_add: Duration::from_millis(constants::TODO_ADD_DELAY_MS),
            todo_mutate: Duration::from_millis(constants::TODO_MUTATE_DELAY_MS),
            profile_update: Duration::from_millis(constants::PROFILE_UPDATE_DELAY_MS),
            build_tick: Duration::from_millis(constants::BUILD_TICK_MS),
            webpack_build: Duration::from_millis(constants::WEBPACK_BUILD_MS),
            turbopack_build: Duration::from_millis(constants::TURBOPACK_BUILD_MS),
        }
    }
}

impl SimDelays {
    /// Millisecond-scale delays for tests.
    pub fn fast() -> Self {
        let quick = Duration::from_millis(2);
        Self {
            fetch: quick,
            cache_fetch: quick,
            transition_load: quick,
            quick_form: quick,
            quick_form_reset: quick,
            contact_submit: quick,
            todo_add: quick,
            todo_mutate: quick,
            profile_update: quick,
            build_tick: Duration::from_millis(1),
            webpack_build: Duration::from_millis(5),
            turbopack_build: Duration::from_millis(5),
        }
    }

    fn build_duration(&self, kind: BuildKind) -> Duration {
        match kind {
            BuildKind::Webpack => self.webpack_build,
            BuildKind::Turbopack => self.turbopack_build,
        }
    }
}

/// Handle for sending commands to, and receiving events from, the worker.
pub struct SimHandle {
    pub cmd_tx: Sender<SimCmd>,
    pub evt_rx: Receiver<SimEvent>,
    current_mount: Arc<AtomicU64>,
}

impl SimHandle {
    /// Record the active mount generation.
    ///
    /// Timers started under an older generation abort early and their events
    /// are suppressed.
    pub fn set_mount(&self, mount: MountId) {
        self.current_mount.store(mount, Ordering::SeqCst);
    }
}

/// Spawn the simulation worker.
///
/// The dispatcher thread receives commands and runs each operation on its own
/// timer thread, so independently pending operations within a panel do not
/// serialize behind each other.
///
/// # Arguments
/// - `delays`: Fixed per-operation delays.
///
/// # Returns
/// A [`SimHandle`] wired to the worker. Dropping the handle stops the
/// dispatcher once queued commands drain.
pub fn spawn_sim(delays: SimDelays) -> SimHandle {
    let (cmd_tx, cmd_rx) = unbounded::<SimCmd>();
    let (evt_tx, evt_rx) = unbounded::<SimEvent>();
    let current_mount = Arc::new(AtomicU64::new(0));

    let mount_for_worker = current_mount.clone();
    thread::Builder::new()
        .name("tabdeck-sim".into())
        .spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                let evt_tx = evt_tx.clone();
                let delays = delays.clone();
                let current = mount_for_worker.clone();
                thread::spawn(move || run_operation(cmd, &delays, &current, &evt_tx));
            }
        })
        .expect("failed to spawn simulation worker");

    SimHandle {
        cmd_tx,
        evt_rx,
        current_mount,
    }
}

/// Sleep `duration`, waking periodically to check for a stale mount.
///
/// # Returns
/// `true` when the full delay elapsed with the mount still current.
fn wait_while_current(current: &AtomicU64, mount: MountId, duration: Duration) -> bool {
    let mut remaining = duration;
    while remaining > Duration::ZERO {
        if current.load(Ordering::SeqCst) != mount {
            return false;
        }
        let slice = remaining.min(SLEEP_SLICE);
        thread::sleep(slice);
        remaining = remaining.saturating_sub(slice);
    }
    current.load(Ordering::SeqCst) == mount
}

fn send_if_current(
    current: &AtomicU64,
    mount: MountId,
    evt_tx: &Sender<SimEvent>,
    event: SimEvent,
) -> bool {
    if current.load(Ordering::SeqCst) != mount {
        debug!("dropping event for stale mount {}: {:?}", mount, event);
        return false;
    }
    evt_tx.send(event).is_ok()
}

fn run_operation(cmd: SimCmd, delays: &SimDelays, current: &AtomicU64, evt_tx: &Sender<SimEvent>) {
    let mount = cmd.mount();
    match cmd {
        SimCmd::FetchData { .. } => {
            if wait_while_current(current, mount, delays.fetch) {
                let record = FetchRecord::mock();
                send_if_current(current, mount, evt_tx, SimEvent::FetchDone { mount, record });
            }
        }
        SimCmd::CacheFetch { strategy, .. } => {
            if wait_while_current(current, mount, delays.cache_fetch) {
                let record = CacheRecord::mock(strategy);
                send_if_current(current, mount, evt_tx, SimEvent::CacheDone { mount, record });
            }
        }
        SimCmd::LoadTransition { .. } => {
            if wait_while_current(current, mount, delays.transition_load) {
                let record = TransitionRecord::mock();
                send_if_current(
                    current,
                    mount,
                    evt_tx,
                    SimEvent::TransitionLoaded { mount, record },
                );
            }
        }
        SimCmd::SubmitQuickForm { submission, .. } => {
            if !wait_while_current(current, mount, delays.quick_form) {
                return;
            }
            if !send_if_current(
                current,
                mount,
                evt_tx,
                SimEvent::QuickFormDone { mount, submission },
            ) {
                return;
            }
            // Banner auto-reset rides on the same timer thread.
            if wait_while_current(current, mount, delays.quick_form_reset) {
                send_if_current(current, mount, evt_tx, SimEvent::QuickFormReset { mount });
            }
        }
        SimCmd::SubmitContact { input, .. } => {
            if wait_while_current(current, mount, delays.contact_submit) {
                send_if_current(current, mount, evt_tx, SimEvent::ContactDone { mount, input });
            }
        }
        SimCmd::AddTodo { text, .. } => {
            if wait_while_current(current, mount, delays.todo_add) {
                send_if_current(current, mount, evt_tx, SimEvent::TodoAdded { mount, text });
            }
        }
        SimCmd::ToggleTodo { id, .. } => {
            if wait_while_current(current, mount, delays.todo_mutate) {
                send_if_current(current, mount, evt_tx, SimEvent::TodoToggled { mount, id });
            }
        }
        SimCmd::DeleteTodo { id, .. } => {
            if wait_while_current(current, mount, delays.todo_mutate) {
                send_if_current(current, mount, evt_tx, SimEvent::TodoDeleted { mount, id });
            }
        }
        SimCmd::UpdateProfile { input, .. } => {
            if wait_while_current(current, mount, delays.profile_update) {
                send_if_current(
                    current,
                    mount,
                    evt_tx,
                    SimEvent::ProfileUpdated { mount, input },
                );
            }
        }
        SimCmd::StartBuild { kind, .. } => {
            let total = delays.build_duration(kind);
            let tick = delays.build_tick.max(Duration::from_millis(1));
            let mut elapsed = Duration::ZERO;
            while elapsed < total {
                if !wait_while_current(current, mount, tick) {
                    return;
                }
                elapsed += tick;
                let scaled = scale_elapsed(elapsed, total, kind.duration_ms());
                if !send_if_current(
                    current,
                    mount,
                    evt_tx,
                    SimEvent::BuildTick {
                        mount,
                        kind,
                        elapsed_ms: scaled,
                    },
                ) {
                    return;
                }
            }
            send_if_current(current, mount, evt_tx, SimEvent::BuildDone { mount, kind });
        }
    }
}

/// Map worker-side elapsed time onto the build's nominal duration.
///
/// With default delays this is the identity; with shortened test delays the
/// reported progress still spans the nominal range.
fn scale_elapsed(elapsed: Duration, total: Duration, nominal_ms: u64) -> u64 {
    if total.is_zero() {
        return nominal_ms;
    }
    let fraction = elapsed.as_secs_f64() / total.as_secs_f64();
    ((nominal_ms as f64) * fraction.min(1.0)).round() as u64
}

#[cfg(test)]
mod scale_tests {
    use super::scale_elapsed;
    use std::time::Duration;

    #[test]
    fn identity_when_total_matches_nominal() {
        let scaled = scale_elapsed(
            Duration::from_millis(1_500),
            Duration::from_millis(3_000),
            3_000,
        );
        assert_eq!(scaled, 1_500);
    }

    #[test]
    fn shortened_total_still_spans_nominal_range() {
        let scaled = scale_elapsed(Duration::from_millis(5), Duration::from_millis(5), 3_000);
        assert_eq!(scaled, 3_000);
    }
}
