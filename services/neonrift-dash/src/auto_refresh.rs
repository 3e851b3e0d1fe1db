//! Auto-refresh controller
//!
//! Two states, Disabled (initial) and Enabled. The state value owns the
//! recurring timer, so `timer.is_some() == enabled` holds by construction.
//! Every transition releases the existing timer before it may start a new
//! one, which keeps at most one timer alive.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::poller::RefreshAction;
use crate::view::ViewHandle;

/// Shortest period a timer will tick at
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Owned handle of a running recurring timer.
///
/// Dropping the handle stops future ticks. Actions already started by a
/// tick are detached and run to completion.
#[derive(Debug)]
pub struct TimerRef {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl TimerRef {
    /// Start ticking every `period`, first tick one full period from now.
    ///
    /// A zero period is raised to one millisecond.
    pub fn start(period: Duration, action: Arc<dyn RefreshAction>) -> Self {
        let period = period.max(MIN_PERIOD);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!("Auto-refresh timer cancelled");
                        break;
                    }
                    _ = ticks.tick() => {}
                }

                let action = Arc::clone(&action);
                tokio::spawn(async move {
                    action.run().await;
                });
            }
        });

        tracing::debug!("Auto-refresh timer started ({:?})", period);
        Self { cancel, handle }
    }

    /// Stop future ticks
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerRef {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}

/// Enabled flag plus the timer it implies
#[derive(Debug, Default)]
pub struct AutoRefreshState {
    enabled: bool,
    timer: Option<TimerRef>,
}

impl AutoRefreshState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }
}

/// What an enabled timer runs, how often, and where state is reflected
#[derive(Clone)]
pub struct AutoRefreshContext {
    pub interval: Duration,
    pub action: Arc<dyn RefreshAction>,
    pub view: ViewHandle,
}

impl std::fmt::Debug for AutoRefreshContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoRefreshContext")
            .field("interval", &self.interval)
            .finish()
    }
}

/// Move to `desired`, releasing any existing timer first
pub fn set_auto_refresh(
    mut state: AutoRefreshState,
    desired: bool,
    ctx: &AutoRefreshContext,
) -> AutoRefreshState {
    let note = if desired {
        interval_note(ctx.interval)
    } else {
        String::new()
    };
    ctx.view.set_auto(desired, note);

    if let Some(timer) = state.timer.take() {
        timer.cancel();
    }

    if desired {
        state.timer = Some(TimerRef::start(ctx.interval, Arc::clone(&ctx.action)));
    }
    state.enabled = desired;

    tracing::debug!("Auto refresh {}", if desired { "on" } else { "off" });
    state
}

pub fn toggle_auto_refresh(
    state: AutoRefreshState,
    ctx: &AutoRefreshContext,
) -> AutoRefreshState {
    let desired = !state.is_enabled();
    set_auto_refresh(state, desired, ctx)
}

/// Note shown next to the toggle while enabled, e.g. `(every 2s)`
pub fn interval_note(interval: Duration) -> String {
    let ms = interval.as_millis();
    if ms % 1000 == 0 {
        format!("(every {}s)", ms / 1000)
    } else {
        format!("(every {}ms)", ms)
    }
}

/// Sole owner of the auto-refresh state and its timer
#[derive(Debug)]
pub struct AutoRefreshController {
    state: AutoRefreshState,
    ctx: AutoRefreshContext,
}

impl AutoRefreshController {
    pub fn new(ctx: AutoRefreshContext) -> Self {
        Self {
            state: AutoRefreshState::default(),
            ctx,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn has_timer(&self) -> bool {
        self.state.has_timer()
    }

    pub fn set(&mut self, desired: bool) {
        let state = std::mem::take(&mut self.state);
        self.state = set_auto_refresh(state, desired, &self.ctx);
    }

    pub fn toggle(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = toggle_auto_refresh(state, &self.ctx);
    }

    /// Release the timer without touching the page
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.state.timer.take() {
            timer.cancel();
        }
        self.state.enabled = false;
    }
}
