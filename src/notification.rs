//! The "discount earned" toast.
//!
//! A correct answer shows the toast and arms a one-shot timer that hides it
//! again after [`DISMISS_DELAY`]. The timer runs as a tokio task that reports
//! back through a channel; the task handle lives in a guard that aborts it
//! when dropped, so dismissing, re-triggering or tearing the scheduler down
//! always cancels the pending expiry.

use std::io::{self, Write};
use std::time::Duration;

use log::debug;
use thiserror::Error;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use uuid::Uuid;

pub const DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// Best-effort audible cue played when the toast appears.
pub trait Chime {
    fn play(&mut self) -> io::Result<()>;
}

/// Rings the terminal bell.
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// No sound at all.
pub struct Silent;

impl Chime for Silent {
    fn play(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Message sent by an armed timer when its delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    token: Uuid,
}

pub type ExpirySender = mpsc::UnboundedSender<Expiry>;
pub type ExpiryReceiver = mpsc::UnboundedReceiver<Expiry>;

pub fn expiry_channel() -> (ExpirySender, ExpiryReceiver) {
    mpsc::unbounded_channel()
}

/// The scheduler was built outside a tokio runtime, so it has nowhere to
/// run its timers.
#[derive(Debug, Error)]
#[error("notification timers need a tokio runtime: {0}")]
pub struct NoRuntime(#[from] TryCurrentError);

/// Owns one pending timer task. Dropping it cancels the task.
struct TimerGuard {
    token: Uuid,
    task: JoinHandle<()>,
}

impl TimerGuard {
    fn arm(runtime: &Handle, delay: Duration, expiries: ExpirySender) -> Self {
        let token = Uuid::new_v4();
        let task = runtime.spawn(async move {
            time::sleep(delay).await;
            let _ = expiries.send(Expiry { token });
        });
        Self { token, task }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct NotificationScheduler {
    visible: bool,
    timer: Option<TimerGuard>,
    expiries: ExpirySender,
    chime: Box<dyn Chime>,
    runtime: Handle,
}

impl NotificationScheduler {
    /// Bind the scheduler to the tokio runtime it is created in. Timers are
    /// spawned there even if later calls happen outside that runtime.
    pub fn new(expiries: ExpirySender, chime: Box<dyn Chime>) -> Result<Self, NoRuntime> {
        Ok(Self {
            visible: false,
            timer: None,
            expiries,
            chime,
            runtime: Handle::try_current()?,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an automatic dismissal is pending.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Show the toast and (re)start the auto-dismiss timer.
    pub fn trigger(&mut self) {
        self.visible = true;
        // Replacing the guard aborts any timer still running.
        let expiries = self.expiries.clone();
        self.timer = Some(TimerGuard::arm(&self.runtime, DISMISS_DELAY, expiries));

        if let Err(err) = self.chime.play() {
            debug!("Notification chime failed: {}", err);
        }
    }

    /// Hide the toast and cancel the pending timer. Returns false if it was
    /// already hidden.
    pub fn dismiss(&mut self) -> bool {
        self.timer = None;
        std::mem::replace(&mut self.visible, false)
    }

    /// Apply a timer expiry. Expiries from cancelled or replaced timers are
    /// ignored; returns true only if the toast was hidden by this call.
    pub fn handle_expiry(&mut self, expiry: Expiry) -> bool {
        match &self.timer {
            Some(guard) if guard.token == expiry.token => {
                self.timer = None;
                self.visible = false;
                true
            }
            _ => {
                debug!("Ignoring stale notification expiry");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct CountingChime(Rc<Cell<usize>>);

    impl Chime for CountingChime {
        fn play(&mut self) -> io::Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    struct BrokenChime;

    impl Chime for BrokenChime {
        fn play(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no audio device"))
        }
    }

    fn scheduler() -> (NotificationScheduler, ExpiryReceiver) {
        let (tx, rx) = expiry_channel();
        (NotificationScheduler::new(tx, Box::new(Silent)).unwrap(), rx)
    }

    async fn wait_past_delay() {
        time::sleep(DISMISS_DELAY + Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_hides_after_delay() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.trigger();
        assert!(scheduler.is_visible());

        time::sleep(DISMISS_DELAY - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());
        assert!(scheduler.is_visible());

        wait_past_delay().await;
        let expiry = rx.try_recv().unwrap();
        assert!(scheduler.handle_expiry(expiry));
        assert!(!scheduler.is_visible());
        assert!(!scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_cancels_timer() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.trigger();
        assert!(scheduler.dismiss());
        assert!(!scheduler.is_armed());

        wait_past_delay().await;
        assert!(rx.try_recv().is_err());
        assert!(!scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_when_hidden_is_noop() {
        let (mut scheduler, mut rx) = scheduler();
        assert!(!scheduler.dismiss());
        assert!(!scheduler.dismiss());
        assert!(!scheduler.is_visible());
        assert!(!scheduler.is_armed());

        wait_past_delay().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_restarts_timer() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.trigger();
        time::sleep(Duration::from_millis(2000)).await;
        scheduler.trigger();

        // The first timer would have fired here.
        time::sleep(Duration::from_millis(1500)).await;
        assert!(rx.try_recv().is_err());
        assert!(scheduler.is_visible());

        time::sleep(Duration::from_millis(1501)).await;
        let expiry = rx.try_recv().unwrap();
        assert!(rx.try_recv().is_err());
        assert!(scheduler.handle_expiry(expiry));
        assert!(!scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_expiry_is_ignored() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.trigger();
        wait_past_delay().await;
        let stale = rx.try_recv().unwrap();

        // Re-armed before the queued expiry was processed.
        scheduler.trigger();
        assert!(!scheduler.handle_expiry(stale));
        assert!(scheduler.is_visible());
        assert!(scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_chime_plays_on_trigger() {
        let plays = Rc::new(Cell::new(0));
        let (tx, _rx) = expiry_channel();
        let chime = Box::new(CountingChime(plays.clone()));
        let mut scheduler = NotificationScheduler::new(tx, chime).unwrap();
        scheduler.trigger();
        scheduler.trigger();
        assert_eq!(plays.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chime_failure_is_swallowed() {
        let (tx, _rx) = expiry_channel();
        let mut scheduler = NotificationScheduler::new(tx, Box::new(BrokenChime)).unwrap();
        scheduler.trigger();
        assert!(scheduler.is_visible());
        assert!(scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.trigger();
        drop(scheduler);

        wait_past_delay().await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_new_requires_runtime() {
        let (tx, _rx) = expiry_channel();
        assert!(NotificationScheduler::new(tx, Box::new(Silent)).is_err());
    }
}
