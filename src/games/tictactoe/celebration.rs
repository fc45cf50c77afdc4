//! End-of-game celebration controller.
//!
//! A two-phase state machine (`Idle`, `Celebrating`) driven by the winner the
//! game reports. Arming spawns a timer task that sends a
//! [`CelebrationExpired`] message tagged with the arming epoch; expiries from
//! an earlier arming are ignored, and the pending task is aborted whenever the
//! celebration ends early or the controller is dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::types::Player;

/// How long the celebration stays up after a win.
pub const DEFAULT_CELEBRATION_DURATION: Duration = Duration::from_millis(3000);

/// Phase of the celebration state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationPhase {
    /// Nothing to show.
    Idle,
    /// A win was just detected; the effect is visible.
    Celebrating(Player),
}

/// Message sent by the timer task when the display window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationExpired {
    epoch: u64,
}

/// Visible transition reported to the owner so it can mount or drop the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationChange {
    /// The effect should appear.
    Started(Player),
    /// The effect should disappear.
    Ended,
}

/// Edge-triggered celebration controller.
#[derive(Debug)]
pub struct Celebration {
    duration: Duration,
    phase: CelebrationPhase,
    last_winner: Option<Player>,
    epoch: u64,
    timer: Option<JoinHandle<()>>,
    expiry_tx: mpsc::UnboundedSender<CelebrationExpired>,
}

impl Celebration {
    /// Creates an idle controller and the receiver its expiries arrive on.
    #[instrument]
    pub fn new(duration: Duration) -> (Self, mpsc::UnboundedReceiver<CelebrationExpired>) {
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        let controller = Self {
            duration,
            phase: CelebrationPhase::Idle,
            last_winner: None,
            epoch: 0,
            timer: None,
            expiry_tx,
        };
        (controller, expiry_rx)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> CelebrationPhase {
        self.phase
    }

    /// Returns true while the effect should be visible.
    pub fn is_celebrating(&self) -> bool {
        matches!(self.phase, CelebrationPhase::Celebrating(_))
    }

    /// Returns the display window length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Feeds the current winner after every game mutation.
    ///
    /// Only transitions matter: a winner appearing (or changing) arms the
    /// timer, a winner disappearing ends any celebration at once. Calling
    /// this repeatedly with the same winner does nothing.
    ///
    /// Outside a tokio runtime the celebration still starts, but no timer
    /// is scheduled; it then lasts until the winner is cleared.
    #[instrument(skip(self), fields(last = ?self.last_winner))]
    pub fn observe(&mut self, winner: Option<Player>) -> Option<CelebrationChange> {
        let previous = std::mem::replace(&mut self.last_winner, winner);
        match (previous, winner) {
            (prev, Some(w)) if prev != Some(w) => {
                self.arm(w);
                Some(CelebrationChange::Started(w))
            }
            (Some(_), None) => self.disarm(),
            _ => None,
        }
    }

    /// Handles a timer message; stale messages from an older arming are dropped.
    #[instrument(skip(self), fields(current_epoch = self.epoch))]
    pub fn expire(&mut self, expired: CelebrationExpired) -> Option<CelebrationChange> {
        if expired.epoch != self.epoch {
            debug!(stale_epoch = expired.epoch, "Ignoring stale celebration expiry");
            return None;
        }
        self.timer = None;
        self.end()
    }

    fn arm(&mut self, winner: Player) {
        self.cancel_timer();
        self.epoch += 1;
        self.phase = CelebrationPhase::Celebrating(winner);

        let epoch = self.epoch;
        let duration = self.duration;
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(%winner, epoch, "No tokio runtime, celebration will not expire on its own");
            return;
        };
        let tx = self.expiry_tx.clone();
        self.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            // The receiver is gone once the owner is torn down.
            let _ = tx.send(CelebrationExpired { epoch });
        }));
        info!(%winner, epoch, ?duration, "Celebration started");
    }

    fn disarm(&mut self) -> Option<CelebrationChange> {
        self.cancel_timer();
        // Invalidate anything already sitting in the channel.
        self.epoch += 1;
        self.end()
    }

    fn end(&mut self) -> Option<CelebrationChange> {
        if self.is_celebrating() {
            self.phase = CelebrationPhase::Idle;
            info!(epoch = self.epoch, "Celebration ended");
            Some(CelebrationChange::Ended)
        } else {
            None
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!("Cancelling celebration timer");
            timer.abort();
        }
    }
}

impl Drop for Celebration {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(3000);

    #[tokio::test(start_paused = true)]
    async fn test_win_arms_once() {
        let (mut c, _rx) = Celebration::new(WINDOW);
        assert_eq!(c.observe(None), None);
        assert_eq!(c.observe(Some(Player::X)), Some(CelebrationChange::Started(Player::X)));
        assert_eq!(c.observe(Some(Player::X)), None);
        assert_eq!(c.phase(), CelebrationPhase::Celebrating(Player::X));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires_after_window() {
        let (mut c, mut rx) = Celebration::new(WINDOW);
        c.observe(Some(Player::O));

        tokio::time::sleep(WINDOW - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());
        assert!(c.is_celebrating());

        let expired = rx.recv().await.unwrap();
        assert_eq!(c.expire(expired), Some(CelebrationChange::Ended));
        assert_eq!(c.phase(), CelebrationPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_winner_persisting_after_expiry_does_not_rearm() {
        let (mut c, mut rx) = Celebration::new(WINDOW);
        c.observe(Some(Player::X));
        let expired = rx.recv().await.unwrap();
        c.expire(expired);
        assert_eq!(c.observe(Some(Player::X)), None);
        assert!(!c.is_celebrating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_winner_ends_early_and_cancels_timer() {
        let (mut c, mut rx) = Celebration::new(WINDOW);
        c.observe(Some(Player::X));
        assert_eq!(c.observe(None), Some(CelebrationChange::Ended));
        assert!(!c.is_celebrating());

        tokio::time::sleep(WINDOW * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_expiry_ignored() {
        let (mut c, _rx) = Celebration::new(WINDOW);
        c.observe(Some(Player::X));
        let stale = CelebrationExpired { epoch: c.epoch };
        c.observe(None);
        c.observe(Some(Player::O));
        assert_eq!(c.expire(stale), None);
        assert_eq!(c.phase(), CelebrationPhase::Celebrating(Player::O));
    }

    #[test]
    fn test_arms_without_runtime() {
        let (mut c, mut rx) = Celebration::new(WINDOW);
        assert_eq!(c.observe(Some(Player::X)), Some(CelebrationChange::Started(Player::X)));
        assert!(c.is_celebrating());
        assert!(c.timer.is_none());
        assert!(rx.try_recv().is_err());

        assert_eq!(c.observe(None), Some(CelebrationChange::Ended));
        assert!(!c.is_celebrating());
    }

    #[test]
    fn test_draw_never_arms() {
        let (mut c, _rx) = Celebration::new(WINDOW);
        assert_eq!(c.observe(None), None);
        assert_eq!(c.phase(), CelebrationPhase::Idle);
    }
}
