//! 1 Hz tick source for the countdown

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::{state::AppState, timer::Ticker};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Ticker handle backed by a watch channel the tick task listens on
#[derive(Debug)]
pub struct WatchTicker {
    armed_tx: watch::Sender<bool>,
}

impl WatchTicker {
    /// Create a disarmed ticker and the receiver for [`countdown_ticker_task`]
    pub fn channel() -> (Self, watch::Receiver<bool>) {
        let (armed_tx, armed_rx) = watch::channel(false);
        (Self { armed_tx }, armed_rx)
    }

    fn set(&self, armed: bool) {
        self.armed_tx.send_if_modified(|current| {
            if *current == armed {
                false
            } else {
                *current = armed;
                true
            }
        });
    }
}

impl Ticker for WatchTicker {
    fn arm(&mut self) {
        self.set(true);
    }

    fn disarm(&mut self) {
        self.set(false);
    }
}

/// Background task that ticks the countdown once per second while armed.
///
/// Each arming starts a fresh interval, so the first tick lands a full period
/// after start or resume. Any change to the armed flag drops the current
/// interval before another tick can be delivered.
pub async fn countdown_ticker_task(state: Arc<AppState>, mut armed_rx: watch::Receiver<bool>) {
    info!("Starting countdown ticker task");

    loop {
        if !*armed_rx.borrow_and_update() {
            if armed_rx.changed().await.is_err() {
                debug!("Ticker handle dropped, stopping ticker task");
                return;
            }
            continue;
        }

        debug!("Ticker armed");
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to tick countdown: {}", e);
                    }
                }

                changed = armed_rx.changed() => {
                    if changed.is_err() {
                        debug!("Ticker handle dropped, stopping ticker task");
                        return;
                    }
                    debug!("Ticker arming changed, dropping interval");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        effects::{ChannelDispatcher, EffectRequest, EffectType},
        timer::Phase,
    };
    use tokio::{sync::mpsc::UnboundedReceiver, time::sleep};

    fn spawn_timer(default_seconds: u64) -> (Arc<AppState>, UnboundedReceiver<EffectRequest>) {
        let (ticker, armed_rx) = WatchTicker::channel();
        let (dispatcher, effect_rx) = ChannelDispatcher::channel();
        let state = Arc::new(AppState::new(default_seconds, EffectType::Notifier, ticker, dispatcher));
        tokio::spawn(countdown_ticker_task(Arc::clone(&state), armed_rx));
        (state, effect_rx)
    }

    #[test]
    fn test_arm_twice_notifies_once() {
        let (mut ticker, mut rx) = WatchTicker::channel();
        ticker.arm();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        ticker.arm();
        assert!(!rx.has_changed().unwrap());

        ticker.disarm();
        assert!(!*rx.borrow_and_update());
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_runs_to_completion() {
        let (state, mut effect_rx) = spawn_timer(3);
        state.start().unwrap();

        sleep(Duration::from_millis(3500)).await;

        let snapshot = state.get_snapshot().unwrap();
        assert_eq!(snapshot.phase, Phase::Finished);
        assert_eq!(snapshot.time_left, 0);

        let request = effect_rx.recv().await.unwrap();
        assert_eq!(request.total_seconds, 3);

        sleep(Duration::from_secs(5)).await;
        assert!(effect_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_ticks() {
        let (state, _effect_rx) = spawn_timer(10);
        state.start().unwrap();

        sleep(Duration::from_millis(2500)).await;
        assert_eq!(state.get_snapshot().unwrap().time_left, 8);

        state.pause().unwrap();
        sleep(Duration::from_secs(5)).await;
        assert_eq!(state.get_snapshot().unwrap().time_left, 8);
        assert_eq!(state.get_snapshot().unwrap().phase, Phase::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_waits_a_full_period() {
        let (state, _effect_rx) = spawn_timer(10);
        state.start().unwrap();
        sleep(Duration::from_millis(1500)).await;
        state.pause().unwrap();
        state.start().unwrap();

        sleep(Duration::from_millis(700)).await;
        assert_eq!(state.get_snapshot().unwrap().time_left, 9);

        sleep(Duration::from_millis(500)).await;
        assert_eq!(state.get_snapshot().unwrap().time_left, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_while_running_stops_ticks() {
        let (state, _effect_rx) = spawn_timer(5);
        state.start().unwrap();
        sleep(Duration::from_millis(1500)).await;

        state.reset().unwrap();
        sleep(Duration::from_secs(10)).await;

        let snapshot = state.get_snapshot().unwrap();
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.time_left, 5);
    }
}
