//! Shared application state around the countdown

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    effects::EffectType,
    timer::{Countdown, EffectDispatcher, Ticker, TimerSnapshot},
};

/// Application state shared by the input, ticker, display and effect tasks
#[derive(Debug)]
pub struct AppState {
    /// The single countdown instance; every mutation goes through here
    pub countdown: Arc<Mutex<Countdown>>,
    /// Effect presented when a countdown finishes
    pub effect_type: Arc<Mutex<EffectType>>,
    pub start_time: Instant,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for display refreshes
    pub snapshot_tx: watch::Sender<TimerSnapshot>,
}

impl AppState {
    pub fn new(
        default_seconds: u64,
        effect_type: EffectType,
        ticker: impl Ticker + 'static,
        dispatcher: impl EffectDispatcher + 'static,
    ) -> Self {
        let countdown = Countdown::new(default_seconds, ticker, dispatcher);
        let (snapshot_tx, _) = watch::channel(countdown.snapshot());

        Self {
            countdown: Arc::new(Mutex::new(countdown)),
            effect_type: Arc::new(Mutex::new(effect_type)),
            start_time: Instant::now(),
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            snapshot_tx,
        }
    }

    /// Apply an operation to the countdown and publish the resulting snapshot
    /// when it took effect
    pub fn update_countdown<F>(&self, action: &str, operation: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut Countdown) -> bool,
    {
        let mut countdown = self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?;

        let applied = operation(&mut *countdown);
        let snapshot = countdown.snapshot();
        if !applied {
            return Ok(snapshot);
        }

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        // Publish before releasing the countdown so snapshots reach the
        // channel in the order the changes were made
        self.snapshot_tx.send_replace(snapshot.clone());
        drop(countdown);
        Ok(snapshot)
    }

    pub fn press_digit(&self, digit: u8) -> Result<TimerSnapshot, String> {
        self.update_countdown("digit", |countdown| countdown.press_digit(digit))
    }

    pub fn start(&self) -> Result<TimerSnapshot, String> {
        self.update_countdown("start", Countdown::start)
    }

    pub fn pause(&self) -> Result<TimerSnapshot, String> {
        self.update_countdown("pause", Countdown::pause)
    }

    pub fn toggle(&self) -> Result<TimerSnapshot, String> {
        self.update_countdown("toggle", Countdown::toggle)
    }

    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        self.update_countdown("reset", Countdown::reset)
    }

    pub fn tick(&self) -> Result<TimerSnapshot, String> {
        self.update_countdown("tick", Countdown::tick)
    }

    /// Get current countdown snapshot
    pub fn get_snapshot(&self) -> Result<TimerSnapshot, String> {
        self.countdown.lock()
            .map(|countdown| countdown.snapshot())
            .map_err(|e| format!("Failed to lock countdown: {}", e))
    }

    /// Subscribe to display refreshes
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn get_effect_type(&self) -> Result<EffectType, String> {
        self.effect_type.lock()
            .map(|effect| *effect)
            .map_err(|e| format!("Failed to lock effect type: {}", e))
    }

    pub fn set_effect_type(&self, effect: EffectType) -> Result<(), String> {
        let mut current = self.effect_type.lock()
            .map_err(|e| format!("Failed to lock effect type: {}", e))?;

        info!("Effect type changed: {} -> {}", *current, effect);
        *current = effect;
        Ok(())
    }

    /// Switch to the next effect type and return it
    pub fn cycle_effect_type(&self) -> Result<EffectType, String> {
        let next = self.get_effect_type()?.next();
        self.set_effect_type(next)?;
        Ok(next)
    }

    /// Session length as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Stop any running countdown before the process exits
    pub fn shutdown(&self) {
        match self.pause() {
            Ok(snapshot) => info!("Countdown left at {} on shutdown", snapshot.display),
            Err(e) => warn!("Failed to pause countdown on shutdown: {}", e),
        }

        match self.get_last_action() {
            (Some(action), Some(time)) => info!("Last action: {} at {}", action, time.to_rfc3339()),
            _ => info!("No timer actions this session"),
        }
    }
}
