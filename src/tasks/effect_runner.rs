//! Effect runner background task

use std::{
    io::{self, Write},
    sync::Arc,
};
use tokio::{sync::mpsc, time::sleep};
use tracing::{debug, info, warn};

use crate::{
    effects::{completion_message, EffectRequest, EffectType},
    state::AppState,
};

/// Terminal banner shown when an effect starts
pub fn effect_banner(effect: EffectType, total_seconds: u64) -> String {
    match effect {
        EffectType::Notifier => format!("\x07[notifier] {}", completion_message(total_seconds)),
        EffectType::Cards => "[cards] \u{1F0A1} \u{1F0B1} \u{1F0C1} \u{1F0D1} Time's up!".to_string(),
        EffectType::Snow => "[snow] \u{2744} \u{2744} \u{2744} Time's up!".to_string(),
        EffectType::Popup => "[popup] \u{2728} Time's up \u{2728}".to_string(),
    }
}

fn write_line(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()
}

/// Present a single effect: show its banner and hold it for the effect's
/// presentation time
pub async fn present_effect(effect: EffectType, request: &EffectRequest) {
    info!(
        "Presenting {} effect for {}s countdown finished at {}",
        effect, request.total_seconds, request.finished_at
    );

    if let Err(e) = write_line(&effect_banner(effect, request.total_seconds)) {
        warn!("Failed to show {} effect: {}", effect, e);
        return;
    }

    let duration = effect.presentation_duration();
    if !duration.is_zero() {
        sleep(duration).await;
        debug!("{} effect ended after {:?}", effect, duration);
    }
}

/// Background task that presents every dispatched completion with the
/// effect type selected at that moment
pub async fn effect_runner_task(state: Arc<AppState>, mut requests: mpsc::UnboundedReceiver<EffectRequest>) {
    info!("Starting effect runner task");

    while let Some(request) = requests.recv().await {
        let effect = state.get_effect_type().unwrap_or_else(|e| {
            warn!("Failed to read effect type, falling back to notifier: {}", e);
            EffectType::Notifier
        });
        present_effect(effect, &request).await;
    }

    debug!("Effect channel closed, stopping effect runner");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_banner_carries_message_and_bell() {
        let banner = effect_banner(EffectType::Notifier, 90);
        assert!(banner.starts_with('\x07'));
        assert!(banner.ends_with("1m 30s timer finished"));
    }

    #[test]
    fn test_every_effect_has_tagged_banner() {
        for effect in EffectType::ALL {
            let banner = effect_banner(effect, 60);
            assert!(banner.contains(&format!("[{}]", effect)), "{}", banner);
        }
    }
}
