//! Web Feedback Adapter
//!
//! Plays cockpit cues through the Web Audio API and speaks completions
//! through the Speech Synthesis API. Every cue builds its own AudioContext,
//! so the adapter holds no JS handles and can live in shared context.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AudioContext, OscillatorType, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use completion_tracker::{FeedbackError, NavCue, Notification, Notifier};

/// Rising arpeggio for a completed task (Hz)
const CHIME_NOTES: [f32; 3] = [440.0, 660.0, 990.0];
const CHIME_STEP_SECS: f64 = 0.25;
const CHIME_DECAY_SECS: f64 = 0.2;
const CHIME_GAIN: f32 = 0.15;

const CLICK_SECS: f64 = 0.1;
const CLICK_GAIN: f32 = 0.1;
const FADE_FLOOR: f32 = 0.01;

/// Slack after the last tone stops before its context is closed
const CLOSE_MARGIN_MS: u32 = 50;

/// Delay between the chime starting and the voice
const SPEECH_DELAY_MS: u32 = 100;

/// Voice names that sound appropriately synthetic
const ROBOT_VOICES: &[&str] = &["robot", "zarvox", "siri"];

/// One short tone
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tone {
    frequency: f32,
    wave: OscillatorType,
    gain: f32,
    /// Offset from now
    start: f64,
    /// Time to fade to the floor
    decay: f64,
    /// Time until the oscillator stops
    length: f64,
}

/// Frequency of the click for each non-completion cue
fn click_frequency(notification: &Notification) -> f32 {
    match notification {
        Notification::Navigation(NavCue::Section) => 800.0,
        Notification::Navigation(NavCue::Task) => 700.0,
        Notification::Navigation(NavCue::Category) => 600.0,
        _ => 500.0,
    }
}

fn click(frequency: f32) -> Vec<Tone> {
    vec![Tone {
        frequency,
        wave: OscillatorType::Sine,
        gain: CLICK_GAIN,
        start: 0.0,
        decay: CLICK_SECS,
        length: CLICK_SECS,
    }]
}

fn chime() -> Vec<Tone> {
    CHIME_NOTES
        .iter()
        .enumerate()
        .map(|(i, &frequency)| Tone {
            frequency,
            wave: OscillatorType::Square,
            gain: CHIME_GAIN,
            start: i as f64 * CHIME_STEP_SECS,
            decay: CHIME_DECAY_SECS,
            length: CHIME_STEP_SECS,
        })
        .collect()
}

/// Tones for a notification
fn tones_for(notification: &Notification) -> Vec<Tone> {
    match notification {
        Notification::TaskCompleted { .. } => chime(),
        other => click(click_frequency(other)),
    }
}

fn completion_phrase(title: &str) -> String {
    format!("Nice work. {} is now complete.", title)
}

fn js_err(context: &str, e: JsValue) -> FeedbackError {
    FeedbackError::Playback(format!("{}: {:?}", context, e))
}

/// Milliseconds until every tone has stopped and the context can be released
fn release_after_ms(tones: &[Tone]) -> u32 {
    let end = tones.iter().map(|t| t.start + t.length).fold(0.0, f64::max);
    (end * 1000.0).ceil() as u32 + CLOSE_MARGIN_MS
}

fn schedule(ctx: &AudioContext, tones: &[Tone]) -> Result<(), FeedbackError> {
    let now = ctx.current_time();

    for tone in tones {
        let osc = ctx.create_oscillator().map_err(|e| js_err("oscillator", e))?;
        let gain = ctx.create_gain().map_err(|e| js_err("gain", e))?;

        osc.connect_with_audio_node(&gain).map_err(|e| js_err("connect", e))?;
        gain.connect_with_audio_node(&ctx.destination()).map_err(|e| js_err("connect", e))?;

        osc.set_type(tone.wave);
        osc.frequency().set_value(tone.frequency);

        let start = now + tone.start;
        gain.gain()
            .set_value_at_time(tone.gain, start)
            .and_then(|g| g.exponential_ramp_to_value_at_time(FADE_FLOOR, start + tone.decay))
            .map_err(|e| js_err("envelope", e))?;

        osc.start_with_when(start).map_err(|e| js_err("start", e))?;
        osc.stop_with_when(start + tone.length).map_err(|e| js_err("stop", e))?;
    }
    Ok(())
}

/// Plays the tones on a fresh context and closes it once they have finished
fn play(tones: &[Tone]) -> Result<(), FeedbackError> {
    let ctx = AudioContext::new().map_err(|e| FeedbackError::Unavailable(format!("AudioContext: {:?}", e)))?;
    let scheduled = schedule(&ctx, tones);

    Timeout::new(release_after_ms(tones), move || {
        if let Err(e) = ctx.close() {
            log::warn!("[FEEDBACK] audio context not closed: {:?}", e);
        }
    })
    .forget();

    scheduled
}

fn speak(text: &str) -> Result<(), FeedbackError> {
    let window = web_sys::window().ok_or_else(|| FeedbackError::Unavailable("no window".to_string()))?;
    let synth = window
        .speech_synthesis()
        .map_err(|e| FeedbackError::Unavailable(format!("speechSynthesis: {:?}", e)))?;

    let utterance = SpeechSynthesisUtterance::new_with_text(text).map_err(|e| js_err("utterance", e))?;
    utterance.set_pitch(0.6);
    utterance.set_rate(1.15);
    utterance.set_volume(0.6);

    let robot = synth
        .get_voices()
        .iter()
        .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
        .find(|v| {
            let name = v.name().to_lowercase();
            ROBOT_VOICES.iter().any(|r| name.contains(r))
        });
    if let Some(voice) = robot.as_ref() {
        utterance.set_voice(Some(voice));
    }

    synth.speak(&utterance);
    Ok(())
}

/// Browser feedback sink
#[derive(Debug, Clone, Copy, Default)]
pub struct WebFeedback;

/// Runs the audio cue, then queues the spoken phrase for completions whether
/// or not the audio played. Returns the audio result.
fn deliver<P, S>(notification: &Notification, play: P, speak_later: S) -> Result<(), FeedbackError>
where
    P: FnOnce(&[Tone]) -> Result<(), FeedbackError>,
    S: FnOnce(String),
{
    let played = play(&tones_for(notification));
    if let Some(title) = notification.payload() {
        speak_later(completion_phrase(title));
    }
    played
}

impl Notifier for WebFeedback {
    fn notify(&self, notification: &Notification) -> Result<(), FeedbackError> {
        deliver(notification, play, |phrase| {
            Timeout::new(SPEECH_DELAY_MS, move || {
                if let Err(e) = speak(&phrase) {
                    log::warn!("[FEEDBACK] speech dropped: {}", e);
                }
            })
            .forget();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chime_is_three_rising_square_notes() {
        let tones = tones_for(&Notification::TaskCompleted { title: "x".to_string() });
        assert_eq!(tones.len(), 3);
        assert!(tones.windows(2).all(|w| w[0].frequency < w[1].frequency && w[0].start < w[1].start));
        assert!(tones.iter().all(|t| t.wave == OscillatorType::Square));
    }

    #[test]
    fn test_navigation_clicks_are_distinct_from_toggle() {
        let toggle = click_frequency(&Notification::NeutralToggle);
        let cues = [NavCue::Section, NavCue::Category, NavCue::Task]
            .map(|c| click_frequency(&Notification::Navigation(c)));
        assert!(cues.iter().all(|f| *f != toggle));
        assert_ne!(cues[0], cues[1]);
        assert_ne!(cues[1], cues[2]);
    }

    #[test]
    fn test_context_released_after_last_tone() {
        let chime_tones = chime();
        assert_eq!(release_after_ms(&chime_tones), 750 + CLOSE_MARGIN_MS);
        assert_eq!(release_after_ms(&click(500.0)), 100 + CLOSE_MARGIN_MS);
        assert!(chime_tones
            .iter()
            .all(|t| ((t.start + t.length) * 1000.0) as u32 <= release_after_ms(&chime_tones)));
    }

    #[test]
    fn test_speech_queued_when_audio_fails() {
        let mut spoken = Vec::new();
        let result = deliver(
            &Notification::TaskCompleted { title: "Write role summary".to_string() },
            |_| Err(FeedbackError::Unavailable("no audio".to_string())),
            |phrase| spoken.push(phrase),
        );
        assert!(result.is_err());
        assert_eq!(spoken, vec![completion_phrase("Write role summary")]);
    }

    #[test]
    fn test_no_speech_for_clicks() {
        let mut spoken = Vec::new();
        let result = deliver(&Notification::NeutralToggle, |_| Ok(()), |phrase| spoken.push(phrase));
        assert!(result.is_ok());
        assert!(spoken.is_empty());
    }

    #[test]
    fn test_completion_phrase() {
        assert_eq!(
            completion_phrase("Write role summary"),
            "Nice work. Write role summary is now complete."
        );
    }
}
