// Sound effects: short synthesized tones played through rodio

use std::f32::consts::TAU;

use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use crate::config::SoundConfig;

const SAMPLE_RATE: u32 = 44_100;
const VOLUME: f32 = 0.2;
const ATTACK_MS: u32 = 4;

/// Things worth a beep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Default,
    Score,
    Paddle,
}

/// A pitch sweep from `start_hz` to `end_hz` over `millis`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub millis: u32,
}

impl SoundEvent {
    pub fn tone(self) -> Tone {
        match self {
            SoundEvent::Default => Tone {
                start_hz: 440.0,
                end_hz: 440.0,
                millis: 90,
            },
            SoundEvent::Paddle => Tone {
                start_hz: 880.0,
                end_hz: 880.0,
                millis: 35,
            },
            // Falling whistle
            SoundEvent::Score => Tone {
                start_hz: 660.0,
                end_hz: 220.0,
                millis: 300,
            },
        }
    }
}

/// Fire-and-forget sound output
pub trait Sound {
    fn beep(&mut self, event: SoundEvent);
}

/// Mono samples for `tone`: a sine sweep with a short attack and a linear fade out
pub fn tone_samples(tone: Tone, sample_rate: u32) -> Vec<f32> {
    let len = (sample_rate as u64 * tone.millis as u64 / 1000) as usize;
    let attack = (sample_rate * ATTACK_MS / 1000).max(1) as usize;
    let mut phase = 0.0f32;

    (0..len)
        .map(|i| {
            let progress = i as f32 / len as f32;
            let freq = tone.start_hz + (tone.end_hz - tone.start_hz) * progress;
            phase = (phase + TAU * freq / sample_rate as f32) % TAU;

            let envelope = (i as f32 / attack as f32).min(1.0) * (1.0 - progress);
            phase.sin() * VOLUME * envelope
        })
        .collect()
}

struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    fn play(&self, samples: Vec<f32>) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }
}

/// Plays one tone per event on the default output device.
///
/// Silent when sound is disabled in config or no output device can be opened.
pub struct Speaker {
    audio: Option<Audio>,
}

impl Speaker {
    pub fn new(config: &SoundConfig) -> Self {
        if !config.enabled {
            debug!("sound disabled in config");
            return Self { audio: None };
        }

        let audio = match Audio::new() {
            Ok(audio) => Some(audio),
            Err(e) => {
                warn!(error = %e, "no audio output, playing silently");
                None
            }
        };
        Self { audio }
    }

    pub fn is_silent(&self) -> bool {
        self.audio.is_none()
    }
}

impl Sound for Speaker {
    fn beep(&mut self, event: SoundEvent) {
        if let Some(audio) = &self.audio {
            audio.play(tone_samples(event.tone(), SAMPLE_RATE));
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every event instead of making noise
    #[derive(Debug, Default)]
    pub struct RecordingSound {
        pub events: Vec<SoundEvent>,
    }

    impl Sound for RecordingSound {
        fn beep(&mut self, event: SoundEvent) {
            self.events.push(event);
        }
    }
}
