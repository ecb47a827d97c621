//! Tone output
//!
//! The game only ever asks for short beeps. Sinks are fire-and-forget: a tone that can't be
//! played is dropped without telling anyone.

/// A beep request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hz
    pub frequency: f32,
    pub duration_ms: u32,
}

impl Tone {
    /// Ball hits top/bottom wall
    pub const WALL: Tone = Tone::new(600.0, 40);
    /// Ball hits a paddle
    pub const PADDLE: Tone = Tone::new(800.0, 40);
    /// Point scored
    pub const SCORE: Tone = Tone::new(400.0, 80);

    pub const fn new(frequency: f32, duration_ms: u32) -> Self {
        Self {
            frequency,
            duration_ms,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// Anything that can play a tone
pub trait AudioSink {
    fn play_tone(&mut self, tone: Tone);
}

/// Writes tones to the log (native builds have no sound output)
#[derive(Debug, Default, Clone)]
pub struct LogAudio {
    pub muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn new(muted: bool) -> Self {
        Self { muted, played: 0 }
    }

    /// Tones accepted so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play_tone(&mut self, tone: Tone) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::debug!("beep {} Hz for {} ms", tone.frequency, tone.duration_ms);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, Tone};

    /// Square-wave beeps through the Web Audio API
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl WebAudio {
        pub fn new(master_volume: f32, muted: bool) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: master_volume.clamp(0.0, 1.0),
                muted,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.master_volume }
        }

        fn create_osc(&self, ctx: &AudioContext, freq: f32) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(OscillatorType::Square);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }

    impl AudioSink for WebAudio {
        fn play_tone(&mut self, tone: Tone) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let Some((osc, gain)) = self.create_osc(ctx, tone.frequency) else {
                return;
            };
            let t = ctx.current_time();
            let end = t + tone.duration_secs();

            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok();

            osc.start().ok();
            osc.stop_with_when(end + 0.01).ok();
        }
    }
}
