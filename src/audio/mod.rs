//! Fire-and-forget sound effects.
//!
//! Audio is strictly a side channel: a missing output device or a
//! failed playback is logged and swallowed, and never touches game
//! state.

use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};
use tracing::warn;

const SAMPLE_RATE: u32 = 44_100;

pub struct AudioPlayer {
    // Dropping the stream kills every sink attached to it.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioPlayer {
    /// Open the default audio device, or None if there isn't one.
    pub fn new() -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Self {
                _stream: stream,
                handle,
            }),
            Err(err) => {
                warn!("no audio output available, playing silent: {err}");
                None
            }
        }
    }

    /// Short rising chirp played when the snake eats
    pub fn play_eat(&self) {
        self.play_samples(eat_chirp_samples());
    }

    fn play_samples(&self, samples: Vec<f32>) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                let source = SamplesBuffer::new(1, SAMPLE_RATE, samples);
                sink.append(source);
                sink.detach();
            }
            Err(err) => warn!("sound playback failed: {err}"),
        }
    }
}

/// Two quick sine notes with a linear fade-out
fn eat_chirp_samples() -> Vec<f32> {
    const NOTES: [f32; 2] = [660.0, 880.0];
    const NOTE_SECS: f32 = 0.07;

    let note_len = (SAMPLE_RATE as f32 * NOTE_SECS) as usize;
    let mut samples = Vec::with_capacity(note_len * NOTES.len());

    for freq in NOTES {
        for i in 0..note_len {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = 0.2 * (1.0 - i as f32 / note_len as f32);
            samples.push(envelope * (std::f32::consts::TAU * freq * t).sin());
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_chirp_is_bounded() {
        let samples = eat_chirp_samples();
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_eat_chirp_fades_out() {
        let samples = eat_chirp_samples();
        assert!(samples.last().unwrap().abs() < 0.01);
    }
}
