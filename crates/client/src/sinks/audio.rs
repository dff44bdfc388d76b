use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use game_core::{SoundClip, SoundCue};
use runtime::{Event, Topic};

use super::EventSink;

/// A clip as it would be handed to the mixer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayedClip {
    pub clip: SoundClip,
    pub pitch: f32,
}

/// Picks the clip variant and pitch of each cue, then logs it.
///
/// Presentation randomness lives here, on its own generator, so it never
/// perturbs the simulation's seeded stream.
pub struct AudioSink {
    rng: StdRng,
    music_playing: bool,
}

impl AudioSink {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            music_playing: true,
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// Resolves `cue` to a concrete clip; `None` for music control.
    pub fn pick(&mut self, cue: &SoundCue) -> Option<PlayedClip> {
        match cue {
            SoundCue::Randomized { clips, pitch } => {
                if clips.is_empty() {
                    return None;
                }
                let clip = clips[self.rng.random_range(0..clips.len())];
                let pitch = self.rng.random_range(pitch.low..=pitch.high);
                Some(PlayedClip { clip, pitch })
            }
            SoundCue::Single(clip) => Some(PlayedClip {
                clip: *clip,
                pitch: 1.0,
            }),
            SoundCue::StopMusic => {
                self.music_playing = false;
                None
            }
        }
    }
}

#[async_trait]
impl EventSink for AudioSink {
    fn topic(&self) -> Topic {
        Topic::Audio
    }

    async fn handle(&mut self, event: Event) -> Result<()> {
        let Event::Audio(cue) = event else {
            return Ok(());
        };

        match self.pick(&cue) {
            Some(played) => debug!(
                effect = %played.clip.effect,
                variant = played.clip.variant,
                pitch = played.pitch,
                "Play sound"
            ),
            None => debug!("Music stopped"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{PitchRange, SoundEffect};

    #[test]
    fn randomized_cues_stay_in_range() {
        let mut sink = AudioSink::new(3);
        let pitch = PitchRange::default();
        let cue = SoundCue::randomized(SoundEffect::Eat, pitch);

        for _ in 0..100 {
            let played = sink.pick(&cue).unwrap();
            assert_eq!(played.clip.effect, SoundEffect::Eat);
            assert!(played.clip.variant < 2);
            assert!((pitch.low..=pitch.high).contains(&played.pitch));
        }
    }

    #[test]
    fn single_cues_play_at_normal_pitch() {
        let mut sink = AudioSink::new(0);
        let played = sink.pick(&SoundCue::single(SoundEffect::GameOver)).unwrap();
        assert_eq!(played.clip, SoundClip::new(SoundEffect::GameOver, 0));
        assert_eq!(played.pitch, 1.0);
    }

    #[test]
    fn stop_music_silences_the_background() {
        let mut sink = AudioSink::new(0);
        assert!(sink.pick(&SoundCue::StopMusic).is_none());
        assert!(!sink.music_playing());
    }
}
