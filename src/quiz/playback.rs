//! Animation player collaborator and clip sequencing

use super::model::ClipRef;

/// Plays the animation clips attached to a question
///
/// The transport controls (`play`, `pause`, `reset`, `toggle`) are driven
/// directly by UI buttons and carry no quiz logic.
pub trait AnimationPlayer {
    /// Load `clip` and start playing it
    fn start_clip(&mut self, clip: &ClipRef);

    /// How long `clip` runs, in seconds
    fn clip_duration(&self, clip: &ClipRef) -> f32 {
        clip.duration_secs
    }

    /// Resume the current clip
    fn play(&mut self) {}

    /// Freeze the current clip
    fn pause(&mut self) {}

    /// Rewind the current clip and play it again
    fn reset(&mut self) {}

    /// Pause when `pause` is true, resume otherwise
    fn toggle(&mut self, pause: bool) {
        if pause { self.pause() } else { self.play() }
    }

    /// Stop playback and clear the current clip
    fn stop(&mut self) {}
}

/// Player for hosts without animation output
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlayer;

impl AnimationPlayer for NullPlayer {
    fn start_clip(&mut self, _clip: &ClipRef) {}
}

/// Walks a question's clips one at a time
///
/// Each call to [`ClipSequence::play_next`] starts the following clip and
/// returns how long to wait before calling again.
#[derive(Debug, Clone)]
pub struct ClipSequence {
    clips: Vec<ClipRef>,
    next: usize,
    finished: bool,
}

impl Default for ClipSequence {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ClipSequence {
    pub fn new(clips: Vec<ClipRef>) -> Self {
        let finished = clips.is_empty();
        Self { clips, next: 0, finished }
    }

    /// Start the next clip, or mark the sequence finished when none remain
    pub fn play_next(&mut self, player: &mut impl AnimationPlayer) -> Option<f32> {
        let Some(clip) = self.clips.get(self.next) else {
            self.finished = true;
            return None;
        };
        self.next += 1;
        player.start_clip(clip);
        Some(player.clip_duration(clip).max(0.0))
    }

    /// Whether every clip has been played out
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
