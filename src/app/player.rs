//! Animation player for the terminal
//!
//! There is no 3D model to animate in a terminal, so the player tracks which
//! clip is showing and how far it has progressed. The quiz panel draws that as
//! a progress bar. A clip freezes on its last frame when it runs out.

use crate::quiz::{AnimationPlayer, ClipRef};

#[derive(Debug, Clone, Default)]
pub struct TerminalClipPlayer {
    clip: Option<ClipRef>,
    elapsed: f32,
    paused: bool,
}

impl TerminalClipPlayer {
    /// Advance the showing clip by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        let Some(clip) = &self.clip else {
            return;
        };
        if self.paused || dt <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(clip.duration_secs);
        if self.elapsed >= clip.duration_secs {
            self.paused = true;
        }
    }

    /// Name of the showing clip
    pub fn clip_name(&self) -> Option<&str> {
        self.clip.as_ref().map(|c| c.name.as_str())
    }

    /// Fraction of the clip played, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        match &self.clip {
            Some(clip) if clip.duration_secs > 0.0 => (self.elapsed / clip.duration_secs).min(1.0),
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl AnimationPlayer for TerminalClipPlayer {
    fn start_clip(&mut self, clip: &ClipRef) {
        tracing::debug!("Playing clip '{}'", clip.name);
        self.clip = Some(clip.clone());
        self.elapsed = 0.0;
        self.paused = false;
    }

    fn play(&mut self) {
        if self.clip.is_some() && self.progress() < 1.0 {
            self.paused = false;
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
        self.paused = false;
    }

    fn stop(&mut self) {
        self.clip = None;
        self.elapsed = 0.0;
        self.paused = false;
    }
}
