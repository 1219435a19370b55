use crate::config::Config;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Success,
    Click,
    Happy,
    Notification,
}

impl AudioCue {
    pub fn as_str(self) -> &'static str {
        match self {
            AudioCue::Success => "success",
            AudioCue::Click => "click",
            AudioCue::Happy => "happy",
            AudioCue::Notification => "notification",
        }
    }

    fn rings_bell(self) -> bool {
        !matches!(self, AudioCue::Click)
    }
}

pub trait AudioSink: Send + Sync {
    fn play(&self, cue: AudioCue);
}

#[derive(Debug, Clone, Copy)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&self, cue: AudioCue) {
        debug!(cue = cue.as_str(), "audio cue");

        if cue.rings_bell() {
            let mut stderr = std::io::stderr();
            let _ = stderr.write_all(b"\x07").and_then(|_| stderr.flush());
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&self, cue: AudioCue) {
        debug!(cue = cue.as_str(), "audio cue muted");
    }
}

pub fn sink_for(config: &Config) -> Arc<dyn AudioSink> {
    if config.sound_enabled {
        Arc::new(TerminalBell)
    } else {
        Arc::new(Silent)
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    cues: parking_lot::Mutex<Vec<AudioCue>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.lock().clone()
    }
}

#[cfg(test)]
impl AudioSink for RecordingSink {
    fn play(&self, cue: AudioCue) {
        self.cues.lock().push(cue);
    }
}
