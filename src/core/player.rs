//! # Playback
//!
//! Simulated video progress. There is no real stream: the event loop sends a
//! `Tick` at a fixed interval while playing and the position advances one
//! second per tick until it reaches the duration.

pub const DEFAULT_DURATION_SECS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    position: u32,
    duration: u32,
    playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl Playback {
    pub fn new(duration: u32) -> Self {
        Self {
            position: 0,
            duration,
            playing: false,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.duration
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
            return;
        }
        self.position += 1;
    }

    pub fn seek(&mut self, secs: u32) {
        self.position = secs.min(self.duration);
    }

    pub fn skip(&mut self, delta: i32) {
        let target = (self.position as i64 + delta as i64).clamp(0, self.duration as i64);
        self.position = target as u32;
    }

    pub fn progress_percent(&self) -> u16 {
        if self.duration == 0 {
            return 0;
        }
        ((self.position as u64 * 100) / self.duration as u64) as u16
    }
}

/// `m:ss`
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_only_advances_while_playing() {
        let mut playback = Playback::new(10);
        playback.tick();
        assert_eq!(playback.position(), 0);
        playback.toggle();
        playback.tick();
        playback.tick();
        assert_eq!(playback.position(), 2);
    }

    #[test]
    fn test_tick_stops_at_end() {
        let mut playback = Playback::new(2);
        playback.toggle();
        for _ in 0..5 {
            playback.tick();
        }
        assert_eq!(playback.position(), 2);
        assert!(!playback.is_playing());
        assert!(playback.is_complete());
    }

    #[test]
    fn test_skip_and_seek_clamp() {
        let mut playback = Playback::new(300);
        playback.skip(-10);
        assert_eq!(playback.position(), 0);
        playback.skip(295);
        playback.skip(10);
        assert_eq!(playback.position(), 300);
        playback.seek(1000);
        assert_eq!(playback.position(), 300);
        playback.seek(150);
        assert_eq!(playback.progress_percent(), 50);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(300), "5:00");
    }

    #[test]
    fn test_zero_duration() {
        let playback = Playback::new(0);
        assert_eq!(playback.progress_percent(), 0);
        assert!(playback.is_complete());
    }
}
