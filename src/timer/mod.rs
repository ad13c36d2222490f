//! Countdown state machine
//!
//! `Timer` owns the numeric countdown state for the selected session. It is
//! purely synchronous: the caller drives it with [`Timer::tick`] once per
//! [`TICK_INTERVAL`] while [`Timer::is_running`] holds, and reacts to the
//! returned [`TimerEvent`]s (starting or stopping alarm audio, scheduling or
//! dropping the periodic tick).

use std::fmt;
use std::time::Duration;

use crate::models::{SessionKind, TimeSettings};
use crate::utils::logging::log_transition;

pub mod ring;

pub use ring::RingGeometry;

/// Period of the countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not running, remaining equals the session total
    Idle,
    Running,
    /// Stopped part-way through
    Paused,
    /// Reached zero; alarm audio is looping until acknowledged
    Alarming,
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Alarming => "alarming",
        };
        f.write_str(name)
    }
}

/// Side effects the caller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Paused,
    Resumed,
    Ticked { remaining: u32 },
    /// Countdown hit zero: start the alarm loop
    Completed,
    /// Alarm acknowledged: stop and rewind the alarm audio
    AlarmStopped,
    Reset,
    /// Session or duration changed. `silenced_alarm` asks the caller to stop audio.
    Resynced { silenced_alarm: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    session: SessionKind,
    total_seconds: u32,
    remaining_seconds: u32,
    running: bool,
    alarm_active: bool,
}

impl Timer {
    pub fn new(session: SessionKind, time: &TimeSettings) -> Self {
        let total_seconds = time.total_seconds(session);
        Self {
            session,
            total_seconds,
            remaining_seconds: total_seconds,
            running: false,
            alarm_active: false,
        }
    }

    pub fn session(&self) -> SessionKind {
        self.session
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_alarm_active(&self) -> bool {
        self.alarm_active
    }

    pub fn phase(&self) -> TimerPhase {
        if self.alarm_active {
            TimerPhase::Alarming
        } else if self.running {
            TimerPhase::Running
        } else if self.remaining_seconds == self.total_seconds {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Start/pause button. Ignored while alarming.
    pub fn toggle(&mut self) -> Option<TimerEvent> {
        if self.alarm_active {
            return None;
        }
        let before = self.phase();

        let event = if self.running {
            self.running = false;
            TimerEvent::Paused
        } else if self.remaining_seconds == 0 {
            // Zero-length session: nothing to count down
            self.complete();
            TimerEvent::Completed
        } else {
            self.running = true;
            if before == TimerPhase::Paused {
                TimerEvent::Resumed
            } else {
                TimerEvent::Started
            }
        };

        log_transition(before, self.phase());
        Some(event)
    }

    /// Advances the countdown by one second. Does nothing unless running.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            let before = self.phase();
            self.complete();
            log_transition(before, self.phase());
            return Some(TimerEvent::Completed);
        }

        Some(TimerEvent::Ticked {
            remaining: self.remaining_seconds,
        })
    }

    /// Back to the pristine start. A no-op while alarming.
    pub fn reset(&mut self) -> Option<TimerEvent> {
        if self.alarm_active {
            return None;
        }
        let before = self.phase();
        self.remaining_seconds = self.total_seconds;
        self.running = false;
        log_transition(before, self.phase());
        Some(TimerEvent::Reset)
    }

    /// The only way out of `Alarming`.
    pub fn stop_alarm(&mut self) -> Option<TimerEvent> {
        if !self.alarm_active {
            return None;
        }
        self.alarm_active = false;
        self.remaining_seconds = self.total_seconds;
        self.running = false;
        log_transition(TimerPhase::Alarming, self.phase());
        Some(TimerEvent::AlarmStopped)
    }

    /// Re-derives the countdown whenever the selected session or that
    /// session's configured duration differs from what the timer was built
    /// from. Forces `Idle` regardless of the prior phase.
    pub fn synchronize(&mut self, session: SessionKind, time: &TimeSettings) -> Option<TimerEvent> {
        let total_seconds = time.total_seconds(session);
        if session == self.session && total_seconds == self.total_seconds {
            return None;
        }

        let before = self.phase();
        let silenced_alarm = self.alarm_active;
        self.session = session;
        self.total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
        self.running = false;
        self.alarm_active = false;
        log_transition(before, self.phase());

        Some(TimerEvent::Resynced { silenced_alarm })
    }

    /// remaining / total, with a zero-length session treated as full.
    pub fn fraction(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        f64::from(self.remaining_seconds) / f64::from(self.total_seconds)
    }

    pub fn formatted(&self) -> String {
        format_time(self.remaining_seconds)
    }

    pub fn is_reset_visible(&self) -> bool {
        self.remaining_seconds > 0 && self.remaining_seconds < self.total_seconds
    }

    pub fn ring(&self, layout_width: f64) -> RingGeometry {
        RingGeometry::compute(layout_width, self.fraction())
    }

    fn complete(&mut self) {
        self.running = false;
        self.remaining_seconds = self.total_seconds;
        self.alarm_active = true;
    }
}

/// `MM:SS`, both parts zero-padded to at least two digits.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(work: u32, short_break: u32, long_break: u32) -> TimeSettings {
        TimeSettings {
            work,
            short_break,
            long_break,
        }
    }

    fn run_down(timer: &mut Timer) -> Option<TimerEvent> {
        let mut last = None;
        while timer.is_running() {
            last = timer.tick();
        }
        last
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(3661), "61:01");
        assert_eq!(format_time(999 * 60), "999:00");
    }

    #[test]
    fn test_new_timer_is_idle() {
        let timer = Timer::new(SessionKind::Work, &TimeSettings::default());
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.total_seconds(), 1500);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.formatted(), "25:00");
        assert!(!timer.is_reset_visible());
    }

    #[test]
    fn test_toggle_start_pause_resume() {
        let mut timer = Timer::new(SessionKind::ShortBreak, &TimeSettings::default());

        assert_eq!(timer.toggle(), Some(TimerEvent::Started));
        assert_eq!(timer.phase(), TimerPhase::Running);

        assert_eq!(timer.tick(), Some(TimerEvent::Ticked { remaining: 299 }));
        assert_eq!(timer.toggle(), Some(TimerEvent::Paused));
        assert_eq!(timer.phase(), TimerPhase::Paused);
        assert!(timer.is_reset_visible());

        assert_eq!(timer.toggle(), Some(TimerEvent::Resumed));
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn test_toggle_twice_without_tick_returns_to_idle() {
        let mut timer = Timer::new(SessionKind::Work, &TimeSettings::default());
        timer.toggle();
        timer.toggle();
        // Nothing elapsed, so the timer is indistinguishable from pristine
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut timer = Timer::new(SessionKind::Work, &TimeSettings::default());
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_completion_enters_alarming() {
        let mut timer = Timer::new(SessionKind::Work, &time(1, 5, 15));
        timer.toggle();

        assert_eq!(run_down(&mut timer), Some(TimerEvent::Completed));
        assert_eq!(timer.phase(), TimerPhase::Alarming);
        assert!(!timer.is_running());
        assert!(timer.is_alarm_active());
        assert_eq!(timer.remaining_seconds(), 60);
        assert!(!timer.is_reset_visible());
    }

    #[test]
    fn test_reset_is_noop_while_alarming() {
        let mut timer = Timer::new(SessionKind::Work, &time(1, 5, 15));
        timer.toggle();
        run_down(&mut timer);

        assert_eq!(timer.reset(), None);
        assert_eq!(timer.toggle(), None);
        assert_eq!(timer.phase(), TimerPhase::Alarming);

        assert_eq!(timer.stop_alarm(), Some(TimerEvent::AlarmStopped));
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_stop_alarm_without_alarm() {
        let mut timer = Timer::new(SessionKind::Work, &TimeSettings::default());
        assert_eq!(timer.stop_alarm(), None);
    }

    #[test]
    fn test_reset_from_running_and_paused() {
        let mut timer = Timer::new(SessionKind::Work, &TimeSettings::default());
        timer.toggle();
        timer.tick();
        assert_eq!(timer.reset(), Some(TimerEvent::Reset));
        assert_eq!(timer.phase(), TimerPhase::Idle);

        timer.toggle();
        timer.tick();
        timer.toggle();
        assert_eq!(timer.phase(), TimerPhase::Paused);
        timer.reset();
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_session_change_while_running_resets() {
        let settings = TimeSettings::default();
        let mut timer = Timer::new(SessionKind::Work, &settings);
        timer.toggle();
        timer.tick();

        let event = timer.synchronize(SessionKind::LongBreak, &settings);
        assert_eq!(event, Some(TimerEvent::Resynced { silenced_alarm: false }));
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.session(), SessionKind::LongBreak);
        assert_eq!(timer.remaining_seconds(), 15 * 60);
    }

    #[test]
    fn test_session_change_with_equal_durations_still_resets() {
        let settings = time(5, 5, 5);
        let mut timer = Timer::new(SessionKind::ShortBreak, &settings);
        timer.toggle();
        timer.tick();

        assert!(timer.synchronize(SessionKind::LongBreak, &settings).is_some());
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_duration_change_resets_only_for_active_session() {
        let mut settings = TimeSettings::default();
        let mut timer = Timer::new(SessionKind::Work, &settings);
        timer.toggle();
        timer.tick();

        settings.long_break = 45;
        assert_eq!(timer.synchronize(SessionKind::Work, &settings), None);
        assert!(timer.is_running());

        settings.work = 30;
        assert!(timer.synchronize(SessionKind::Work, &settings).is_some());
        assert_eq!(timer.remaining_seconds(), 1800);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_resync_silences_alarm() {
        let settings = time(1, 5, 15);
        let mut timer = Timer::new(SessionKind::Work, &settings);
        timer.toggle();
        run_down(&mut timer);

        let event = timer.synchronize(SessionKind::ShortBreak, &settings);
        assert_eq!(event, Some(TimerEvent::Resynced { silenced_alarm: true }));
        assert!(!timer.is_alarm_active());
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_zero_length_session() {
        let mut timer = Timer::new(SessionKind::ShortBreak, &time(25, 0, 15));
        assert_eq!(timer.fraction(), 1.0);
        assert_eq!(timer.formatted(), "00:00");
        assert!(!timer.is_reset_visible());

        assert_eq!(timer.toggle(), Some(TimerEvent::Completed));
        assert_eq!(timer.phase(), TimerPhase::Alarming);
    }

    #[test]
    fn test_fraction_bounds() {
        let mut timer = Timer::new(SessionKind::Work, &time(1, 5, 15));
        assert_eq!(timer.fraction(), 1.0);

        timer.toggle();
        for _ in 0..30 {
            timer.tick();
        }
        assert!((timer.fraction() - 0.5).abs() < 1e-9);

        for _ in 0..29 {
            timer.tick();
        }
        let fraction = timer.fraction();
        assert!((0.0..=1.0).contains(&fraction));
        assert!(timer.is_reset_visible());
    }
}
