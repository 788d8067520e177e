//! Toast-style notification shown after each request: one at a time, newest
//! wins, hidden after a fixed delay or on dismiss.

use std::time::{Duration, Instant};

use crate::config::DEFAULT_NOTIFICATION_TIMEOUT_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Notification {
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    auto_hide: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT_SECS))
    }
}

impl NotificationCenter {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            current: None,
            auto_hide,
        }
    }

    pub fn auto_hide(&self) -> Duration {
        self.auto_hide
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            severity,
            shown_at: now,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Hides the notification once its display time has elapsed. Returns
    /// whether anything was hidden.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.remaining(now) {
            Some(remaining) if remaining.is_zero() => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let current = self.current.as_ref()?;
        let elapsed = now.saturating_duration_since(current.shown_at);
        Some(self.auto_hide.saturating_sub(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_notification_replaces_previous() {
        let mut center = NotificationCenter::default();
        center.show("first", Severity::Success);
        center.show("second", Severity::Error);

        let current = center.current().expect("visible");
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn hides_after_auto_hide_elapses() {
        let start = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_secs(6));
        center.show_at("saved", Severity::Success, start);

        assert!(!center.expire(start + Duration::from_secs(5)));
        assert!(center.current().is_some());
        assert_eq!(
            center.remaining(start + Duration::from_secs(5)),
            Some(Duration::from_secs(1))
        );

        assert!(center.expire(start + Duration::from_secs(6)));
        assert!(center.current().is_none());
        assert_eq!(center.remaining(start + Duration::from_secs(7)), None);
    }

    #[test]
    fn replacing_restarts_the_timer() {
        let start = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_secs(6));
        center.show_at("first", Severity::Success, start);
        center.show_at("second", Severity::Success, start + Duration::from_secs(4));

        assert!(!center.expire(start + Duration::from_secs(8)));
        assert!(center.expire(start + Duration::from_secs(10)));
    }

    #[test]
    fn dismiss_hides_immediately() {
        let mut center = NotificationCenter::default();
        center.show("oops", Severity::Error);
        center.dismiss();
        assert!(center.current().is_none());
        assert!(!center.expire(Instant::now()));
    }
}
