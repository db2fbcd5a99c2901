//! Transient success/error snackbar shown after mutations.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// How long a notification stays visible.
pub const AUTO_HIDE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notification--success",
            Self::Error => "notification--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
    seq: u64,
}

impl NotificationState {
    /// Show a message and return its sequence number for `hide`.
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
        self.seq
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(Severity::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(Severity::Error, message)
    }

    /// Auto-hide: only hides if no newer message replaced `seq`.
    pub fn hide(&mut self, seq: u64) {
        if self.seq == seq {
            self.visible = false;
        }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
