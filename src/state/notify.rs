#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        }
    }
}

/// A single modal notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// At most one notice is shown at a time; a new notice replaces the
/// current one, dismissal clears it.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    current: Option<Notice>,
}

impl NotificationState {
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.current = Some(Notice { kind: NoticeKind::Success, text: text.into() });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.current = Some(Notice { kind: NoticeKind::Error, text: text.into() });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
