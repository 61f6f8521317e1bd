use std::time::Duration;

/// How long a transient notice stays on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NoticeTarget {
    Register,
    Login,
    Schedule,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub target: NoticeTarget,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(target: NoticeTarget, kind: NoticeKind, text: &str) -> Notice {
        return Notice {
            target,
            kind,
            text: text.to_string(),
        };
    }

    pub fn success(target: NoticeTarget, text: &str) -> Notice {
        return Notice::new(target, NoticeKind::Success, text);
    }

    pub fn error(target: NoticeTarget, text: &str) -> Notice {
        return Notice::new(target, NoticeKind::Error, text);
    }

    pub fn is_error(&self) -> bool {
        return self.kind == NoticeKind::Error;
    }
}
