#[cfg(test)]
#[path = "notices_test.rs"]
mod tests;

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::Notice;
use crate::domain::models::NoticeTarget;
use crate::domain::models::NOTICE_TIMEOUT;

/// Transient notices, one slot per target.
///
/// Every notice starts its own expiry timer and earlier timers are never
/// cancelled. When a timer fires it clears whatever currently sits in the
/// slot, so a newer notice can disappear before its own timeout.
pub struct NoticeBoard {
    notices: HashMap<NoticeTarget, Notice>,
    timeout: Duration,
}

impl Default for NoticeBoard {
    fn default() -> NoticeBoard {
        return NoticeBoard::new(NOTICE_TIMEOUT);
    }
}

impl NoticeBoard {
    pub fn new(timeout: Duration) -> NoticeBoard {
        return NoticeBoard {
            notices: HashMap::new(),
            timeout,
        };
    }

    pub fn get(&self, target: NoticeTarget) -> Option<&Notice> {
        return self.notices.get(&target);
    }

    pub fn show(&mut self, notice: Notice, tx: &mpsc::UnboundedSender<Event>) {
        let target = notice.target;
        self.notices.insert(target, notice);

        let timeout = self.timeout;
        let tx = tx.clone();
        tokio::spawn(async move {
            time::sleep(timeout).await;
            if tx.send(Event::NoticeExpired(target)).is_err() {
                tracing::debug!(?target, "Notice expired after the UI closed");
            }
        });
    }

    pub fn expire(&mut self, target: NoticeTarget) {
        self.notices.remove(&target);
    }
}
