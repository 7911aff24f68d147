//! Toast queue and the notification seam used by handlers.
//!
//! # Design
//! - The queue is bounded; pushing past the limit drops the oldest toast.
//! - Ids are monotonic so a late auto-dismiss never removes a newer toast.
//! - Handlers depend on [`Notifier`], not on the queue, so tests can count emissions.

/// Maximum number of toasts kept on screen.
pub const MAX_TOASTS: usize = 4;

/// Auto-dismiss delay for a toast, in milliseconds.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Visual variant of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

impl ToastKind {
    /// DaisyUI alert class for this variant.
    #[must_use]
    pub const fn alert_class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Queue-unique identifier.
    pub id: u64,
    /// Message text.
    pub message: String,
    /// Variant.
    pub kind: ToastKind,
}

/// Bounded FIFO of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        while self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Timer work needed to bring the armed set in line with the visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerChanges {
    /// Visible toasts without a running timer.
    pub arm: Vec<u64>,
    /// Running timers whose toast is gone.
    pub disarm: Vec<u64>,
}

/// Diff the ids with a running auto-dismiss timer against the visible list.
///
/// A toast keeps its timer for as long as it stays visible, so later pushes
/// or dismissals never restart it.
#[must_use]
pub fn timer_changes(armed: impl IntoIterator<Item = u64>, visible: &[Toast]) -> TimerChanges {
    let armed: Vec<u64> = armed.into_iter().collect();
    let disarm = armed
        .iter()
        .copied()
        .filter(|id| !visible.iter().any(|toast| toast.id == *id))
        .collect();
    let arm = visible
        .iter()
        .map(|toast| toast.id)
        .filter(|id| !armed.contains(id))
        .collect();
    TimerChanges { arm, disarm }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    /// Emit a notification.
    fn notify(&mut self, kind: ToastKind, message: String);

    /// Emit a success notification.
    fn success(&mut self, message: &str) {
        self.notify(ToastKind::Success, message.to_string());
    }

    /// Emit an error notification.
    fn error(&mut self, message: &str) {
        self.notify(ToastKind::Error, message.to_string());
    }

    /// Emit an informational notification.
    fn info(&mut self, message: &str) {
        self.notify(ToastKind::Info, message.to_string());
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, kind: ToastKind, message: String) {
        self.push(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_caps_and_drops_oldest() {
        let mut queue = ToastQueue::default();
        for idx in 0..6 {
            queue.push(ToastKind::Info, format!("toast {idx}"));
        }
        let ids: Vec<u64> = queue.items().iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
        assert_eq!(queue.items()[0].message, "toast 2");
    }

    #[test]
    fn dismiss_removes_by_id_only() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "saved");
        let second = queue.push(ToastKind::Error, "failed");
        queue.dismiss(first);
        queue.dismiss(first);
        queue.dismiss(99);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);
        let third = queue.push(ToastKind::Info, "again");
        assert!(third > second);
    }

    #[test]
    fn later_pushes_arm_only_the_new_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "saved");
        let initial = timer_changes([], queue.items());
        assert_eq!(initial.arm, vec![first]);
        assert!(initial.disarm.is_empty());

        let second = queue.push(ToastKind::Error, "failed");
        let changes = timer_changes([first], queue.items());
        assert_eq!(changes.arm, vec![second]);
        assert!(changes.disarm.is_empty());

        assert_eq!(timer_changes([first, second], queue.items()), TimerChanges::default());
    }

    #[test]
    fn removed_toasts_disarm_only_their_timer() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "one");
        let second = queue.push(ToastKind::Info, "two");
        queue.dismiss(first);
        let changes = timer_changes([first, second], queue.items());
        assert_eq!(changes.disarm, vec![first]);
        assert!(changes.arm.is_empty());

        for idx in 0..MAX_TOASTS {
            queue.push(ToastKind::Info, format!("more {idx}"));
        }
        let evicted = timer_changes([second], queue.items());
        assert_eq!(evicted.disarm, vec![second]);
        assert_eq!(evicted.arm.len(), MAX_TOASTS);
    }

    #[test]
    fn notifier_helpers_set_kind() {
        let mut queue = ToastQueue::default();
        queue.success("Order reset");
        queue.error("boom");
        queue.info("hello");
        let kinds: Vec<ToastKind> = queue.items().iter().map(|toast| toast.kind).collect();
        assert_eq!(
            kinds,
            vec![ToastKind::Success, ToastKind::Error, ToastKind::Info]
        );
        assert_eq!(ToastKind::Error.alert_class(), "alert-error");
    }
}
