//! XP toast notification queue.
//!
//! Toasts are appended on every XP-earning action and expire after a fixed
//! window. Each push records the toast id as pending; the app drains the
//! pending list and schedules one expiry task per id. An expiry firing after
//! the toast is already gone filters on an absent id and is a no-op.

use std::time::Duration;
use tokio::sync::mpsc;

use super::Action;

/// An ephemeral XP toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpToast {
    /// Time-derived id, unique within the session.
    pub id: u64,
    /// Label describing the triggering action.
    pub message: String,
    /// XP amount credited.
    pub xp: u64,
}

/// Ordered toast queue. No cap on length; expiry keeps it bounded in practice.
#[derive(Debug, Default)]
pub struct NotificationState {
    /// Toasts in insertion order.
    pub toasts: Vec<XpToast>,
    /// Ids pushed since the last drain, awaiting expiry scheduling.
    pending_expiry: Vec<u64>,
    /// Disambiguates toasts pushed within the same millisecond.
    next_seq: u64,
}

impl NotificationState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, xp: u64) -> u64 {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let id = millis * 1000 + self.next_seq % 1000;
        self.next_seq += 1;

        self.toasts.push(XpToast {
            id,
            message: message.into(),
            xp,
        });
        self.pending_expiry.push(id);
        id
    }

    /// Remove a toast by id. Absent ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drain the ids that still need an expiry timer.
    pub fn take_pending(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.pending_expiry)
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Schedule removal of a toast after `delay`, regardless of queue mutations
/// in between. The source never cancels these; neither do we.
pub fn schedule_expiry(tx: mpsc::UnboundedSender<Action>, id: u64, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // Receiver gone means the app is shutting down.
        let _ = tx.send(Action::ExpireToast(id));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut queue = NotificationState::default();
        queue.push("Used trading tool", 5);
        queue.push("Liked a trade idea", 2);
        queue.push("Added a comment", 3);

        let messages: Vec<&str> = queue.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Used trading tool", "Liked a trade idea", "Added a comment"]
        );
    }

    #[test]
    fn test_ids_unique_under_rapid_pushes() {
        let mut queue = NotificationState::default();
        let ids: Vec<u64> = (0..50).map(|_| queue.push("Used trading tool", 5)).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_remove_returns_queue_to_prior_length() {
        let mut queue = NotificationState::default();
        queue.push("Liked a trade idea", 2);
        let before = queue.len();
        let id = queue.push("Added a comment", 3);
        queue.remove(id);
        assert_eq!(queue.len(), before);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut queue = NotificationState::default();
        let id = queue.push("Used trading tool", 5);
        queue.remove(id);
        queue.remove(id);
        queue.remove(123456789);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_take_pending_drains() {
        let mut queue = NotificationState::default();
        let a = queue.push("Used trading tool", 5);
        let b = queue.push("Liked a trade idea", 2);
        assert_eq!(queue.take_pending(), vec![a, b]);
        assert!(queue.take_pending().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        schedule_expiry(tx, 42, Duration::from_millis(3000));
        // Let the spawned task register its timer before the clock moves.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        // Yield so the spawned task runs after the timer fires.
        tokio::task::yield_now().await;
        match rx.try_recv() {
            Ok(Action::ExpireToast(id)) => assert_eq!(id, 42),
            other => panic!("expected ExpireToast, got {other:?}"),
        }
    }
}
