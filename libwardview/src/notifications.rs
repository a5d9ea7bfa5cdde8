//! Header notification badge
//!
//! A small counter paired with the alert panel over the bus: clicking the
//! bell clears the badge and publishes `showNotifications`; the alert panel
//! publishes `resetNotificationCount` when it is done, which restores the
//! initial count.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::bus::{EventBus, PublishReport, Subscription};
use crate::topic::Topic;

/// Badge count shown before any interaction
pub const DEFAULT_INITIAL_COUNT: u32 = 1;

pub struct NotificationBadge {
    count: Arc<AtomicU32>,
    initial: u32,
    bus: EventBus,
    _reset: Subscription,
}

impl NotificationBadge {
    /// Mount a badge with the default initial count
    pub fn mount(bus: &EventBus) -> Self {
        Self::with_initial(bus, DEFAULT_INITIAL_COUNT)
    }

    /// Mount a badge that starts at, and resets to, `initial`
    pub fn with_initial(bus: &EventBus, initial: u32) -> Self {
        let count = Arc::new(AtomicU32::new(initial));
        let target = Arc::clone(&count);
        let reset = bus.subscribe(Topic::ResetNotificationCount, move |_event| {
            target.store(initial, Ordering::SeqCst);
            tracing::debug!(count = initial, "notification count reset");
        });

        Self {
            count,
            initial,
            bus: bus.clone(),
            _reset: reset,
        }
    }

    pub fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn has_unread(&self) -> bool {
        self.count() > 0
    }

    /// Clear the badge and ask the alert panel to open
    pub fn click_bell(&self) -> PublishReport {
        self.count.store(0, Ordering::SeqCst);
        self.bus.publish(Topic::ShowNotifications)
    }
}

impl std::fmt::Debug for NotificationBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBadge")
            .field("count", &self.count())
            .field("initial", &self.initial)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_starts_at_one() {
        let bus = EventBus::new();
        let badge = NotificationBadge::mount(&bus);
        assert_eq!(badge.count(), 1);
        assert!(badge.has_unread());
    }

    #[test]
    fn test_bell_clears_and_publishes() {
        let bus = EventBus::new();
        let opened = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&opened);
        let _panel = bus.subscribe(Topic::ShowNotifications, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let badge = NotificationBadge::mount(&bus);

        let report = badge.click_bell();

        assert_eq!(report.delivered, 1);
        assert_eq!(badge.count(), 0);
        assert_eq!(opened.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_never_negative() {
        let bus = EventBus::new();
        let badge = NotificationBadge::mount(&bus);

        for _ in 0..5 {
            badge.click_bell();
        }
        assert_eq!(badge.count(), 0);
    }

    #[test]
    fn test_reset_event_restores_initial() {
        let bus = EventBus::new();
        let badge = NotificationBadge::with_initial(&bus, 3);
        badge.click_bell();

        bus.publish(Topic::ResetNotificationCount);

        assert_eq!(badge.count(), 3);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let bus = EventBus::new();
        let badge = NotificationBadge::mount(&bus);
        assert_eq!(bus.subscriber_count(Topic::ResetNotificationCount), 1);

        drop(badge);
        assert_eq!(bus.subscriber_count(Topic::ResetNotificationCount), 0);
    }
}
