/* src/core/src/notify.rs */

use std::collections::VecDeque;

/// Delay before a spawned notification is revealed (lets the host apply
/// its entry transition).
pub const REVEAL_DELAY_MS: u64 = 10;
/// How long a notification stays visible.
pub const DISPLAY_MS: u64 = 3000;
/// Exit-transition time between dismissal and removal.
pub const FADE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
  Success,
  Error,
}

impl NotificationKind {
  /// Stable identifier, also the host-side style class.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Success => "success",
      Self::Error => "error",
    }
  }
}

/// Generation id. Strictly increasing per `Notifier`, so overlapping
/// notifications stay distinguishable and a later one can supersede an
/// earlier one if a host ever wants that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub id: NotificationId,
  pub message: String,
  pub kind: NotificationKind,
}

/// Lifecycle step the host must apply to an already spawned notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationEvent {
  Reveal(NotificationId),
  Dismiss(NotificationId),
  Remove(NotificationId),
}

impl NotificationEvent {
  pub fn id(self) -> NotificationId {
    match self {
      Self::Reveal(id) | Self::Dismiss(id) | Self::Remove(id) => id,
    }
  }
}

/// Deterministic replacement for fire-and-forget timers: `show` enqueues
/// the three lifecycle steps at fixed offsets, the host pumps them with
/// `advance`. Overlapping notifications run independently.
#[derive(Debug, Default)]
pub struct Notifier {
  next_id: u64,
  /// Due-time queue, kept sorted by (due, insertion order).
  pending: VecDeque<(u64, NotificationEvent)>,
}

impl Notifier {
  pub fn new() -> Self {
    Self::default()
  }

  /// Allocate a notification and schedule its lifecycle relative to `now`.
  /// Fire-and-forget: nothing awaits or cancels it.
  pub fn show(&mut self, message: &str, kind: NotificationKind, now: u64) -> Notification {
    let id = NotificationId(self.next_id);
    self.next_id += 1;
    self.enqueue(now + REVEAL_DELAY_MS, NotificationEvent::Reveal(id));
    self.enqueue(now + DISPLAY_MS, NotificationEvent::Dismiss(id));
    self.enqueue(now + DISPLAY_MS + FADE_MS, NotificationEvent::Remove(id));
    Notification { id, message: message.to_string(), kind }
  }

  /// Drain every step due at or before `now`, in schedule order.
  pub fn advance(&mut self, now: u64) -> Vec<NotificationEvent> {
    let mut due = Vec::new();
    while let Some((at, _)) = self.pending.front() {
      if *at > now {
        break;
      }
      if let Some((_, event)) = self.pending.pop_front() {
        due.push(event);
      }
    }
    due
  }

  pub fn pending(&self) -> usize {
    self.pending.len()
  }

  fn enqueue(&mut self, due: u64, event: NotificationEvent) {
    // Stable insertion: equal due times keep scheduling order.
    let at = self.pending.partition_point(|(d, _)| *d <= due);
    self.pending.insert(at, (due, event));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lifecycle_fires_at_fixed_offsets() {
    let mut notifier = Notifier::new();
    let note = notifier.show("¡Casco retro agregado al carrito!", NotificationKind::Success, 0);

    assert!(notifier.advance(REVEAL_DELAY_MS - 1).is_empty());
    assert_eq!(notifier.advance(REVEAL_DELAY_MS), vec![NotificationEvent::Reveal(note.id)]);
    assert!(notifier.advance(DISPLAY_MS - 1).is_empty());
    assert_eq!(notifier.advance(DISPLAY_MS), vec![NotificationEvent::Dismiss(note.id)]);
    assert_eq!(notifier.advance(DISPLAY_MS + FADE_MS), vec![NotificationEvent::Remove(note.id)]);
    assert_eq!(notifier.pending(), 0);
  }

  #[test]
  fn overlapping_notifications_run_independently() {
    let mut notifier = Notifier::new();
    let first = notifier.show("uno", NotificationKind::Success, 0);
    let second = notifier.show("dos", NotificationKind::Error, 1000);
    assert!(first.id < second.id);

    // First reveals alone, second reveals 1000 later.
    assert_eq!(notifier.advance(500), vec![NotificationEvent::Reveal(first.id)]);
    assert_eq!(notifier.advance(1010), vec![NotificationEvent::Reveal(second.id)]);

    // Both dismissals and removals interleave by due time.
    let rest = notifier.advance(u64::MAX);
    assert_eq!(
      rest,
      vec![
        NotificationEvent::Dismiss(first.id),
        NotificationEvent::Remove(first.id),
        NotificationEvent::Dismiss(second.id),
        NotificationEvent::Remove(second.id),
      ],
    );
  }

  #[test]
  fn ids_are_strictly_increasing() {
    let mut notifier = Notifier::new();
    let a = notifier.show("a", NotificationKind::Success, 0);
    let b = notifier.show("b", NotificationKind::Success, 0);
    let c = notifier.show("c", NotificationKind::Error, 0);
    assert!(a.id < b.id && b.id < c.id);
  }
}
