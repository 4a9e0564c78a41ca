/* src/core/src/document.rs */

use crate::notify::{Notification, NotificationId};

/// Metadata attached to one add-to-cart control, as authored on the
/// control itself. Controls are reported in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductMeta {
  pub id: u64,
  pub name: String,
  pub price: u64,
}

/// Where the router places the mount element when it has to create one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPlacement {
  /// Directly after the page header.
  AfterHeader,
  /// At the end of the document body (no header present).
  BodyEnd,
}

/// The page surface the core drives. Hosts implement this once; all DOM,
/// history, and presentation detail stays behind it.
///
/// Every method is infallible on purpose: a missing collaborator is the
/// host's cue to apply its documented fallback (or do nothing), never to
/// fail.
pub trait Document {
  /// The location's current path.
  fn current_path(&self) -> String;

  /// Push a new history entry for `path` without a reload. Back/forward
  /// stay host-owned; the host calls back into the storefront on pop.
  fn push_history(&mut self, path: &str);

  fn has_header(&self) -> bool;

  fn has_mount(&self) -> bool;

  /// Create the single mount element. Called at most once, only when
  /// `has_mount` is false.
  fn create_mount(&mut self, placement: MountPlacement);

  /// Replace the mount's entire subtree. Listeners in the old subtree are
  /// gone after this; callers must rebind.
  fn set_mount_html(&mut self, html: &str);

  /// `href` values of the primary-navigation links, in document order.
  fn nav_links(&self) -> Vec<String>;

  /// Highlight exactly the given link, clearing every other highlight.
  /// `None` clears all.
  fn set_active_nav(&mut self, href: Option<&str>);

  /// Scan the whole document for add-to-cart controls.
  fn add_to_cart_controls(&self) -> Vec<ProductMeta>;

  fn has_user_account_region(&self) -> bool;

  /// Display the total cart quantity, creating the counter element under
  /// the user-account region if absent. Only called when
  /// `has_user_account_region` is true.
  fn set_cart_counter(&mut self, total: u64);

  /// Insert a notification element, initially hidden.
  fn spawn_notification(&mut self, note: &Notification);

  fn set_notification_visible(&mut self, id: NotificationId, visible: bool);

  fn remove_notification(&mut self, id: NotificationId);

  fn scroll_to_top(&mut self);
}
