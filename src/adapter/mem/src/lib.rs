/* src/adapter/mem/src/lib.rs */

mod storage;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use regex::Regex;
use tienda_core::document::{Document, MountPlacement, ProductMeta};
use tienda_core::notify::{Notification, NotificationId, NotificationKind};

pub use storage::FileStorage;

/// Re-export the core for convenience
pub use tienda_core;

/// One primary-navigation anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
  pub href: String,
  pub active: bool,
}

/// One live notification element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationNode {
  pub id: NotificationId,
  pub message: String,
  pub kind: NotificationKind,
  pub visible: bool,
}

/// In-memory page: the reference `Document` host. Models exactly what the
/// core consumes — location and history, an optional header, the primary
/// nav, an optional user-account region with its counter, the mount slot,
/// live notifications, and the scroll position.
#[derive(Debug)]
pub struct MemoryDocument {
  /// History entries; `cursor` points at the current one.
  entries: Vec<String>,
  cursor: usize,
  header: bool,
  user_account: bool,
  nav: Vec<NavLink>,
  mount: Option<String>,
  mount_placement: Option<MountPlacement>,
  counter: Option<u64>,
  notifications: Vec<NotificationNode>,
  scroll_y: u32,
}

impl MemoryDocument {
  /// A page currently located at `path`.
  pub fn new(path: &str) -> Self {
    Self {
      entries: vec![path.to_string()],
      cursor: 0,
      header: false,
      user_account: false,
      nav: Vec::new(),
      mount: None,
      mount_placement: None,
      counter: None,
      notifications: Vec::new(),
      scroll_y: 0,
    }
  }

  pub fn with_header(mut self) -> Self {
    self.header = true;
    self
  }

  pub fn with_user_account(mut self) -> Self {
    self.user_account = true;
    self
  }

  pub fn with_nav_link(mut self, href: &str) -> Self {
    self.nav.push(NavLink { href: href.to_string(), active: false });
    self
  }

  /// A page with the storefront's standard chrome: header, user-account
  /// region, and one nav link per route.
  pub fn standard(path: &str) -> Self {
    let mut doc = Self::new(path).with_header().with_user_account();
    for href in
      ["/", "/accesorios", "/ofertas", "/productos-nuevos", "/quienes-somos", "/contactanos"]
    {
      doc = doc.with_nav_link(href);
    }
    doc
  }

  /// Browser back. Returns whether a previous entry existed.
  pub fn back(&mut self) -> bool {
    if self.cursor == 0 {
      return false;
    }
    self.cursor -= 1;
    true
  }

  /// Browser forward. Returns whether a later entry existed.
  pub fn forward(&mut self) -> bool {
    if self.cursor + 1 >= self.entries.len() {
      return false;
    }
    self.cursor += 1;
    true
  }

  pub fn history(&self) -> &[String] {
    &self.entries
  }

  pub fn mount_html(&self) -> Option<&str> {
    self.mount.as_deref()
  }

  pub fn mount_placement(&self) -> Option<MountPlacement> {
    self.mount_placement
  }

  pub fn counter(&self) -> Option<u64> {
    self.counter
  }

  pub fn active_nav(&self) -> Option<&str> {
    self.nav.iter().find(|link| link.active).map(|link| link.href.as_str())
  }

  pub fn notifications(&self) -> &[NotificationNode] {
    &self.notifications
  }

  pub fn scroll_y(&self) -> u32 {
    self.scroll_y
  }

  pub fn scroll_to(&mut self, y: u32) {
    self.scroll_y = y;
  }
}

impl Document for MemoryDocument {
  fn current_path(&self) -> String {
    self.entries[self.cursor].clone()
  }

  fn push_history(&mut self, path: &str) {
    // A push drops any forward entries, like pushState.
    self.entries.truncate(self.cursor + 1);
    self.entries.push(path.to_string());
    self.cursor += 1;
  }

  fn has_header(&self) -> bool {
    self.header
  }

  fn has_mount(&self) -> bool {
    self.mount.is_some()
  }

  fn create_mount(&mut self, placement: MountPlacement) {
    self.mount = Some(String::new());
    self.mount_placement = Some(placement);
  }

  fn set_mount_html(&mut self, html: &str) {
    self.mount = Some(html.to_string());
  }

  fn nav_links(&self) -> Vec<String> {
    self.nav.iter().map(|link| link.href.clone()).collect()
  }

  fn set_active_nav(&mut self, href: Option<&str>) {
    for link in &mut self.nav {
      link.active = Some(link.href.as_str()) == href;
    }
  }

  fn add_to_cart_controls(&self) -> Vec<ProductMeta> {
    let Some(html) = self.mount.as_deref() else {
      return Vec::new();
    };
    control_re()
      .captures_iter(html)
      .filter_map(|caps| {
        Some(ProductMeta {
          id: caps[1].parse().ok()?,
          name: unescape_html(&caps[2]),
          price: caps[3].parse().ok()?,
        })
      })
      .collect()
  }

  fn has_user_account_region(&self) -> bool {
    self.user_account
  }

  fn set_cart_counter(&mut self, total: u64) {
    if self.user_account {
      self.counter = Some(total);
    }
  }

  fn spawn_notification(&mut self, note: &Notification) {
    self.notifications.push(NotificationNode {
      id: note.id,
      message: note.message.clone(),
      kind: note.kind,
      visible: false,
    });
  }

  fn set_notification_visible(&mut self, id: NotificationId, visible: bool) {
    if let Some(node) = self.notifications.iter_mut().find(|node| node.id == id) {
      node.visible = visible;
    }
  }

  fn remove_notification(&mut self, id: NotificationId) {
    self.notifications.retain(|node| node.id != id);
  }

  fn scroll_to_top(&mut self) {
    self.scroll_y = 0;
  }
}

/// Add-to-cart controls as the core renderer emits them. The attribute
/// order is fixed by `tienda_core::views`, so a single pattern suffices.
fn control_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(
      r#"<button class="add-to-cart" data-id="(\d+)" data-name="([^"]*)" data-price="(\d+)">"#,
    )
    .expect("control pattern")
  })
}

/// Inverse of the renderer's `escape_html`, for attribute values read back
/// out of the mount markup.
fn unescape_html(input: &str) -> String {
  input
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&amp;", "&")
}
