/* src/core/src/app.rs */

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::document::{Document, ProductMeta};
use crate::notify::{NotificationEvent, NotificationKind, Notifier};
use crate::router::Router;
use crate::storage::{CartStorage, hydrate_cart, persist_cart};

/// The storefront: single owner of every piece of mutable state (cart,
/// notification queue, control bindings) and the only writer to storage.
/// Constructed once at startup; hosts route every event through `&mut`
/// methods, which is what keeps storage single-writer on any platform.
pub struct Storefront<D: Document, S: CartStorage> {
  doc: D,
  storage: S,
  router: Router,
  cart: Cart,
  notifier: Notifier,
  /// Controls scanned from the last render. Replaced wholesale on every
  /// view swap, since listeners do not survive subtree replacement.
  bindings: Vec<ProductMeta>,
  /// Host time in milliseconds, advanced by `advance_time`.
  now: u64,
}

impl<D: Document, S: CartStorage> Storefront<D, S> {
  /// Document-ready sequence: counter creation, cart hydration, initial
  /// control binding via the router's first render.
  pub fn start(doc: D, storage: S) -> Self {
    Self::with_catalog(doc, storage, Catalog::default_catalog())
  }

  pub fn with_catalog(mut doc: D, storage: S, catalog: Catalog) -> Self {
    let cart = hydrate_cart(&storage);
    if doc.has_user_account_region() {
      doc.set_cart_counter(cart.total_quantity());
    }
    let router = Router::new(catalog);
    let bindings = router.initialize(&mut doc);
    Self { doc, storage, router, cart, notifier: Notifier::new(), bindings, now: 0 }
  }

  /// Click anywhere in the document. Returns whether the click landed on a
  /// primary-navigation link and was intercepted.
  pub fn on_nav_click(&mut self, href: &str) -> bool {
    match self.router.on_nav_click(&mut self.doc, href) {
      Some(bindings) => {
        self.bindings = bindings;
        true
      }
      None => false,
    }
  }

  /// Browser back/forward arrived; re-render for the now-current path.
  pub fn on_pop_state(&mut self) {
    self.bindings = self.router.on_pop_state(&mut self.doc);
  }

  /// Click on the nth bound add-to-cart control. Returns whether a control
  /// was bound at that position.
  pub fn click_add_to_cart(&mut self, index: usize) -> bool {
    let Some(meta) = self.bindings.get(index).cloned() else {
      return false;
    };
    self.add_item(meta.id, &meta.name, meta.price, 1);
    true
  }

  /// Merge-or-append, persist, project the counter, and confirm with a
  /// notification. Never fails; input validation is the caller's job.
  pub fn add_item(&mut self, id: u64, name: &str, price: u64, quantity: u32) {
    self.cart.add(id, name, price, quantity);
    persist_cart(&mut self.storage, &self.cart);
    self.update_counter();
    self.show_notification(&format!("¡{name} agregado al carrito!"), NotificationKind::Success);
  }

  /// Search-form submit guard: a blank query is rejected with an error
  /// notification. Returns whether submission proceeds.
  pub fn submit_search(&mut self, query: &str) -> bool {
    if query.trim().is_empty() {
      self.show_notification("Ingresa un término de búsqueda", NotificationKind::Error);
      return false;
    }
    true
  }

  /// Fire-and-forget transient notification.
  pub fn show_notification(&mut self, message: &str, kind: NotificationKind) {
    let note = self.notifier.show(message, kind, self.now);
    self.doc.spawn_notification(&note);
  }

  /// Advance host time and apply every notification step now due.
  pub fn advance_time(&mut self, delta_ms: u64) {
    self.now += delta_ms;
    for event in self.notifier.advance(self.now) {
      match event {
        NotificationEvent::Reveal(id) => self.doc.set_notification_visible(id, true),
        NotificationEvent::Dismiss(id) => self.doc.set_notification_visible(id, false),
        NotificationEvent::Remove(id) => self.doc.remove_notification(id),
      }
    }
  }

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  pub fn bindings(&self) -> &[ProductMeta] {
    &self.bindings
  }

  pub fn document(&self) -> &D {
    &self.doc
  }

  /// The host's own surface; mutable so it can apply host-side events
  /// (back/forward, scrolling) before calling back into the storefront.
  pub fn document_mut(&mut self) -> &mut D {
    &mut self.doc
  }

  pub fn router(&self) -> &Router {
    &self.router
  }

  fn update_counter(&mut self) {
    // No user-account region means no counter to project; skip silently.
    if self.doc.has_user_account_region() {
      self.doc.set_cart_counter(self.cart.total_quantity());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::document::tests::FakeDocument;
  use crate::notify::{DISPLAY_MS, FADE_MS, REVEAL_DELAY_MS};
  use crate::storage::{CART_STORAGE_KEY, MemoryStorage};

  fn storefront_at(path: &str) -> Storefront<FakeDocument, MemoryStorage> {
    let doc = FakeDocument::new(path).with_header().with_user_account();
    Storefront::start(doc, MemoryStorage::new())
  }

  #[test]
  fn startup_with_empty_storage_shows_zero() {
    let app = storefront_at("/");
    assert!(app.cart().is_empty());
    assert_eq!(app.document().counter, Some(0));
  }

  #[test]
  fn startup_with_corrupt_storage_shows_zero() {
    let doc = FakeDocument::new("/").with_user_account();
    let storage = MemoryStorage::with_entry(CART_STORAGE_KEY, "][");
    let app = Storefront::start(doc, storage);
    assert!(app.cart().is_empty());
    assert_eq!(app.document().counter, Some(0));
  }

  #[test]
  fn add_item_updates_counter_and_persists() {
    let mut app = storefront_at("/");
    app.add_item(101, "Manillar de motocicleta", 1200, 1);
    assert_eq!(app.document().counter, Some(1));

    app.add_item(101, "Manillar de motocicleta", 1200, 2);
    assert_eq!(app.document().counter, Some(3));
    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart().items()[0].quantity, 3);
  }

  #[test]
  fn counter_is_skipped_without_user_account_region() {
    let doc = FakeDocument::new("/");
    let mut app = Storefront::start(doc, MemoryStorage::new());
    app.add_item(103, "Espejo retrovisor", 500, 1);
    assert_eq!(app.document().counter, None);
    assert_eq!(app.cart().total_quantity(), 1);
  }

  #[test]
  fn add_item_spawns_named_notification() {
    let mut app = storefront_at("/");
    app.add_item(105, "Guantes de gamuza", 900, 1);
    assert_eq!(app.document().notes.len(), 1);
    assert_eq!(app.document().notes[0].1, "¡Guantes de gamuza agregado al carrito!");
  }

  #[test]
  fn notification_lifecycle_through_time() {
    let mut app = storefront_at("/");
    app.show_notification("hola", NotificationKind::Success);
    assert!(!app.document().notes[0].2);

    app.advance_time(REVEAL_DELAY_MS);
    assert!(app.document().notes[0].2);

    app.advance_time(DISPLAY_MS - REVEAL_DELAY_MS);
    assert!(!app.document().notes[0].2);

    app.advance_time(FADE_MS);
    assert!(app.document().notes.is_empty());
  }

  #[test]
  fn blank_search_is_rejected_with_error_notification() {
    let mut app = storefront_at("/");
    assert!(!app.submit_search("   "));
    assert_eq!(app.document().notes.len(), 1);
    assert!(app.submit_search("casco"));
    assert_eq!(app.document().notes.len(), 1);
  }

  #[test]
  fn persisted_cart_survives_restart() {
    let doc = FakeDocument::new("/").with_user_account();
    let mut app = Storefront::start(doc, MemoryStorage::new());
    app.add_item(104, "Casco bicolor", 2100, 2);
    app.add_item(107, "Llavero de cuero", 300, 1);

    let raw = app
      .storage
      .read(CART_STORAGE_KEY)
      .expect("memory storage never fails")
      .expect("cart was persisted");
    let restarted = Storefront::start(
      FakeDocument::new("/").with_user_account(),
      MemoryStorage::with_entry(CART_STORAGE_KEY, &raw),
    );
    assert_eq!(restarted.cart(), app.cart());
    assert_eq!(restarted.document().counter, Some(3));
  }
}
