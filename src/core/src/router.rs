/* src/core/src/router.rs */

use crate::catalog::Catalog;
use crate::document::{Document, MountPlacement, ProductMeta};
use crate::routes::{RouteTable, ViewId, active_nav_href, normalize_path};
use crate::views::render_view;

/// Multi-page illusion inside one loaded document: resolves paths through
/// the route table and swaps views into the single mount element.
///
/// The router keeps no navigation state of its own; the displayed view is
/// always a pure function of the document's current path.
pub struct Router {
  table: RouteTable,
  catalog: Catalog,
}

impl Router {
  pub fn new(catalog: Catalog) -> Self {
    Self { table: RouteTable::new(), catalog }
  }

  pub fn table(&self) -> &RouteTable {
    &self.table
  }

  /// Ensure the mount exists (after the header, or at the body end when
  /// there is none) and load the view for the current path.
  pub fn initialize<D: Document>(&self, doc: &mut D) -> Vec<ProductMeta> {
    if !doc.has_mount() {
      let placement =
        if doc.has_header() { MountPlacement::AfterHeader } else { MountPlacement::BodyEnd };
      doc.create_mount(placement);
    }
    let path = doc.current_path();
    self.load_view(doc, &path)
  }

  /// Intercepted click on a primary-navigation link: push a history entry
  /// and load the target view. Clicks whose `href` is not a nav link are
  /// left to the host (returns `None`, nothing intercepted).
  pub fn on_nav_click<D: Document>(&self, doc: &mut D, href: &str) -> Option<Vec<ProductMeta>> {
    if !doc.nav_links().iter().any(|link| link == href) {
      return None;
    }
    doc.push_history(href);
    Some(self.load_view(doc, href))
  }

  /// Browser back/forward: load the now-current path without pushing a new
  /// history entry.
  pub fn on_pop_state<D: Document>(&self, doc: &mut D) -> Vec<ProductMeta> {
    let path = doc.current_path();
    self.load_view(doc, &path)
  }

  /// Normalize, resolve (home fallback), render-and-bind, highlight the
  /// matching nav link, scroll to the top.
  ///
  /// Render and bind are one composite step: the returned controls are the
  /// ones scanned from the freshly injected markup, so a caller cannot
  /// render without picking up the new bindings.
  pub fn load_view<D: Document>(&self, doc: &mut D, path: &str) -> Vec<ProductMeta> {
    let path = normalize_path(path);
    let view = self.table.resolve(&path);
    doc.set_mount_html(&render_view(view, &self.catalog));

    let links = doc.nav_links();
    doc.set_active_nav(active_nav_href(&links, &path));
    doc.scroll_to_top();
    doc.add_to_cart_controls()
  }

  /// The view a path displays, without side effects.
  pub fn resolve(&self, path: &str) -> ViewId {
    self.table.resolve(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::document::tests::FakeDocument;

  #[test]
  fn creates_mount_after_header_when_present() {
    let mut doc = FakeDocument::new("/").with_header();
    Router::new(Catalog::empty()).initialize(&mut doc);
    assert_eq!(doc.mount_placement, Some(MountPlacement::AfterHeader));
  }

  #[test]
  fn creates_mount_at_body_end_without_header() {
    let mut doc = FakeDocument::new("/");
    Router::new(Catalog::empty()).initialize(&mut doc);
    assert_eq!(doc.mount_placement, Some(MountPlacement::BodyEnd));
  }

  #[test]
  fn existing_mount_is_reused() {
    let mut doc = FakeDocument::new("/").with_mount();
    Router::new(Catalog::empty()).initialize(&mut doc);
    assert_eq!(doc.mount_placement, None);
  }

  #[test]
  fn unknown_path_renders_home() {
    let catalog = Catalog::default_catalog();
    let router = Router::new(catalog.clone());
    let mut doc = FakeDocument::new("/no-existe").with_mount();
    router.initialize(&mut doc);
    assert_eq!(doc.mount_html, render_view(ViewId::Home, &catalog));
  }

  #[test]
  fn suffixed_and_bare_paths_highlight_the_same_link() {
    let router = Router::new(Catalog::default_catalog());
    let mut doc =
      FakeDocument::new("/").with_mount().with_nav_links(&["/", "/accesorios.html", "/ofertas"]);

    router.load_view(&mut doc, "/accesorios.html");
    assert_eq!(doc.active_nav.as_deref(), Some("/accesorios.html"));
    router.load_view(&mut doc, "/accesorios");
    assert_eq!(doc.active_nav.as_deref(), Some("/accesorios.html"));
  }

  #[test]
  fn load_view_scrolls_to_top() {
    let router = Router::new(Catalog::default_catalog());
    let mut doc = FakeDocument::new("/").with_mount();
    doc.scroll_y = 640;
    router.load_view(&mut doc, "/ofertas");
    assert_eq!(doc.scroll_y, 0);
  }

  #[test]
  fn non_nav_click_is_not_intercepted() {
    let router = Router::new(Catalog::default_catalog());
    let mut doc = FakeDocument::new("/").with_mount().with_nav_links(&["/", "/ofertas"]);
    assert!(router.on_nav_click(&mut doc, "/fuera-del-nav").is_none());
    assert_eq!(doc.history, vec!["/".to_string()]);
  }

  #[test]
  fn nav_click_pushes_history_and_loads() {
    let catalog = Catalog::default_catalog();
    let router = Router::new(catalog.clone());
    let mut doc = FakeDocument::new("/").with_mount().with_nav_links(&["/", "/ofertas"]);
    let controls = router.on_nav_click(&mut doc, "/ofertas");
    assert!(controls.is_some());
    assert_eq!(doc.current_path(), "/ofertas");
    assert_eq!(doc.history.len(), 2);
    assert_eq!(doc.mount_html, render_view(ViewId::Offers, &catalog));
  }
}
