/* src/core/src/lib.rs */

pub mod app;
pub mod cart;
pub mod catalog;
pub mod document;
pub mod errors;
pub mod notify;
pub mod router;
pub mod routes;
pub mod storage;
pub mod views;

// Re-exports for ergonomic use
pub use app::Storefront;
pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, HomeModel, Product, format_price};
pub use document::{Document, MountPlacement, ProductMeta};
pub use errors::{StoreError, StoreErrorKind};
pub use notify::{
  DISPLAY_MS, FADE_MS, Notification, NotificationEvent, NotificationId, NotificationKind,
  Notifier, REVEAL_DELAY_MS,
};
pub use router::Router;
pub use routes::{RouteTable, ViewId, active_nav_href, normalize_path};
pub use storage::{CART_STORAGE_KEY, CartStorage, MemoryStorage, hydrate_cart, persist_cart};
pub use views::{escape_html, render_view};
