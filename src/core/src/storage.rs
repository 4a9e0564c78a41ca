/* src/core/src/storage.rs */

use std::collections::HashMap;

use crate::cart::Cart;
use crate::errors::StoreError;

/// The single key the serialized cart lives under. Kept byte-for-byte
/// compatible with values written by earlier releases.
pub const CART_STORAGE_KEY: &str = "carritoMotosPereira";

/// Durable key/value storage consumed by the cart manager. One writer,
/// read once at startup, written after every mutation.
pub trait CartStorage {
  fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
  fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory storage, used by tests and hosts without durable state.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: HashMap<String, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seed a key, e.g. to simulate a previous session.
  pub fn with_entry(key: &str, value: &str) -> Self {
    let mut storage = Self::new();
    storage.entries.insert(key.to_string(), value.to_string());
    storage
  }
}

impl CartStorage for MemoryStorage {
  fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.get(key).cloned())
  }

  fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
    self.entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Load the cart from storage. A missing key, a read failure, or a value
/// that does not decode all reset to the empty cart; none of them surface.
pub fn hydrate_cart<S: CartStorage + ?Sized>(storage: &S) -> Cart {
  match storage.read(CART_STORAGE_KEY) {
    Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
    Ok(None) | Err(_) => Cart::new(),
  }
}

/// Write the full cart under the storage key. Storage is treated as
/// ever-available; a failed write degrades to a skipped persist.
pub fn persist_cart<S: CartStorage + ?Sized>(storage: &mut S, cart: &Cart) {
  if let Ok(raw) = serde_json::to_string(cart) {
    let _ = storage.write(CART_STORAGE_KEY, &raw);
  }
}
