/* src/core/src/cart.rs */

use serde::{Deserialize, Serialize};

/// One cart line. `id` is the identity key: a product appears at most once,
/// repeated adds bump `quantity` and never touch `name` or `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
  pub id: u64,
  pub name: String,
  /// Smallest currency unit, no decimals.
  pub price: u64,
  pub quantity: u32,
}

/// Ordered cart contents. Serializes as a bare JSON array so the stored
/// value stays `[{"id":…,"name":…,"price":…,"quantity":…}, …]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self { items: Vec::new() }
  }

  /// Merge-or-append by `id`. Callers are responsible for well-formed
  /// inputs; this never fails.
  pub fn add(&mut self, id: u64, name: &str, price: u64, quantity: u32) {
    if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
      item.quantity += quantity;
    } else {
      self.items.push(CartItem { id, name: name.to_string(), price, quantity });
    }
  }

  /// Sum of all line quantities, the value the counter displays.
  pub fn total_quantity(&self) -> u64 {
    self.items.iter().map(|item| u64::from(item.quantity)).sum()
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repeated_id_merges_into_one_line() {
    let mut cart = Cart::new();
    cart.add(101, "Manillar de motocicleta", 1200, 2);
    cart.add(101, "Manillar de motocicleta", 1200, 3);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 5);
  }

  #[test]
  fn merge_never_overwrites_name_or_price() {
    let mut cart = Cart::new();
    cart.add(102, "Casco LS2 Flame", 3600, 1);
    cart.add(102, "renombrado", 1, 1);
    assert_eq!(cart.items()[0].name, "Casco LS2 Flame");
    assert_eq!(cart.items()[0].price, 3600);
    assert_eq!(cart.items()[0].quantity, 2);
  }

  #[test]
  fn distinct_ids_keep_order_and_sum() {
    let mut cart = Cart::new();
    cart.add(103, "Espejo retrovisor", 500, 1);
    cart.add(105, "Guantes de gamuza", 900, 4);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.items()[0].id, 103);
    assert_eq!(cart.items()[1].id, 105);
    assert_eq!(cart.total_quantity(), 5);
  }

  #[test]
  fn empty_cart_counts_zero() {
    let cart = Cart::new();
    assert!(cart.is_empty());
    assert_eq!(cart.total_quantity(), 0);
  }

  #[test]
  fn serializes_as_bare_array() {
    let mut cart = Cart::new();
    cart.add(107, "Llavero de cuero", 300, 1);
    let raw = serde_json::to_string(&cart).expect("cart serialization");
    assert!(raw.starts_with('['), "expected array, got {raw}");
    let back: Cart = serde_json::from_str(&raw).expect("cart deserialization");
    assert_eq!(back, cart);
  }
}
