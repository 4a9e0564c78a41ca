/* src/core/src/catalog.rs */

use serde::{Deserialize, Serialize};

/// One sellable product, the view-model unit behind product cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: u64,
  pub name: String,
  /// Smallest currency unit, no decimals.
  pub price: u64,
  /// Image path relative to the assets root.
  pub image: String,
}

impl Product {
  pub fn new(id: u64, name: &str, price: u64, image: &str) -> Self {
    Self { id, name: name.to_string(), price, image: image.to_string() }
  }
}

/// View model for the home view. The home view always renders from this,
/// never from page-authored markup; when it is absent the router shows a
/// placeholder instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeModel {
  pub hero_title: String,
  pub hero_subtitle: String,
  pub categories: Vec<String>,
  pub models: Vec<String>,
  pub offers: Vec<Product>,
}

/// All view-model data the renderers consume. Read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
  pub accessories: Vec<Product>,
  pub home: Option<HomeModel>,
}

impl Catalog {
  /// Empty catalog: every view renders, the home view shows its
  /// placeholder.
  pub fn empty() -> Self {
    Self { accessories: Vec::new(), home: None }
  }

  /// The storefront's stock catalog.
  pub fn default_catalog() -> Self {
    let accessories = vec![
      Product::new(101, "Manillar de motocicleta", 1200, "manillar.jpg"),
      Product::new(102, "Casco LS2 Flame", 3600, "casco_ls2.jpg"),
      Product::new(103, "Espejo retrovisor", 500, "espejo.jpg"),
      Product::new(104, "Casco bicolor", 2100, "casco_bicolor.jpg"),
      Product::new(105, "Guantes de gamuza", 900, "guantes.jpg"),
      Product::new(106, "Bolsa sobredepósito", 1500, "bolsa.jpg"),
      Product::new(107, "Llavero de cuero", 300, "llavero.jpg"),
      Product::new(108, "Casco retro", 2100, "casco_retro.jpg"),
    ];
    let home = HomeModel {
      hero_title: "Motos Pereira".to_string(),
      hero_subtitle: "Repuestos y accesorios para tu moto".to_string(),
      categories: vec![
        "Cascos".to_string(),
        "Manillares".to_string(),
        "Guantes".to_string(),
        "Equipaje".to_string(),
      ],
      models: vec![
        "Pulsar NS 200".to_string(),
        "Duke 390".to_string(),
        "MT-03".to_string(),
        "Gixxer 250".to_string(),
      ],
      offers: vec![
        Product::new(108, "Casco retro", 2100, "casco_retro.jpg"),
        Product::new(106, "Bolsa sobredepósito", 1500, "bolsa.jpg"),
      ],
    };
    Self { accessories, home: Some(home) }
  }
}

/// Display form of a price: `$` plus thousands separators, no decimals.
pub fn format_price(price: u64) -> String {
  let digits = price.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
  out.push('$');
  let lead = digits.len() % 3;
  for (i, ch) in digits.chars().enumerate() {
    if i != 0 && (i + 3 - lead) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn price_formatting() {
    assert_eq!(format_price(0), "$0");
    assert_eq!(format_price(300), "$300");
    assert_eq!(format_price(1200), "$1,200");
    assert_eq!(format_price(43600), "$43,600");
    assert_eq!(format_price(1234567), "$1,234,567");
  }

  #[test]
  fn default_catalog_shape() {
    let catalog = Catalog::default_catalog();
    assert_eq!(catalog.accessories.len(), 8);
    assert_eq!(catalog.accessories[0].id, 101);
    let home = catalog.home.expect("stock catalog has a home model");
    assert!(!home.offers.is_empty());
  }
}
