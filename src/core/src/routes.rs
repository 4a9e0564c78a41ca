/* src/core/src/routes.rs */

/// Logical views the router can display.
///
/// `as_str` yields the stable view identifier used in markup and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
  Home,
  Accessories,
  Offers,
  NewProducts,
  About,
  Service,
  Contact,
}

impl ViewId {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Home => "inicio",
      Self::Accessories => "accesorios",
      Self::Offers => "ofertas",
      Self::NewProducts => "productos-nuevos",
      Self::About => "quienes-somos",
      Self::Service => "revision",
      Self::Contact => "contacto",
    }
  }
}

/// Static path -> view mapping. Immutable after construction.
pub struct RouteTable {
  entries: Vec<(&'static str, ViewId)>,
}

impl RouteTable {
  /// The storefront's route table.
  pub fn new() -> Self {
    Self {
      entries: vec![
        ("/", ViewId::Home),
        ("/accesorios", ViewId::Accessories),
        ("/ofertas", ViewId::Offers),
        ("/productos-nuevos", ViewId::NewProducts),
        ("/quienes-somos", ViewId::About),
        ("/revision", ViewId::Service),
        ("/contactanos", ViewId::Contact),
      ],
    }
  }

  /// Resolve a raw path to a view. Unknown paths fall back to the home
  /// view; that is deliberate, not an error.
  pub fn resolve(&self, path: &str) -> ViewId {
    let path = normalize_path(path);
    self
      .entries
      .iter()
      .find(|(route, _)| *route == path)
      .map_or(ViewId::Home, |(_, view)| *view)
  }

  pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.entries.iter().map(|(route, _)| *route)
  }
}

impl Default for RouteTable {
  fn default() -> Self {
    Self::new()
  }
}

/// Normalize a link or location path: strip a trailing `.html` suffix and
/// ensure a leading `/`. Pages are authored both ways.
pub fn normalize_path(path: &str) -> String {
  let path = path.strip_suffix(".html").unwrap_or(path);
  if path.starts_with('/') { path.to_string() } else { format!("/{path}") }
}

/// Pick the nav link to highlight for a normalized path: an exact match,
/// or the `.html`-suffixed spelling.
pub fn active_nav_href<'a>(links: &'a [String], path: &str) -> Option<&'a str> {
  let suffixed = format!("{path}.html");
  links.iter().find(|href| *href == path || **href == suffixed).map(String::as_str)
}
