/* src/core/src/views.rs */

use crate::catalog::{Catalog, HomeModel, Product, format_price};
use crate::routes::ViewId;

/// Render the markup for one view from its view model. Every view renders
/// from the catalog; none reads back page-authored markup.
pub fn render_view(view: ViewId, catalog: &Catalog) -> String {
  match view {
    ViewId::Home => render_home(catalog.home.as_ref()),
    ViewId::Accessories => render_accessories(&catalog.accessories),
    ViewId::Offers => {
      render_simple_page("Ofertas", "offers-section", "Contenido de ofertas en desarrollo...")
    }
    ViewId::NewProducts => render_simple_page(
      "Productos Nuevos",
      "new-products-section",
      "Contenido de productos nuevos en desarrollo...",
    ),
    ViewId::About => render_simple_page(
      "Quiénes Somos",
      "about-section",
      "Repuestos y accesorios para motociclistas en Pereira desde 2012.",
    ),
    ViewId::Service => {
      render_simple_page("Revisión", "service-section", "Agenda la revisión de tu moto.")
    }
    ViewId::Contact => {
      render_simple_page("Contáctanos", "contact-section", "Escríbenos y te respondemos pronto.")
    }
  }
}

fn render_home(model: Option<&HomeModel>) -> String {
  let Some(model) = model else {
    return "<p>Cargando página de inicio...</p>".to_string();
  };

  let mut out = String::new();
  out.push_str("<section class=\"hero-banner\">");
  out.push_str(&format!("<h1>{}</h1>", escape_html(&model.hero_title)));
  out.push_str(&format!("<p>{}</p>", escape_html(&model.hero_subtitle)));
  out.push_str("</section>");

  out.push_str("<section class=\"categories-section\"><ul>");
  for category in &model.categories {
    out.push_str(&format!("<li>{}</li>", escape_html(category)));
  }
  out.push_str("</ul></section>");

  out.push_str("<section class=\"models-section\"><ul>");
  for m in &model.models {
    out.push_str(&format!("<li>{}</li>", escape_html(m)));
  }
  out.push_str("</ul></section>");

  out.push_str("<section class=\"offers-section\"><div class=\"products-grid\">");
  for product in &model.offers {
    out.push_str(&render_product_card(product));
  }
  out.push_str("</div></section>");
  out
}

fn render_accessories(products: &[Product]) -> String {
  let mut out = String::new();
  out.push_str(&render_page_header("Accesorios"));

  out.push_str("<section class=\"accessories-container\">");
  out.push_str(FILTER_SIDEBAR);

  out.push_str("<div class=\"products-container\"><div class=\"products-grid\">");
  for product in products {
    out.push_str(&render_product_card(product));
  }
  out.push_str("</div></div>");
  out.push_str("</section>");
  out
}

fn render_product_card(product: &Product) -> String {
  let name = escape_html(&product.name);
  let mut out = String::new();
  out.push_str("<div class=\"product-card\">");
  out.push_str(&format!(
    "<div class=\"product-image\"><img src=\"../assets/images/{}\" alt=\"{name}\"></div>",
    escape_html(&product.image),
  ));
  out.push_str("<div class=\"product-info\">");
  out.push_str(&format!("<h3>{name}</h3>"));
  out.push_str(&format!("<p class=\"price\">{}</p>", format_price(product.price)));
  out.push_str(&format!(
    "<button class=\"add-to-cart\" data-id=\"{}\" data-name=\"{name}\" data-price=\"{}\">\
     Agregar al carrito</button>",
    product.id, product.price,
  ));
  out.push_str("</div></div>");
  out
}

fn render_simple_page(title: &str, section_class: &str, body: &str) -> String {
  let mut out = String::new();
  out.push_str(&render_page_header(title));
  out.push_str(&format!(
    "<section class=\"{section_class}\"><p>{}</p></section>",
    escape_html(body),
  ));
  out
}

fn render_page_header(title: &str) -> String {
  format!(
    "<section class=\"page-header\"><div class=\"container\"><h1>{}</h1></div></section>",
    escape_html(title),
  )
}

/// Static filter markup for the accessories view. Filters are presentation
/// only; filtering logic lives with the host.
const FILTER_SIDEBAR: &str = concat!(
  "<div class=\"filter-sidebar\"><h2>Filtrar por</h2>",
  "<div class=\"filter-section\"><h3>Categoría</h3>",
  "<label class=\"filter-checkbox\">",
  "<input type=\"checkbox\" name=\"category\" value=\"manillares\"> Manillares</label>",
  "<label class=\"filter-checkbox\">",
  "<input type=\"checkbox\" name=\"category\" value=\"cascos\"> Cascos</label>",
  "<label class=\"filter-checkbox\">",
  "<input type=\"checkbox\" name=\"category\" value=\"otros\"> Otros</label></div>",
  "<div class=\"filter-section\"><h3>Disponibilidad</h3>",
  "<label class=\"filter-checkbox\">",
  "<input type=\"checkbox\" name=\"availability\" value=\"en-existencia\"> En existencia</label>",
  "<label class=\"filter-checkbox\">",
  "<input type=\"checkbox\" name=\"availability\" value=\"agotado\"> Agotado</label></div>",
  "</div>",
);

/// Minimal HTML escaping for text and attribute positions.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}
