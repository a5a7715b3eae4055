//! Menu page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use menu_cart_core::{CatalogueItem, Storefront};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::view::{CheckoutBadgeTemplate, QuantityLabelTemplate};

/// Menu card display data for templates.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
    pub quantity_label_html: String,
}

impl MenuItemView {
    fn new(item: &CatalogueItem, quantity: u32) -> askama::Result<Self> {
        let label = QuantityLabelTemplate {
            item_id: item.id.to_string(),
            quantity,
            oob: false,
        };
        Ok(Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price.display(),
            description: item.description.clone(),
            image_url: item.image_ref.clone(),
            quantity_label_html: label.render()?,
        })
    }
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub items: Vec<MenuItemView>,
    pub badge_html: String,
}

impl MenuTemplate {
    fn from_storefront(storefront: &Storefront) -> askama::Result<Self> {
        let cart = storefront.cart();
        let items = storefront
            .catalogue()
            .iter()
            .map(|item| MenuItemView::new(item, cart.quantity_of(&item.id)))
            .collect::<askama::Result<Vec<_>>>()?;
        let badge = CheckoutBadgeTemplate {
            total_quantity: cart.total_quantity(),
            oob: false,
        };
        Ok(Self {
            items,
            badge_html: badge.render()?,
        })
    }
}

/// Display the menu.
///
/// Until the catalogue has loaded (or if loading failed) the menu is empty.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<MenuTemplate> {
    let storefront = state.storefront().lock().await;
    Ok(MenuTemplate::from_storefront(&storefront)?)
}
