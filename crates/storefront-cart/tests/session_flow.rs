//! End-to-end session: listing, drawer, checkout sharing one provider.

use pretty_assertions::assert_eq;
use storefront_cart::prelude::*;

fn catalog() -> Vec<Product> {
    let json = r#"[
        {"id": "citrine", "title": "Citrine Tumble", "price": 100, "images": ["/c.jpg"], "stock": 5, "category": "wealth"},
        {"id": "amethyst", "title": "Amethyst Cluster", "price": 250, "images": [], "stock": 1, "category": "crown-chakra"},
        {"id": "tourmaline", "title": "Black Tourmaline", "price": 180, "stock": 0, "category": "protection"}
    ]"#;
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_browse_to_whatsapp() {
    let config = StorefrontConfig::default();
    let currency = config.currency().unwrap();
    let provider = CartProvider::new(currency);

    let listing = ProductListing::new(provider.handle(), currency);
    let drawer = CartDrawer::new(provider.handle());
    let checkout = Checkout::new(provider.handle(), WhatsAppCheckout::from_config(&config.checkout));

    let products = catalog();
    let (citrine, amethyst, tourmaline) = (&products[0], &products[1], &products[2]);

    assert_eq!(listing.control_for(tourmaline).unwrap(), ListingControl::OutOfStock);

    listing.add(citrine).unwrap();
    listing.add(citrine).unwrap();
    listing.add(amethyst).unwrap();
    assert!(listing.increase(amethyst).is_err());

    let view = drawer.view().unwrap();
    assert_eq!(view.badge, 2);
    assert_eq!(view.total_items, 3);
    assert_eq!(view.total, Money::from_major(450, Currency::INR));
    assert_eq!(view.rows[1].image, PLACEHOLDER_IMAGE);

    drawer.decrease(&"citrine".into()).unwrap();
    drawer.decrease(&"citrine".into()).unwrap();

    let details = DeliveryDetails::new("Asha", "9876543210", "12 MG Road", "Pune", "411001");
    let handoff = checkout.place_order(&details).unwrap();

    assert!(handoff.message.contains("\u{2022} Citrine Tumble \u{00d7} 1 = \u{20b9}100"));
    assert!(handoff.message.contains("\u{1f4b0} Total: \u{20b9}350"));
    assert!(handoff.url.starts_with("https://wa.me/919876543210?text=%F0%9F%9B%92"));
}

#[test]
fn test_scenario_merge_by_id() {
    let provider = CartProvider::new(Currency::INR);
    let cart = provider.handle();
    let price = Money::from_major(100, Currency::INR);

    cart.add_to_cart(LineItem::new("a", "A", price, "", 1).unwrap()).unwrap();
    cart.add_to_cart(LineItem::new("a", "A", price, "", 2).unwrap()).unwrap();

    let items = cart.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity(), 3);
    assert_eq!(cart.total_items().unwrap(), 3);
    assert_eq!(cart.total_price().unwrap(), Money::from_major(300, Currency::INR));
}

#[test]
fn test_scenario_decrease_on_empty_cart() {
    let provider = CartProvider::new(Currency::INR);
    let cart = provider.handle();

    assert_eq!(cart.decrease_qty(&"x".into()).unwrap(), CartChange::Unchanged);
    assert!(cart.items().unwrap().is_empty());
}

#[test]
fn test_scenario_remove_one_of_two() {
    let provider = CartProvider::new(Currency::INR);
    let cart = provider.handle();
    let price = Money::from_major(10, Currency::INR);

    cart.add_to_cart(LineItem::new("a", "A", price, "", 1).unwrap()).unwrap();
    cart.add_to_cart(LineItem::new("b", "B", price, "", 1).unwrap()).unwrap();
    cart.remove_item(&"a".into()).unwrap();

    let items = cart.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_str(), "b");
    assert_eq!(cart.total_items().unwrap(), 1);
}

#[test]
fn test_sessions_are_independent() {
    let first = CartProvider::new(Currency::INR);
    let second = CartProvider::new(Currency::INR);
    let product = Product::new("p", "P", 10.0, 3);

    ProductListing::new(first.handle(), Currency::INR).add(&product).unwrap();

    assert_eq!(first.snapshot().unwrap().total_items(), 1);
    assert!(second.snapshot().unwrap().is_empty());
    assert_ne!(first.session_id(), second.session_id());
}

#[test]
fn test_views_fail_loudly_after_session_end() {
    let provider = CartProvider::new(Currency::INR);
    let drawer = CartDrawer::new(provider.handle());
    drop(provider);

    assert_eq!(drawer.view(), Err(CommerceError::CartUnavailable));
}
