//! Storefront cart aggregation model
//!
//! Pure in-memory model shared by the storefront client and demo tooling.
//! The cart tracks line identity and quantities only; money math happens
//! server side in the pricing module.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product reference carried by a cart line
///
/// Tagged with `kind` so clients can tell catalog products apart from
/// synthetic half-and-half pizzas assembled in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CartProduct {
    #[serde(rename = "simple")]
    Simple {
        id: String,
        name: String,
        unit_price: f64,
        category: String,
    },
    #[serde(rename = "halfAndHalf")]
    HalfAndHalf {
        name: String,
        unit_price: f64,
        first_half: String,
        second_half: String,
    },
}

impl CartProduct {
    pub fn name(&self) -> &str {
        match self {
            CartProduct::Simple { name, .. } => name,
            CartProduct::HalfAndHalf { name, .. } => name,
        }
    }

    pub fn unit_price(&self) -> f64 {
        match self {
            CartProduct::Simple { unit_price, .. } => *unit_price,
            CartProduct::HalfAndHalf { unit_price, .. } => *unit_price,
        }
    }
}

/// Priced add-on snapshot attached to a cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartExtra {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// One cart line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Aggregation key, also the handle for quantity operations
    pub cart_id: String,
    pub product: CartProduct,
    pub quantity: u32,
    pub extras: Vec<CartExtra>,
}

/// Customer cart
///
/// Lines keep insertion order so the storefront renders them stably.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Derive the aggregation key for a product plus extras selection.
    ///
    /// Simple products merge on `product_id:sorted,unique,extra,ids`.
    /// Half-and-half pizzas get a fresh random key, so two identical
    /// combinations always stay separate lines.
    fn aggregation_key(product: &CartProduct, extras: &[CartExtra]) -> String {
        match product {
            CartProduct::Simple { id, .. } => {
                let mut extra_ids: Vec<&str> = extras.iter().map(|e| e.id.as_str()).collect();
                extra_ids.sort_unstable();
                extra_ids.dedup();
                format!("{}:{}", id, extra_ids.join(","))
            }
            CartProduct::HalfAndHalf { .. } => Uuid::new_v4().to_string(),
        }
    }

    /// Add one unit of a product selection, merging into an existing line
    /// when the aggregation key matches. Returns the line's cart id.
    pub fn add(&mut self, product: CartProduct, extras: Vec<CartExtra>) -> String {
        let key = Self::aggregation_key(&product, &extras);
        if let Some(item) = self.items.iter_mut().find(|i| i.cart_id == key) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                cart_id: key.clone(),
                product,
                quantity: 1,
                extras,
            });
        }
        key
    }

    /// Increase a line's quantity by one. Unknown ids are ignored.
    pub fn increment(&mut self, cart_id: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.cart_id == cart_id) {
            item.quantity += 1;
        }
    }

    /// Decrease a line's quantity by one; at quantity 1 the line is removed.
    pub fn decrement(&mut self, cart_id: &str) {
        if let Some(pos) = self.items.iter().position(|i| i.cart_id == cart_id) {
            if self.items[pos].quantity > 1 {
                self.items[pos].quantity -= 1;
            } else {
                self.items.remove(pos);
            }
        }
    }

    /// Remove a line regardless of quantity.
    pub fn remove(&mut self, cart_id: &str) {
        self.items.retain(|i| i.cart_id != cart_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
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

    /// Total units across all lines
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> CartProduct {
        CartProduct::Simple {
            id: "pizza-margherita".to_string(),
            name: "Margherita".to_string(),
            unit_price: 35.0,
            category: "pizza".to_string(),
        }
    }

    fn guarana() -> CartProduct {
        CartProduct::Simple {
            id: "drink-guarana".to_string(),
            name: "Guaraná 2L".to_string(),
            unit_price: 12.0,
            category: "drink".to_string(),
        }
    }

    fn half_and_half() -> CartProduct {
        CartProduct::HalfAndHalf {
            name: "Calabresa / Quatro Queijos".to_string(),
            unit_price: 42.0,
            first_half: "pizza-calabresa".to_string(),
            second_half: "pizza-quatro-queijos".to_string(),
        }
    }

    fn extra(id: &str, name: &str, price: f64) -> CartExtra {
        CartExtra {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        cart.add(margherita(), vec![]);
        cart.add(margherita(), vec![]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_extras_order_does_not_matter() {
        let mut cart = Cart::new();
        let a = extra("extra-catupiry", "Catupiry", 5.0);
        let b = extra("extra-bacon", "Bacon", 6.0);

        cart.add(margherita(), vec![a.clone(), b.clone()]);
        cart.add(margherita(), vec![b, a]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_duplicate_extra_ids_deduplicate() {
        let mut cart = Cart::new();
        let a = extra("extra-bacon", "Bacon", 6.0);

        cart.add(margherita(), vec![a.clone(), a.clone()]);
        cart.add(margherita(), vec![a]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_different_extras_stay_separate() {
        let mut cart = Cart::new();
        let a = extra("extra-bacon", "Bacon", 6.0);
        let b = extra("extra-catupiry", "Catupiry", 5.0);

        cart.add(margherita(), vec![a.clone()]);
        cart.add(margherita(), vec![a, b]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].quantity, 1);
    }

    #[test]
    fn test_aggregation_key_format() {
        let mut cart = Cart::new();
        let b = extra("extra-bacon", "Bacon", 6.0);
        let c = extra("extra-catupiry", "Catupiry", 5.0);

        let bare = cart.add(margherita(), vec![]);
        assert_eq!(bare, "pizza-margherita:");

        let mut cart = Cart::new();
        let with_extras = cart.add(margherita(), vec![c, b]);
        assert_eq!(with_extras, "pizza-margherita:extra-bacon,extra-catupiry");
    }

    #[test]
    fn test_half_and_half_never_merges() {
        let mut cart = Cart::new();
        let first = cart.add(half_and_half(), vec![]);
        let second = cart.add(half_and_half(), vec![]);

        assert_ne!(first, second);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].quantity, 1);
    }

    #[test]
    fn test_increment() {
        let mut cart = Cart::new();
        let id = cart.add(guarana(), vec![]);
        cart.increment(&id);
        cart.increment(&id);

        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_decrement_removes_at_one() {
        let mut cart = Cart::new();
        let id = cart.add(guarana(), vec![]);
        cart.increment(&id);

        cart.decrement(&id);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.decrement(&id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(guarana(), vec![]);

        cart.increment("missing");
        cart.decrement("missing");
        cart.remove("missing");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let mut cart = Cart::new();
        let id = cart.add(margherita(), vec![]);
        cart.increment(&id);
        cart.add(guarana(), vec![]);

        cart.remove(&id);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product.name(), "Guaraná 2L");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(margherita(), vec![]);
        cart.add(guarana(), vec![]);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_units() {
        let mut cart = Cart::new();
        let id = cart.add(margherita(), vec![]);
        cart.increment(&id);
        cart.add(guarana(), vec![]);

        assert_eq!(cart.total_units(), 3);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_product_kind_tags() {
        let simple = serde_json::to_value(margherita()).unwrap();
        assert_eq!(simple["kind"], "simple");

        let half = serde_json::to_value(half_and_half()).unwrap();
        assert_eq!(half["kind"], "halfAndHalf");
        assert_eq!(half["first_half"], "pizza-calabresa");
    }

    #[test]
    fn test_cart_roundtrip() {
        let mut cart = Cart::new();
        cart.add(margherita(), vec![extra("extra-bacon", "Bacon", 6.0)]);
        cart.add(half_and_half(), vec![]);

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.total_units(), 2);
    }
}
