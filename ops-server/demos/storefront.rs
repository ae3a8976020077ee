//! Storefront walkthrough - cart aggregation and server-side pricing
//!
//! Builds a cart the way the storefront does, turns it into order lines,
//! applies a coupon and prints the totals plus a PIX copia-e-cola payload.
//! Runs fully in memory, no database or network involved.
//!
//! Run: cargo run -p ops-server --example storefront

use ops_server::db::models::{Coupon, CouponKind, OrderItem, OrderItemExtra};
use ops_server::pix;
use ops_server::pricing::{
    calculate_order_totals, coupon_discount, normalize_code, subtotal_of, to_f64,
};
use shared::cart::{Cart, CartExtra, CartProduct};

fn main() {
    println!("=== Storefront Walkthrough ===\n");

    // === 1. Fill the cart ===
    println!("1. Filling the cart...");

    let mut cart = Cart::new();
    let calabresa = CartProduct::Simple {
        id: "product:calabresa".to_string(),
        name: "Pizza Calabresa".to_string(),
        unit_price: 30.0,
        category: "pizza".to_string(),
    };
    let bacon = CartExtra {
        id: "extra:bacon".to_string(),
        name: "Bacon".to_string(),
        price: 5.0,
    };

    // Same product + same extras twice: merges into one line of two units
    cart.add(calabresa.clone(), vec![bacon.clone()]);
    cart.add(calabresa, vec![bacon]);
    cart.add(
        CartProduct::Simple {
            id: "product:guarana-2l".to_string(),
            name: "Guarana 2L".to_string(),
            unit_price: 8.0,
            category: "drink".to_string(),
        },
        Vec::new(),
    );

    for item in cart.items() {
        println!(
            "   {}x {} (R$ {:.2})",
            item.quantity,
            item.product.name(),
            item.product.unit_price()
        );
    }
    println!("   {} lines, {} units\n", cart.len(), cart.total_units());

    // === 2. Cart lines to order lines ===
    println!("2. Converting to order lines...");

    let mut items: Vec<OrderItem> = cart
        .items()
        .iter()
        .map(|line| OrderItem {
            item_id: match &line.product {
                CartProduct::Simple { id, .. } => Some(id.clone()),
                CartProduct::HalfAndHalf { .. } => None,
            },
            item_type: match &line.product {
                CartProduct::Simple { category, .. } => category.clone(),
                CartProduct::HalfAndHalf { .. } => "halfAndHalf".to_string(),
            },
            name: line.product.name().to_string(),
            quantity: line.quantity,
            unit_price: line.product.unit_price(),
            extras: line
                .extras
                .iter()
                .map(|extra| OrderItemExtra {
                    id: Some(extra.id.clone()),
                    name: extra.name.clone(),
                    price: extra.price,
                })
                .collect(),
            line_total: 0.0,
        })
        .collect();
    println!("   {} order lines\n", items.len());

    // === 3. Resolve the coupon ===
    println!("3. Applying coupon...");

    let coupon = Coupon::new(
        normalize_code("pizza10"),
        CouponKind::Percentage,
        10.0,
    );
    let subtotal = subtotal_of(&items);
    let discount = coupon_discount(&coupon, subtotal);
    println!(
        "   {} gives R$ {:.2} off a R$ {:.2} subtotal\n",
        coupon.code,
        to_f64(discount),
        to_f64(subtotal)
    );

    // === 4. Final totals ===
    println!("4. Calculating totals...");

    let delivery_fee = 6.0;
    let totals = calculate_order_totals(&mut items, delivery_fee, to_f64(discount));
    println!("   Subtotal:     R$ {:>7.2}", totals.subtotal);
    println!("   Delivery fee: R$ {:>7.2}", totals.delivery_fee);
    println!("   Discount:     R$ {:>7.2}", totals.discount);
    println!("   Total due:    R$ {:>7.2}\n", totals.final_price);

    // === 5. PIX charge ===
    println!("5. PIX copia-e-cola...");

    let payload = pix::build_payload(
        "pagamentos@forno.com.br",
        "Pizzaria Forno",
        "SAO PAULO",
        totals.final_price,
        "demo1234",
    );
    println!("   {}", payload);
}
