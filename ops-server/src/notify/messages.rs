//! Notification Text Builders
//!
//! Portuguese message bodies for the customer and courier texts. All
//! builders are pure; delivery happens in the notifier.

use crate::db::models::Order;

fn format_brl(value: f64) -> String {
    format!("R$ {:.2}", value)
}

fn maps_link(address: &str, neighborhood: Option<&str>) -> String {
    let query = match neighborhood {
        Some(n) => format!("{}, {}", address, n),
        None => address.to_string(),
    };
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        query.replace(' ', "+")
    )
}

/// Order received, sent right after checkout
pub fn confirmation(order: &Order, store_name: &str) -> String {
    format!(
        "Olá, {}! Recebemos seu pedido e ele já está em preparo. 🍕\n\
         Total: {}\n\
         {} agradece a preferência!",
        order.customer_name,
        format_brl(order.final_price),
        store_name
    )
}

/// Pickup order is ready at the counter
pub fn ready_for_pickup(order: &Order, store_name: &str) -> String {
    format!(
        "Olá, {}! Seu pedido está pronto para retirada. 🛍️\n{} te espera!",
        order.customer_name, store_name
    )
}

/// Delivery order left the store
pub fn out_for_delivery(order: &Order) -> String {
    format!(
        "Olá, {}! Seu pedido saiu para entrega e logo chega aí. 🛵",
        order.customer_name
    )
}

/// Full order sheet for the assigned courier: items, address, map link,
/// amount to collect and a one-click finalize link.
pub fn courier_sheet(order: &Order, public_url: &str) -> String {
    let mut lines = vec!["🛵 Nova entrega!".to_string(), String::new()];

    lines.push(format!("Cliente: {}", order.customer_name));
    if let Some(phone) = &order.customer_phone {
        lines.push(format!("Telefone: {}", phone));
    }
    if let Some(address) = &order.address {
        match &order.neighborhood {
            Some(neighborhood) => {
                lines.push(format!("Endereço: {}, {}", address, neighborhood));
            }
            None => lines.push(format!("Endereço: {}", address)),
        }
        lines.push(format!(
            "Mapa: {}",
            maps_link(address, order.neighborhood.as_deref())
        ));
    }

    lines.push(String::new());
    lines.push("Itens:".to_string());
    for item in &order.items {
        let mut line = format!("- {}x {}", item.quantity, item.name);
        if !item.extras.is_empty() {
            let extras: Vec<&str> = item.extras.iter().map(|e| e.name.as_str()).collect();
            line.push_str(&format!(" (+ {})", extras.join(", ")));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!("Pagamento: {}", order.payment_method));
    lines.push(format!(
        "Total a receber: {}",
        format_brl(order.final_price)
    ));

    if let Some(id) = order.id_string() {
        lines.push(String::new());
        lines.push(format!(
            "Finalizar entrega: {}/api/orders/{}/finalize",
            public_url, id
        ));
    }

    lines.join("\n")
}

// ==================== Tests ====================
