//! PIX Payload Builder
//!
//! Static EMV "BR Code" payloads (copia e cola) for order charges. The
//! payload is a sequence of id + two-digit length + value segments with
//! a CRC16 trailer; amounts come from the order's `final_price`.

const PAYLOAD_FORMAT: &str = "01";
const PIX_GUI: &str = "br.gov.bcb.pix";
const MERCHANT_CATEGORY: &str = "0000";
const CURRENCY_BRL: &str = "986";
const COUNTRY: &str = "BR";

const MAX_MERCHANT_NAME: usize = 25;
const MAX_MERCHANT_CITY: usize = 15;
const MAX_TXID: usize = 25;

/// One id + length + value segment. Lengths count bytes, matching what
/// bank parsers read.
fn field(id: &str, value: &str) -> String {
    format!("{}{:02}{}", id, value.len(), value)
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Transaction ids only allow alphanumerics; falls back to the
/// no-reconciliation marker when nothing survives
pub fn sanitize_txid(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_TXID)
        .collect();
    if cleaned.is_empty() {
        "***".to_string()
    } else {
        cleaned
    }
}

/// CRC16-CCITT, poly 0x1021, init 0xFFFF, as mandated by the BR Code
/// standard
pub fn crc16_ccitt(data: &str) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for byte in data.as_bytes() {
        crc ^= (*byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Assemble a static charge payload.
///
/// A zero amount omits the amount segment, producing an open-value
/// code. Merchant name and city are truncated to the EMV limits.
pub fn build_payload(key: &str, merchant_name: &str, city: &str, amount: f64, txid: &str) -> String {
    let account = format!("{}{}", field("00", PIX_GUI), field("01", key));
    let additional = field("05", &sanitize_txid(txid));

    let mut payload = String::new();
    payload.push_str(&field("00", PAYLOAD_FORMAT));
    payload.push_str(&field("26", &account));
    payload.push_str(&field("52", MERCHANT_CATEGORY));
    payload.push_str(&field("53", CURRENCY_BRL));
    if amount > 0.0 {
        payload.push_str(&field("54", &format!("{:.2}", amount)));
    }
    payload.push_str(&field("58", COUNTRY));
    payload.push_str(&field("59", &truncate(merchant_name, MAX_MERCHANT_NAME)));
    payload.push_str(&field("60", &truncate(city, MAX_MERCHANT_CITY)));
    payload.push_str(&field("62", &additional));

    // CRC covers everything up to and including its own id + length
    payload.push_str("6304");
    let crc = crc16_ccitt(&payload);
    format!("{}{:04X}", payload, crc)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc16_check_value() {
        // Standard CRC16/CCITT-FALSE check input
        assert_eq!(crc16_ccitt("123456789"), 0x29B1);
    }

    #[test]
    fn test_payload_skeleton() {
        let payload = build_payload(
            "pix@forno.com.br",
            "Pizzaria Forno",
            "SAO PAULO",
            84.0,
            "abc123",
        );
        assert!(payload.starts_with("000201"));
        assert!(payload.contains("br.gov.bcb.pix"));
        assert!(payload.contains("pix@forno.com.br"));
        assert!(payload.contains("540584.00"));
        assert!(payload.contains("5802BR"));
        assert!(payload.contains("Pizzaria Forno"));
        assert!(payload.contains("SAO PAULO"));
        assert!(payload.contains("abc123"));
    }

    #[test]
    fn test_trailer_crc_matches_payload() {
        let payload = build_payload("chave-pix", "Forno", "SAO PAULO", 12.5, "pedido1");
        let (body, trailer) = payload.split_at(payload.len() - 4);
        let expected = format!("{:04X}", crc16_ccitt(body));
        assert_eq!(trailer, expected);
    }

    #[test]
    fn test_zero_amount_omits_the_amount_segment() {
        let payload = build_payload("chave", "Forno", "SAO PAULO", 0.0, "x");
        // CRC trailer is hex and could collide with any substring
        let (body, _) = payload.split_at(payload.len() - 4);
        assert!(!body.contains("5404"));
        assert!(body.contains("5303986"));
    }

    #[test]
    fn test_merchant_limits_are_enforced() {
        let payload = build_payload(
            "chave",
            "Uma Pizzaria Com Nome Extremamente Longo",
            "Cidade Com Nome Muito Comprido",
            10.0,
            "t",
        );
        assert!(payload.contains("5925Uma Pizzaria Com Nome Ext"));
        assert!(payload.contains("6015Cidade Com Nome"));
    }

    #[test]
    fn test_txid_is_sanitized() {
        assert_eq!(sanitize_txid("order:abc-123"), "orderabc123");
        assert_eq!(sanitize_txid("!!!"), "***");
        assert_eq!(sanitize_txid(&"x".repeat(40)).len(), 25);
    }
}
