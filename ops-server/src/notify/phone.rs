//! Phone Number Normalization
//!
//! Gateways want a bare digit string with a country code prefix.
//! Brazilian mobile numbers carry an extra leading 9 after the area
//! code that many WhatsApp ids registered before the ninth-digit
//! rollout do not have, so stripping it is configuration rather than
//! a hardcoded rule.

/// Numbering-plan settings applied before a text goes out
#[derive(Debug, Clone)]
pub struct PhoneConfig {
    /// Prefixed when the number does not already start with it
    pub country_code: String,
    /// Drop the leading mobile 9 that follows the area code
    pub strip_ninth_digit: bool,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            country_code: "55".to_string(),
            strip_ninth_digit: true,
        }
    }
}

/// Normalize a phone number in any punctuation to a gateway-ready
/// digit string. Returns `None` when the input has no digits at all.
pub fn normalize_phone(raw: &str, config: &PhoneConfig) -> Option<String> {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    if !digits.starts_with(&config.country_code) {
        digits = format!("{}{}", config.country_code, digits);
    }

    // cc + area code (2) + 9 digits marks a full mobile number with the
    // extra 9 still in place
    let mobile_len = config.country_code.len() + 11;
    let ninth_pos = config.country_code.len() + 2;
    if config.strip_ninth_digit
        && digits.len() == mobile_len
        && digits.as_bytes()[ninth_pos] == b'9'
    {
        digits.remove(ninth_pos);
    }

    Some(digits)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_prefixes_country_code() {
        let config = PhoneConfig::default();
        assert_eq!(
            normalize_phone("(11) 98765-4321", &config),
            Some("551187654321".to_string())
        );
    }

    #[test]
    fn test_existing_country_code_is_kept() {
        let config = PhoneConfig::default();
        assert_eq!(
            normalize_phone("+55 11 98765-4321", &config),
            Some("551187654321".to_string())
        );
    }

    #[test]
    fn test_ninth_digit_kept_when_disabled() {
        let config = PhoneConfig {
            strip_ninth_digit: false,
            ..PhoneConfig::default()
        };
        assert_eq!(
            normalize_phone("(11) 98765-4321", &config),
            Some("5511987654321".to_string())
        );
    }

    #[test]
    fn test_landline_is_not_touched() {
        let config = PhoneConfig::default();
        // 10 local digits, no mobile 9 to strip
        assert_eq!(
            normalize_phone("(11) 3322-1100", &config),
            Some("551133221100".to_string())
        );
    }

    #[test]
    fn test_eleven_digits_starting_with_non_nine_is_kept() {
        let config = PhoneConfig::default();
        // 11 local digits but the digit after the area code is not a 9
        assert_eq!(
            normalize_phone("11887654321", &config),
            Some("5511887654321".to_string())
        );
    }

    #[test]
    fn test_no_digits_yields_none() {
        let config = PhoneConfig::default();
        assert_eq!(normalize_phone("", &config), None);
        assert_eq!(normalize_phone("n/a", &config), None);
    }

    #[test]
    fn test_other_country_code() {
        let config = PhoneConfig {
            country_code: "351".to_string(),
            strip_ninth_digit: false,
        };
        assert_eq!(
            normalize_phone("912 345 678", &config),
            Some("351912345678".to_string())
        );
    }
}
