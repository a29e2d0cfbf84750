use anyhow::{Context, Result};

/// Parse a single hash token as a decimal integer, or hexadecimal when
/// `hex` is set. Hex tokens may carry an optional `0x`/`0X` prefix.
/// 128 bits so that full md5-width values still fit.
pub fn parse_hash(token: &str, hex: bool) -> Result<u128> {
    let (digits, radix, base) = if hex {
        let stripped = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        (stripped, 16, "hex")
    } else {
        (token, 10, "decimal")
    };

    u128::from_str_radix(digits, radix)
        .with_context(|| format!("Invalid {} hash: '{}'", base, token))
}

/// Parse all tokens, failing on the first malformed one.
pub fn parse_hashes(tokens: &[String], hex: bool) -> Result<Vec<u128>> {
    tokens.iter().map(|t| parse_hash(t, hex)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_hash("0", false).unwrap(), 0);
        assert_eq!(parse_hash("3177428884", false).unwrap(), 3177428884);
        assert_eq!(
            parse_hash("18446744073709551615", false).unwrap(),
            u64::MAX as u128
        );
    }

    #[test]
    fn test_hex_md5_width() {
        assert_eq!(
            parse_hash("68b329da9893e34099c7d8ad5cb9c940", true).unwrap(),
            0x68b329da9893e34099c7d8ad5cb9c940
        );
    }

    #[test]
    fn test_hex() {
        assert_eq!(parse_hash("bd6879c4", true).unwrap(), 0xbd6879c4);
        assert_eq!(parse_hash("BD6879C4", true).unwrap(), 0xbd6879c4);
        assert_eq!(parse_hash("0xbd6879c4", true).unwrap(), 0xbd6879c4);
        assert_eq!(parse_hash("0XBD6879C4", true).unwrap(), 0xbd6879c4);
    }

    #[test]
    fn test_decimal_rejects_hex_digits() {
        let err = parse_hash("bd6879c4", false).unwrap_err();
        assert!(err.to_string().contains("Invalid decimal hash: 'bd6879c4'"));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        let err = parse_hash("not-a-hash", true).unwrap_err();
        assert!(err.to_string().contains("Invalid hex hash: 'not-a-hash'"));
    }

    #[test]
    fn test_empty_token_fails() {
        assert!(parse_hash("", false).is_err());
        assert!(parse_hash("0x", true).is_err());
    }

    #[test]
    fn test_parse_hashes_batch() {
        let tokens = vec!["111".to_string(), "222".to_string()];
        assert_eq!(parse_hashes(&tokens, false).unwrap(), vec![111, 222]);
    }

    #[test]
    fn test_parse_hashes_fails_on_malformed_token() {
        let tokens = vec!["111".to_string(), "oops".to_string()];
        let err = parse_hashes(&tokens, false).unwrap_err();
        assert!(err.to_string().contains("'oops'"));
    }
}
