//! Seed derivation: a hex string read as a base-16 integer

use crate::{Address, Error, Result};

/// Arbitrary-precision non-negative integer seeding a [`crate::SymbolStream`].
///
/// Stored as its minimal big-endian magnitude, so `"00ff"` and `"ff"` are the
/// same seed and zero is the empty magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Seed {
    magnitude: Vec<u8>,
}

impl Seed {
    /// Build a seed from big-endian bytes, ignoring leading zero bytes
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self {
            magnitude: bytes[start..].to_vec(),
        }
    }

    /// Minimal big-endian magnitude (empty for zero)
    pub fn magnitude(&self) -> &[u8] {
        &self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }
}

impl From<&Address> for Seed {
    fn from(address: &Address) -> Self {
        Seed::from_be_bytes(address.as_bytes())
    }
}

/// Interpret `hex_str` as a base-16 integer.
///
/// Accepts upper- and lowercase digits of any non-zero length. Length is not
/// enforced here; callers wanting a 256-bit address go through
/// [`Address::parse`] first.
pub fn derive_seed(hex_str: &str) -> Result<Seed> {
    if hex_str.is_empty() {
        return Err(Error::InvalidAddress("address is empty".to_string()));
    }
    if let Some((pos, c)) = hex_str.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidAddress(format!(
            "non-hexadecimal character {c:?} at position {pos}"
        )));
    }

    let digits = hex_str.trim_start_matches('0');
    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    let bytes = hex::decode(&padded).map_err(|e| Error::InvalidAddress(e.to_string()))?;

    Ok(Seed::from_be_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_address_is_zero_seed() {
        let seed = derive_seed(&"0".repeat(64)).unwrap();
        assert!(seed.is_zero());
        assert!(seed.magnitude().is_empty());
        assert_eq!(seed, Seed::default());
    }

    #[test]
    fn test_leading_zeros_do_not_change_seed() {
        assert_eq!(derive_seed("00ff").unwrap(), derive_seed("ff").unwrap());
        assert_eq!(derive_seed("ff").unwrap().magnitude(), &[0xff]);
    }

    #[test]
    fn test_odd_length() {
        let seed = derive_seed("abc").unwrap();
        assert_eq!(seed.magnitude(), &[0x0a, 0xbc]);
        assert!(!seed.is_zero());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(derive_seed("DEADBEEF").unwrap(), derive_seed("deadbeef").unwrap());
    }

    #[test]
    fn test_longer_than_256_bits() {
        let seed = derive_seed(&format!("1{}", "0".repeat(64))).unwrap();
        assert_eq!(seed.magnitude().len(), 33);
        assert_eq!(seed.magnitude()[0], 0x01);
        assert!(seed.magnitude()[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(matches!(derive_seed("12g4"), Err(Error::InvalidAddress(_))));
        assert!(matches!(derive_seed("0x12"), Err(Error::InvalidAddress(_))));
        assert!(matches!(derive_seed(""), Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_matches_address_bytes() {
        let hex_str = format!("{}01", "0".repeat(62));
        let address = Address::parse(&hex_str).unwrap();
        assert_eq!(Seed::from(&address), derive_seed(&hex_str).unwrap());
        assert_eq!(Seed::from(&address).magnitude(), &[0x01]);
    }
}
