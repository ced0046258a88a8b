use base64_simd::STANDARD;

/// Raw amount -> UI amount via a power-of-ten table.
#[inline]
pub fn convert_to_ui_amount(amount: impl Into<u128>, decimals: u8) -> f64 {
    let value: u128 = amount.into();
    if decimals == 0 {
        return value as f64;
    }

    const POW10: [f64; 20] = [
        1.0,
        10.0,
        100.0,
        1_000.0,
        10_000.0,
        100_000.0,
        1_000_000.0,
        10_000_000.0,
        100_000_000.0,
        1_000_000_000.0,
        10_000_000_000.0,
        100_000_000_000.0,
        1_000_000_000_000.0,
        10_000_000_000_000.0,
        100_000_000_000_000.0,
        1_000_000_000_000_000.0,
        10_000_000_000_000_000.0,
        100_000_000_000_000_000.0,
        1_000_000_000_000_000_000.0,
        10_000_000_000_000_000_000.0,
    ];

    let d = decimals as usize;
    let scale = if d < POW10.len() {
        POW10[d]
    } else {
        10f64.powi(decimals as i32)
    };

    (value as f64) / scale
}

/// Serde adapter storing instruction payloads as base64 strings.
pub mod base64_data {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use super::STANDARD;

    pub fn serialize<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode_to_string(data))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        if encoded.is_empty() {
            return Ok(Vec::new());
        }
        STANDARD
            .decode_to_vec(encoded.as_bytes())
            .map_err(|err| D::Error::custom(format!("invalid base64 instruction data: {err}")))
    }
}
