use rand::RngCore;

/// Bytes of entropy per refresh value. 40 bytes = 320 bits, far above
/// the point where collisions are a practical concern.
const REFRESH_VALUE_BYTES: usize = 40;

/// Generate an opaque refresh token value as lowercase hex
pub fn generate_refresh_value() -> String {
    let mut bytes = [0u8; REFRESH_VALUE_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
