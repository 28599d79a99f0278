//! Network address values.

use rand::Rng;

/// Dotted-decimal IPv4 address with uniform octets.
pub fn generate_ip_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let octets: [u8; 4] = rng.random();
    let [a, b, c, d] = octets;
    format!("{a}.{b}.{c}.{d}")
}

/// Colon-separated lowercase MAC address.
pub fn generate_mac_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 6] = rng.random();
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}
