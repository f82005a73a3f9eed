//! Boundary token and timestamp sources.
//!
//! The upload path needs a fresh random boundary per call and a timestamp
//! for filename namespacing. Both are injected capabilities rather than
//! ambient globals, so tests can supply fixed values and assert exact body
//! bytes. [`RandomBoundary`] and [`SystemClock`] are the production
//! defaults.

use rand::Rng as _;

use crate::platform::{MaybeSendSync, SystemTime};

const HEX: [u8; 16] = *b"0123456789abcdef";

/// Produces a fresh multipart boundary token per upload.
pub trait BoundarySource: MaybeSendSync {
    /// Returns a boundary token unlikely to collide with part payloads.
    fn boundary(&self) -> String;
}

/// Supplies the current time for filename namespacing.
pub trait Clock: MaybeSendSync {
    /// Returns milliseconds since the Unix epoch.
    fn now_unix_millis(&self) -> u64;
}

/// The default [`BoundarySource`]: `Boundary-` followed by a UUID v7.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomBoundary;

impl BoundarySource for RandomBoundary {
    fn boundary(&self) -> String {
        format!("Boundary-{}", uuid_v7())
    }
}

/// The default [`Clock`], backed by the platform's system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_unix_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Generates a UUID v7 as a hyphenated string.
///
/// UUID v7 uses a Unix timestamp in milliseconds for the first 48 bits,
/// followed by random data, giving time-ordered unique tokens.
#[must_use]
fn uuid_v7() -> String {
    let mut bytes = [0u8; 16];

    let millis = SystemClock.now_unix_millis();

    // First 48 bits: timestamp
    bytes[..6].copy_from_slice(&millis.to_be_bytes()[2..8]);

    // Remaining 74 bits: random
    rand::rng().fill(&mut bytes[6..]);

    // Set version (7) and variant (RFC 4122)
    bytes[6] = (bytes[6] & 0x0F) | 0x70;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;

    // UUID string is always 36 bytes: 8-4-4-4-12 hex digits + 4 hyphens
    let mut out = String::with_capacity(36);
    for (i, &b) in bytes.iter().enumerate() {
        out.push(char::from(HEX[(b >> 4) as usize]));
        out.push(char::from(HEX[(b & 0x0F) as usize]));
        if matches!(i, 3 | 5 | 7 | 9) {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_shape() {
        let boundary = RandomBoundary.boundary();
        assert!(boundary.starts_with("Boundary-"));
        // "Boundary-" + 36-character hyphenated UUID
        assert_eq!(boundary.len(), 9 + 36);
    }

    #[test]
    fn test_boundaries_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(RandomBoundary.boundary());
        }
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn test_uuid_v7_version_and_variant_bits() {
        let id = uuid_v7();
        assert_eq!(id.len(), 36);
        // Version nibble is the 15th hex digit, variant the 20th.
        assert_eq!(id.as_bytes()[14], b'7');
        assert!(matches!(id.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
    }
}
