//! Order reference numbers

use std::fmt;

use rand::Rng;

/// Upper bound of the five-digit reference space shown to clients
const REFERENCE_SPACE: u32 = 90_000;

/// A cosmetic reference number included in the client acknowledgment.
///
/// Drawn fresh for every send; never stored, never checked for uniqueness,
/// never usable for lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceNumber(u32);

impl ReferenceNumber {
    /// Draw a fresh random reference
    pub fn generate() -> Self {
        Self(rand::thread_rng().gen_range(0..REFERENCE_SPACE))
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORD-{}", self.0)
    }
}
