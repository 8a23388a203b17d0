//! Identifier types for the barbershop simulator
//!
//! This module contains the small integer identity types for customers and
//! barbers used throughout the simulation system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one customer visit.
///
/// Customer identities are positive integers; they are transient and only
/// meaningful for the span of a single visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u32);

impl CustomerId {
    /// Create a customer identity from its raw number.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw number behind this identity.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer[{}]", self.0)
    }
}

/// Identity of one barber.
///
/// Barber identities are 1-based: a shop with N barbers uses indices 1..=N.
/// Slot 0 is never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarberId(u32);

impl BarberId {
    /// Create a barber identity from its 1-based index.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The 1-based index behind this identity.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BarberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "barber[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_display() {
        assert_eq!(CustomerId::new(7).to_string(), "customer[7]");
        assert_eq!(CustomerId::new(7).get(), 7);
    }

    #[test]
    fn test_barber_id_display() {
        assert_eq!(BarberId::new(2).to_string(), "barber[2]");
        assert_eq!(BarberId::new(2).get(), 2);
    }

    #[test]
    fn test_id_equality_and_hash() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(BarberId::new(1));
        seen.insert(BarberId::new(2));
        seen.insert(BarberId::new(1));

        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&BarberId::new(1)));
        assert_ne!(CustomerId::new(1), CustomerId::new(2));
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let json = serde_json::to_string(&CustomerId::new(12)).unwrap();
        assert_eq!(json, "12");

        let back: CustomerId = serde_json::from_str("12").unwrap();
        assert_eq!(back, CustomerId::new(12));

        let barber: BarberId = serde_json::from_str("3").unwrap();
        assert_eq!(barber, BarberId::new(3));
    }
}
