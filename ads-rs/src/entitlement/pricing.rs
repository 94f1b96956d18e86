//! Pack pricing catalog

use super::types::Pack;

/// Monthly subscription prices, in cents.
///
/// Immutable like the tier table: built once and shared by reference.
#[derive(Debug, Clone)]
pub struct PricingTable {
    simple: i64,
    starter: i64,
    pro: i64,
    entreprise: i64,
}

impl PricingTable {
    pub const CURRENCY: &'static str = "EUR";

    /// The published price list
    pub fn builtin() -> Self {
        Self {
            simple: 0,
            starter: 1990,
            pro: 4990,
            entreprise: 9990,
        }
    }

    pub fn monthly_price_cents(&self, pack: Pack) -> i64 {
        match pack {
            Pack::Simple => self.simple,
            Pack::Starter => self.starter,
            Pack::Pro => self.pro,
            Pack::Entreprise => self.entreprise,
        }
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::builtin()
    }
}
