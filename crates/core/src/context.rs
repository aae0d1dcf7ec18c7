//! Business context passed through the interpreter untouched

use serde::{Deserialize, Serialize};

/// Counts from the surrounding business app
///
/// Opaque to classification. The dispatcher hands it back unchanged so the
/// caller can build response text ("you have 12 hot leads").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<u64>,
}

impl BusinessContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leads(mut self, count: u64) -> Self {
        self.leads = Some(count);
        self
    }

    pub fn with_payments(mut self, count: u64) -> Self {
        self.payments = Some(count);
        self
    }

    pub fn with_orders(mut self, count: u64) -> Self {
        self.orders = Some(count);
        self
    }
}
