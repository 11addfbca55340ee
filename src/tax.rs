//! Tax rates and the salary deduction rule.

use crate::models::Experience;

/// Tax rate provider: three percentage rates on the 0–100 scale.
///
/// Expressed as a trait so the registry logic can be exercised against
/// a fixed double without touching configuration.
pub trait TaxRates: Send + Sync {
    /// Rate applied to junior salaries.
    fn simple_rate(&self) -> f64;

    /// Rate applied to mid-level salaries.
    fn middle_rate(&self) -> f64;

    /// Rate applied to senior salaries.
    fn upper_rate(&self) -> f64;

    /// Select the rate for an experience level.
    fn rate_for(&self, experience: Experience) -> f64 {
        match experience {
            Experience::Junior => self.simple_rate(),
            Experience::Mid => self.middle_rate(),
            Experience::Senior => self.upper_rate(),
        }
    }
}

/// Deduct a percentage tax from a gross salary.
pub fn apply_deduction(gross: f64, rate_percent: f64) -> f64 {
    gross - gross * (rate_percent / 100.0)
}

/// Tax rates loaded from configuration, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct ConfiguredTaxRates {
    simple: f64,
    middle: f64,
    upper: f64,
}

impl ConfiguredTaxRates {
    pub fn new(simple: f64, middle: f64, upper: f64) -> Self {
        Self {
            simple,
            middle,
            upper,
        }
    }
}

impl TaxRates for ConfiguredTaxRates {
    fn simple_rate(&self) -> f64 {
        self.simple
    }

    fn middle_rate(&self) -> f64 {
        self.middle
    }

    fn upper_rate(&self) -> f64 {
        self.upper
    }
}
