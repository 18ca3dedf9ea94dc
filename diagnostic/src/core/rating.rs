//! Ratings derived from a report and their decoded values.

use serde::Serialize;

use crate::core::filter::rating_reading;
use crate::core::tally::{epsilon_reading, gamma_reading};
use crate::core::types::{Bit, BitCriteria, Reading, Report};
use crate::error::DiagnosticError;

/// Decode a reading as an unsigned integer, most significant bit first.
pub fn decode(reading: &Reading) -> u32 {
    reading
        .bits()
        .iter()
        .fold(0, |value, bit| (value << 1) | u32::from(*bit == Bit::One))
}

/// A surviving reading together with its decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub reading: Reading,
    pub value: u32,
}

impl Rating {
    pub fn new(reading: Reading) -> Self {
        let value = decode(&reading);
        Self { reading, value }
    }
}

/// Oxygen generator and CO2 scrubber ratings and their product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeSupport {
    pub most_common: Rating,
    pub least_common: Rating,
    pub life_support: u64,
}

/// Gamma and epsilon rates and their product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerConsumption {
    pub gamma: Rating,
    pub epsilon: Rating,
    pub power_consumption: u64,
}

pub fn life_support(report: &Report) -> Result<LifeSupport, DiagnosticError> {
    let most_common = Rating::new(rating_reading(report.readings(), BitCriteria::MostCommon)?);
    let least_common = Rating::new(rating_reading(report.readings(), BitCriteria::LeastCommon)?);
    let life_support = u64::from(most_common.value) * u64::from(least_common.value);
    Ok(LifeSupport {
        most_common,
        least_common,
        life_support,
    })
}

pub fn power_consumption(report: &Report) -> PowerConsumption {
    let gamma = Rating::new(gamma_reading(report));
    let epsilon = Rating::new(epsilon_reading(report));
    let power_consumption = u64::from(gamma.value) * u64::from(epsilon.value);
    PowerConsumption {
        gamma,
        epsilon,
        power_consumption,
    }
}
