//! Synthetic sensor readings sent to the target service.
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const CO2_RANGE: RangeInclusive<u32> = 1..=2000;
pub const TVOC_RANGE: RangeInclusive<u32> = 1..=2000;
pub const BATTERY_CHARGE_RANGE: RangeInclusive<u32> = 1..=120;

/// One sensor-data payload, serialized as
/// `{"guid", "co2", "tvoc", "batteryCharge"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    pub guid: String,
    pub co2: u32,
    pub tvoc: u32,
    #[serde(rename = "batteryCharge")]
    pub battery_charge: u32,
}

impl SensorReading {
    /// Returns true when every field lies in its generation range and the
    /// guid belongs to `guids`.
    #[must_use]
    pub fn is_within_bounds(&self, guids: &[String]) -> bool {
        CO2_RANGE.contains(&self.co2)
            && TVOC_RANGE.contains(&self.tvoc)
            && BATTERY_CHARGE_RANGE.contains(&self.battery_charge)
            && guids.iter().any(|guid| guid == &self.guid)
    }
}

/// Produces readings with uniformly random fields.
#[derive(Debug)]
pub struct ReadingGenerator {
    guids: Vec<String>,
    rng: StdRng,
}

impl ReadingGenerator {
    /// Creates a generator over `guids`. A `seed` makes the sequence
    /// reproducible; without one the generator is seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns an error when `guids` is empty or contains an empty string.
    pub fn new(guids: Vec<String>, seed: Option<u64>) -> Result<Self, ValidationError> {
        validate_guids(&guids)?;
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Ok(Self { guids, rng })
    }

    pub fn next_reading(&mut self) -> SensorReading {
        // guids is non-empty, checked in new().
        let guid = self.guids.choose(&mut self.rng).cloned().unwrap_or_default();
        SensorReading {
            guid,
            co2: self.rng.gen_range(CO2_RANGE),
            tvoc: self.rng.gen_range(TVOC_RANGE),
            battery_charge: self.rng.gen_range(BATTERY_CHARGE_RANGE),
        }
    }
}

pub(crate) fn validate_guids(guids: &[String]) -> Result<(), ValidationError> {
    if guids.is_empty() {
        return Err(ValidationError::GuidsEmpty);
    }
    if guids.iter().any(|guid| guid.trim().is_empty()) {
        return Err(ValidationError::GuidEmpty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::DEFAULT_GUIDS;
    use std::collections::BTreeSet;

    fn default_guids() -> Vec<String> {
        DEFAULT_GUIDS.iter().map(|guid| (*guid).to_owned()).collect()
    }

    #[test]
    fn readings_stay_within_bounds() -> Result<(), String> {
        let guids = default_guids();
        let mut generator =
            ReadingGenerator::new(guids.clone(), Some(11)).map_err(|err| err.to_string())?;
        for _ in 0..10_000 {
            let reading = generator.next_reading();
            if !reading.is_within_bounds(&guids) {
                return Err(format!("Reading out of bounds: {:?}", reading));
            }
        }
        Ok(())
    }

    #[test]
    fn guid_selection_covers_whole_set() -> Result<(), String> {
        let mut generator =
            ReadingGenerator::new(default_guids(), Some(3)).map_err(|err| err.to_string())?;
        let seen: BTreeSet<String> = (0..1_000)
            .map(|_| generator.next_reading().guid)
            .collect();
        if seen.len() != DEFAULT_GUIDS.len() {
            return Err(format!("Expected every guid to be picked, saw {:?}", seen));
        }
        Ok(())
    }

    #[test]
    fn seeded_generators_repeat() -> Result<(), String> {
        let mut first =
            ReadingGenerator::new(default_guids(), Some(99)).map_err(|err| err.to_string())?;
        let mut second =
            ReadingGenerator::new(default_guids(), Some(99)).map_err(|err| err.to_string())?;
        for _ in 0..100 {
            if first.next_reading() != second.next_reading() {
                return Err("Seeded generators diverged".to_owned());
            }
        }
        Ok(())
    }

    #[test]
    fn empty_guid_sets_are_rejected() -> Result<(), String> {
        if ReadingGenerator::new(Vec::new(), None).is_ok() {
            return Err("Expected empty guid set to be rejected".to_owned());
        }
        if ReadingGenerator::new(vec!["a".to_owned(), " ".to_owned()], None).is_ok() {
            return Err("Expected blank guid to be rejected".to_owned());
        }
        Ok(())
    }

    #[test]
    fn serializes_with_wire_names() -> Result<(), String> {
        let reading = SensorReading {
            guid: "killer".to_owned(),
            co2: 400,
            tvoc: 12,
            battery_charge: 87,
        };
        let value = serde_json::to_value(&reading).map_err(|err| err.to_string())?;
        let expected = serde_json::json!({
            "guid": "killer",
            "co2": 400,
            "tvoc": 12,
            "batteryCharge": 87
        });
        if value != expected {
            return Err(format!("Unexpected payload: {}", value));
        }
        Ok(())
    }

    #[test]
    fn bounds_check_flags_out_of_range_fields() -> Result<(), String> {
        let guids = default_guids();
        let reading = SensorReading {
            guid: "a".to_owned(),
            co2: 2001,
            tvoc: 1,
            battery_charge: 1,
        };
        if reading.is_within_bounds(&guids) {
            return Err("co2 2001 should be out of bounds".to_owned());
        }
        let reading = SensorReading {
            guid: "unknown".to_owned(),
            co2: 1,
            tvoc: 1,
            battery_charge: 120,
        };
        if reading.is_within_bounds(&guids) {
            return Err("Unknown guid should be out of bounds".to_owned());
        }
        Ok(())
    }
}
