//! Market unit-price resolution.
//!
//! A deterministic lookup keyed by city and quality tier. Unknown locations
//! fall back to a nationwide default sheet, so resolution never fails.
//! Prices are authored per city; quality-dependent materials carry one value
//! per tier and collapse to a single price once the tier is known.

use std::collections::BTreeMap;

use crate::domain::ai::{MarketPriceSheet, QualityTier};

/// All sheets quote SAR.
const CURRENCY: &str = "SAR";

enum Rate {
    Flat(f64),
    ByTier {
        standard: f64,
        premium: f64,
        luxury: f64,
    },
}

impl Rate {
    fn at(&self, tier: QualityTier) -> f64 {
        match self {
            Self::Flat(price) => *price,
            Self::ByTier {
                standard,
                premium,
                luxury,
            } => match tier {
                QualityTier::Standard => *standard,
                QualityTier::Premium => *premium,
                QualityTier::Luxury => *luxury,
            },
        }
    }
}

struct CityRates {
    materials: &'static [(&'static str, Rate)],
    labor_rate_per_hour: f64,
}

static RIYADH: CityRates = CityRates {
    materials: &[
        ("cement", Rate::Flat(16.0)),
        ("steel", Rate::Flat(2850.0)),
        ("concrete", Rate::Flat(245.0)),
        ("blocks", Rate::Flat(2.8)),
        ("sand", Rate::Flat(55.0)),
        (
            "finishing_materials",
            Rate::ByTier {
                standard: 450.0,
                premium: 780.0,
                luxury: 1200.0,
            },
        ),
    ],
    labor_rate_per_hour: 55.0,
};

static JEDDAH: CityRates = CityRates {
    materials: &[
        ("cement", Rate::Flat(15.5)),
        ("steel", Rate::Flat(2800.0)),
        ("concrete", Rate::Flat(235.0)),
        ("blocks", Rate::Flat(2.6)),
        ("sand", Rate::Flat(60.0)),
        (
            "finishing_materials",
            Rate::ByTier {
                standard: 420.0,
                premium: 740.0,
                luxury: 1150.0,
            },
        ),
    ],
    labor_rate_per_hour: 50.0,
};

static DAMMAM: CityRates = CityRates {
    materials: &[
        ("cement", Rate::Flat(15.0)),
        ("steel", Rate::Flat(2780.0)),
        ("concrete", Rate::Flat(230.0)),
        ("blocks", Rate::Flat(2.5)),
        ("sand", Rate::Flat(45.0)),
        (
            "finishing_materials",
            Rate::ByTier {
                standard: 400.0,
                premium: 720.0,
                luxury: 1100.0,
            },
        ),
    ],
    labor_rate_per_hour: 48.0,
};

static MAKKAH: CityRates = CityRates {
    materials: &[
        ("cement", Rate::Flat(16.5)),
        ("steel", Rate::Flat(2900.0)),
        ("concrete", Rate::Flat(250.0)),
        ("blocks", Rate::Flat(2.9)),
        ("sand", Rate::Flat(58.0)),
        (
            "finishing_materials",
            Rate::ByTier {
                standard: 440.0,
                premium: 760.0,
                luxury: 1180.0,
            },
        ),
    ],
    labor_rate_per_hour: 52.0,
};

static DEFAULT: CityRates = CityRates {
    materials: &[
        ("cement", Rate::Flat(15.0)),
        ("steel", Rate::Flat(2800.0)),
        ("concrete", Rate::Flat(235.0)),
        ("blocks", Rate::Flat(2.6)),
        ("sand", Rate::Flat(50.0)),
        (
            "finishing_materials",
            Rate::ByTier {
                standard: 380.0,
                premium: 680.0,
                luxury: 1050.0,
            },
        ),
    ],
    labor_rate_per_hour: 45.0,
};

/// City key from a free-form location: the part before the first comma,
/// trimmed and lowercased ("Riyadh, KSA" → "riyadh").
pub fn normalize_location(location_text: &str) -> String {
    location_text
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

fn city_rates(key: &str) -> &'static CityRates {
    match key {
        "riyadh" => &RIYADH,
        "jeddah" => &JEDDAH,
        "dammam" => &DAMMAM,
        "makkah" => &MAKKAH,
        _ => &DEFAULT,
    }
}

/// Resolve the unit-price sheet for a location and quality tier.
pub fn resolve_prices(location_text: &str, tier: QualityTier) -> MarketPriceSheet {
    let key = normalize_location(location_text);
    let rates = city_rates(&key);

    let material_unit_prices: BTreeMap<String, f64> = rates
        .materials
        .iter()
        .map(|(name, rate)| (name.to_string(), rate.at(tier)))
        .collect();

    MarketPriceSheet {
        material_unit_prices,
        labor_rate_per_hour: rates.labor_rate_per_hour,
        currency: CURRENCY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic() {
        let first = resolve_prices("Riyadh, KSA", QualityTier::Luxury);
        let second = resolve_prices("Riyadh, KSA", QualityTier::Luxury);
        assert_eq!(first, second);
    }

    #[test]
    fn riyadh_luxury_sheet() {
        let sheet = resolve_prices("Riyadh, KSA", QualityTier::Luxury);
        assert_eq!(sheet.material_unit_prices["finishing_materials"], 1200.0);
        assert_eq!(sheet.labor_rate_per_hour, 55.0);
        assert_eq!(sheet.currency, "SAR");
    }

    #[test]
    fn quality_tier_only_affects_tiered_materials() {
        let standard = resolve_prices("Jeddah", QualityTier::Standard);
        let luxury = resolve_prices("Jeddah", QualityTier::Luxury);

        assert_eq!(
            standard.material_unit_prices["cement"],
            luxury.material_unit_prices["cement"]
        );
        assert_eq!(standard.material_unit_prices["finishing_materials"], 420.0);
        assert_eq!(luxury.material_unit_prices["finishing_materials"], 1150.0);
    }

    #[test]
    fn unknown_location_falls_back_to_default() {
        let sheet = resolve_prices("Atlantis", QualityTier::Standard);
        assert_eq!(sheet.material_unit_prices["finishing_materials"], 380.0);
        assert_eq!(sheet.material_unit_prices["cement"], 15.0);
        assert_eq!(sheet.labor_rate_per_hour, 45.0);
        assert_eq!(sheet.currency, "SAR");
    }

    #[test]
    fn location_normalization_is_permissive() {
        assert_eq!(normalize_location(" Riyadh , Saudi Arabia"), "riyadh");
        assert_eq!(normalize_location("JEDDAH"), "jeddah");
        assert_eq!(
            resolve_prices("  DAMMAM , Eastern Province", QualityTier::Premium),
            resolve_prices("dammam", QualityTier::Premium)
        );
    }
}
