// 🏪 BusinessType - Industry vertical selector
//
// Selects which catalog and group ordering apply. The enumeration is closed,
// so catalog lookups are total; the General fallback only exists at the
// string boundary (CLI arguments, URL path segments).

use serde::{Deserialize, Serialize};

// ============================================================================
// BUSINESS TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessType {
    /// Generic retail / services (also the fallback vertical)
    General,

    /// Clinic or hospital
    Hospital,

    /// LPG cylinder and bulk gas station
    LpgStation,

    /// Supermarket / grocery
    Supermarket,

    /// School or training institution
    Education,

    /// Property management
    RealEstate,
}

impl BusinessType {
    /// Every vertical, in declaration order.
    pub const ALL: [BusinessType; 6] = [
        BusinessType::General,
        BusinessType::Hospital,
        BusinessType::LpgStation,
        BusinessType::Supermarket,
        BusinessType::Education,
        BusinessType::RealEstate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::General => "General",
            BusinessType::Hospital => "Hospital",
            BusinessType::LpgStation => "LPG Station",
            BusinessType::Supermarket => "Supermarket",
            BusinessType::Education => "Education",
            BusinessType::RealEstate => "Real Estate",
        }
    }

    /// Parse a boundary string, falling back to General.
    ///
    /// Unmapped business types resolve to the General catalog by policy
    /// rather than failing, so this never errors. Accepts the display name
    /// or the kebab/snake identifier, case-insensitively.
    pub fn from_param(s: &str) -> BusinessType {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "hospital" => BusinessType::Hospital,
            "lpgstation" | "lpg" => BusinessType::LpgStation,
            "supermarket" => BusinessType::Supermarket,
            "education" | "school" => BusinessType::Education,
            "realestate" => BusinessType::RealEstate,
            _ => BusinessType::General,
        }
    }

    /// Next vertical in the cycle (used by the TUI preview).
    pub fn next(&self) -> BusinessType {
        match self {
            BusinessType::General => BusinessType::Hospital,
            BusinessType::Hospital => BusinessType::LpgStation,
            BusinessType::LpgStation => BusinessType::Supermarket,
            BusinessType::Supermarket => BusinessType::Education,
            BusinessType::Education => BusinessType::RealEstate,
            BusinessType::RealEstate => BusinessType::General,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_known_verticals() {
        assert_eq!(BusinessType::from_param("Hospital"), BusinessType::Hospital);
        assert_eq!(
            BusinessType::from_param("lpg-station"),
            BusinessType::LpgStation
        );
        assert_eq!(
            BusinessType::from_param("real_estate"),
            BusinessType::RealEstate
        );
        assert_eq!(
            BusinessType::from_param("SUPERMARKET"),
            BusinessType::Supermarket
        );
    }

    #[test]
    fn test_from_param_falls_back_to_general() {
        assert_eq!(BusinessType::from_param("pharmacy"), BusinessType::General);
        assert_eq!(BusinessType::from_param(""), BusinessType::General);
    }

    #[test]
    fn test_next_cycles_through_all_verticals() {
        let mut seen = vec![BusinessType::General];
        let mut current = BusinessType::General;
        for _ in 0..BusinessType::ALL.len() - 1 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen, BusinessType::ALL.to_vec());
        assert_eq!(current.next(), BusinessType::General);
    }
}
