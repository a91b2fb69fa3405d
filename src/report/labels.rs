//! Display labels for vPIC variables and derived fields.

use serde::{Deserialize, Serialize};

/// Language used for field labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// vPIC variable names as-is.
    #[default]
    English,
    Ukrainian,
}

pub const MAKE: &str = "Make";
pub const MODEL: &str = "Model";
pub const MODEL_YEAR: &str = "Model Year";
pub const TRIM: &str = "Trim";
pub const DISPLACEMENT_L: &str = "Displacement (L)";
pub const FUEL_TYPE: &str = "Fuel Type - Primary";
pub const TRANSMISSION: &str = "Transmission Style";
pub const DRIVE_TYPE: &str = "Drive Type";
pub const PLANT_COUNTRY: &str = "Plant Country";

/// Model year computed offline when vPIC reports none.
pub const ESTIMATED_MODEL_YEAR: &str = "Estimated Model Year";
/// Region computed offline from the lead character.
pub const REGION: &str = "Region";
/// Country reported by the WMI lookup.
pub const WMI_COUNTRY: &str = "WMI Country";
/// Manufacturer reported by the WMI lookup.
pub const MANUFACTURER: &str = "Manufacturer";

/// vPIC variable name → Ukrainian label.
static UKRAINIAN: &[(&str, &str)] = &[
    ("Active Safety System Note", "Системи безпеки (примітка)"),
    ("Battery Info", "Інформація про батарею"),
    ("Battery Type", "Тип батареї"),
    ("Body Class", "Тип кузова"),
    ("Displacement (CC)", "Об’єм двигуна (см³)"),
    ("Displacement (L)", "Об’єм двигуна (л)"),
    ("Doors", "Двері"),
    ("Drive Type", "Тип приводу"),
    ("EV Drive Unit", "Електропривід"),
    ("Electrification Level", "Рівень електрифікації"),
    ("Engine Cylinders", "Кількість циліндрів"),
    ("Engine Manufacturer", "Виробник двигуна"),
    ("Engine Model", "Модель двигуна"),
    ("Estimated Model Year", "Орієнтовний рік"),
    ("Fuel Type - Primary", "Тип палива"),
    ("Fuel Type - Secondary", "Тип палива (2)"),
    ("GVWR", "Повна маса"),
    ("Make", "Марка"),
    ("Manufacturer", "Виробник"),
    ("Model", "Модель"),
    ("Model Year", "Рік"),
    ("Number of Seats", "Кількість місць"),
    ("Other Engine Info", "Інфо про двигун"),
    ("Plant City", "Місто заводу"),
    ("Plant Country", "Країна (завод)"),
    ("Region", "Регіон"),
    ("Seat Belts All", "Кількість ременів"),
    ("Series", "Серія"),
    ("Steering Location", "Розташування керма"),
    ("Top Speed (MPH)", "Макс. швидкість (миль/год)"),
    ("Transmission Style", "КПП"),
    ("Trim", "Комплектація"),
    ("Turbo", "Турбонадув"),
    ("WMI Country", "Країна (WMI)"),
];

/// Localised label for a vPIC variable or derived field name.
///
/// Names without a translation are returned unchanged.
pub fn label(locale: Locale, variable: &str) -> &str {
    match locale {
        Locale::English => variable,
        Locale::Ukrainian => UKRAINIAN
            .binary_search_by(|(key, _)| key.cmp(&variable))
            .map(|i| UKRAINIAN[i].1)
            .unwrap_or(variable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_identity() {
        assert_eq!(label(Locale::English, "Body Class"), "Body Class");
        assert_eq!(label(Locale::English, ESTIMATED_MODEL_YEAR), "Estimated Model Year");
    }

    #[test]
    fn ukrainian_known() {
        assert_eq!(label(Locale::Ukrainian, MAKE), "Марка");
        assert_eq!(label(Locale::Ukrainian, MODEL_YEAR), "Рік");
        assert_eq!(label(Locale::Ukrainian, REGION), "Регіон");
        assert_eq!(label(Locale::Ukrainian, "GVWR"), "Повна маса");
    }

    #[test]
    fn ukrainian_passthrough() {
        assert_eq!(label(Locale::Ukrainian, "Wheel Base (inches)"), "Wheel Base (inches)");
    }

    #[test]
    fn table_is_sorted() {
        for window in UKRAINIAN.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "labels not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
