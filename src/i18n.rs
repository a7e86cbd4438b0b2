//! Localization table
//!
//! Fixed display strings live in one static record per locale. The two
//! city-dependent labels are plain formatting functions of (locale, city)
//! so the string tables stay pure data.

use crate::models::{City, Locale};

/// Fixed display strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedStrings {
    /// Dashboard title
    pub title: &'static str,
    /// Prompt shown next to the city selector
    pub select_city: &'static str,
    /// Rent chart heading
    pub rent_title: &'static str,
    /// Rent chart description
    pub rent_desc: &'static str,
    /// Grocery chart heading
    pub grocery_title: &'static str,
    /// Grocery chart description
    pub grocery_desc: &'static str,
    /// Utilities chart heading
    pub utilities_title: &'static str,
    /// Utilities chart description
    pub utilities_desc: &'static str,
    /// Grocery series label
    pub grocery_label: &'static str,
    /// Disclaimer shown under the title
    pub footer_note: &'static str,
}

impl LocalizedStrings {
    /// All fixed strings with their field names, in display order
    pub fn entries(&self) -> [(&'static str, &'static str); 10] {
        [
            ("title", self.title),
            ("select_city", self.select_city),
            ("rent_title", self.rent_title),
            ("rent_desc", self.rent_desc),
            ("grocery_title", self.grocery_title),
            ("grocery_desc", self.grocery_desc),
            ("utilities_title", self.utilities_title),
            ("utilities_desc", self.utilities_desc),
            ("grocery_label", self.grocery_label),
            ("footer_note", self.footer_note),
        ]
    }
}

static EN: LocalizedStrings = LocalizedStrings {
    title: "Cost of Living Dashboard",
    select_city: "Select City:",
    rent_title: "Monthly Rent Trend",
    rent_desc: "Shows average rent per month for the selected city.",
    grocery_title: "Average Grocery Cost by City",
    grocery_desc: "Compares the average grocery cost across all cities.",
    utilities_title: "Monthly Utilities Trend",
    utilities_desc: "Displays estimated monthly utility costs for the selected city.",
    grocery_label: "Grocery Cost (CAD/month)",
    footer_note: "Note: All data is synthetic and generated for academic purposes only. \
                  All values are in Canadian dollars (CAD).",
};

static FR: LocalizedStrings = LocalizedStrings {
    title: "Tableau du Coût de la Vie",
    select_city: "Sélectionnez une ville :",
    rent_title: "Tendance du Loyer Mensuel",
    rent_desc: "Affiche le loyer moyen par mois pour la ville choisie.",
    grocery_title: "Coût Moyen des Épiceries par Ville",
    grocery_desc: "Compare le coût moyen des épiceries entre les villes.",
    utilities_title: "Tendance des Coûts des Services Publics",
    utilities_desc: "Affiche les coûts mensuels estimés des services publics pour la ville choisie.",
    grocery_label: "Coût de l’épicerie (CAD/mois)",
    footer_note: "Remarque : Les données sont synthétiques et générées à des fins éducatives. \
                  Toutes les valeurs sont en dollars canadiens (CAD).",
};

/// Fixed display strings for a locale
pub fn strings(locale: Locale) -> &'static LocalizedStrings {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
    }
}

/// Title of the language selector
pub fn language_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Language",
        Locale::Fr => "Langue",
    }
}

/// Rent series label for a city
pub fn rent_label(locale: Locale, city: City) -> String {
    match locale {
        Locale::En => format!("Rent in {} (CAD/month)", city),
        Locale::Fr => format!("Loyer à {} (CAD/mois)", city),
    }
}

/// Utilities series label for a city
pub fn utilities_label(locale: Locale, city: City) -> String {
    match locale {
        Locale::En => format!("Utilities in {} (CAD/month)", city),
        Locale::Fr => format!("Services à {} (CAD/mois)", city),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_string_non_empty() {
        for locale in Locale::ALL {
            for (key, value) in strings(locale).entries() {
                assert!(!value.trim().is_empty(), "{} is empty for {}", key, locale);
            }
            for city in City::ALL {
                assert!(!rent_label(locale, city).is_empty());
                assert!(!utilities_label(locale, city).is_empty());
            }
        }
    }

    #[test]
    fn test_locales_differ_everywhere() {
        let en = strings(Locale::En).entries();
        let fr = strings(Locale::Fr).entries();
        for ((key, en_value), (_, fr_value)) in en.iter().zip(fr.iter()) {
            assert_ne!(en_value, fr_value, "{} is not translated", key);
        }
    }

    #[test]
    fn test_city_labels() {
        assert_eq!(
            rent_label(Locale::Fr, City::Calgary),
            "Loyer à Calgary (CAD/mois)"
        );
        assert_eq!(
            rent_label(Locale::En, City::StJohns),
            "Rent in St. John's (CAD/month)"
        );
        assert_eq!(
            utilities_label(Locale::En, City::QuebecCity),
            "Utilities in Quebec City (CAD/month)"
        );
        assert_eq!(
            utilities_label(Locale::Fr, City::Regina),
            "Services à Regina (CAD/mois)"
        );
    }

    #[test]
    fn test_footer_continuation() {
        assert_eq!(
            strings(Locale::En).footer_note,
            "Note: All data is synthetic and generated for academic purposes only. \
             All values are in Canadian dollars (CAD)."
        );
    }

    #[test]
    fn test_language_label() {
        assert_eq!(language_label(Locale::En), "Language");
        assert_eq!(language_label(Locale::Fr), "Langue");
    }
}
