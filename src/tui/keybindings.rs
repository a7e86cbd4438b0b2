//! Keybinding definitions
//!
//! Defines the keyboard shortcuts shown in the help dialog. The handler in
//! `handler.rs` implements them.

use crate::models::Locale;

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active while the city list is focused
    Cities,
    /// Active while the language selector is focused
    Language,
}

impl KeyContext {
    /// Section heading for the help dialog
    pub fn heading(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Global, Locale::En) => "Global Keys",
            (Self::Global, Locale::Fr) => "Touches globales",
            (Self::Cities, Locale::En) => "City List",
            (Self::Cities, Locale::Fr) => "Liste des villes",
            (Self::Language, Locale::En) => "Language",
            (Self::Language, Locale::Fr) => "Langue",
        }
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Key label as shown to the user
    pub keys: &'static str,
    /// English description
    pub description_en: &'static str,
    /// French description
    pub description_fr: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

impl Keybinding {
    /// Description in the given locale
    pub fn description(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.description_en,
            Locale::Fr => self.description_fr,
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: "q/Esc",
        description_en: "Quit",
        description_fr: "Quitter",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "?",
        description_en: "Show/hide help",
        description_fr: "Afficher/masquer l'aide",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "Tab",
        description_en: "Switch between cities and language",
        description_fr: "Basculer entre villes et langue",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "l/L",
        description_en: "Toggle language",
        description_fr: "Changer de langue",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "j/↓",
        description_en: "Next city",
        description_fr: "Ville suivante",
        context: KeyContext::Cities,
    },
    Keybinding {
        keys: "k/↑",
        description_en: "Previous city",
        description_fr: "Ville précédente",
        context: KeyContext::Cities,
    },
    Keybinding {
        keys: "g/Home",
        description_en: "First city",
        description_fr: "Première ville",
        context: KeyContext::Cities,
    },
    Keybinding {
        keys: "G/End",
        description_en: "Last city",
        description_fr: "Dernière ville",
        context: KeyContext::Cities,
    },
    Keybinding {
        keys: "j/k/Enter",
        description_en: "Switch language",
        description_fr: "Changer de langue",
        context: KeyContext::Language,
    },
    Keybinding {
        keys: "e",
        description_en: "English (CA)",
        description_fr: "English (CA)",
        context: KeyContext::Language,
    },
    Keybinding {
        keys: "f",
        description_en: "Français (CA)",
        description_fr: "Français (CA)",
        context: KeyContext::Language,
    },
];

/// Keybindings active in a context
pub fn bindings_for(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |k| k.context == context)
}
