//! Numerus (plural form) rules.
//!
//! A numerus message carries one translation per plural category of the
//! target language. The rule decides how many forms a catalog must supply
//! and which form is used for a given count.

use std::fmt;

/// Plural rule families, named after a representative language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// No plural distinction (Chinese, Japanese, Korean, Turkish, ...).
    Single,
    /// `n == 1` / other (English, German, Georgian, ...).
    #[default]
    OneOther,
    /// `n <= 1` / other (French, Brazilian Portuguese, ...).
    ZeroOneOther,
    /// Russian, Ukrainian, Croatian, Serbian, ...
    Slavic,
    Polish,
    /// Czech and Slovak.
    Czech,
    Lithuanian,
    Latvian,
    Romanian,
    Slovenian,
    Irish,
    Arabic,
}

impl PluralRule {
    /// Resolve a TS `language` attribute (`ka_GE`, `pt-BR`, `ar`).
    ///
    /// The full tag is tried first so regional variants with different rules
    /// (`pt_BR` vs `pt`) resolve correctly, then the primary language subtag.
    pub fn for_language(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('-', "_").to_ascii_lowercase();
        if normalized.is_empty() {
            return None;
        }
        if let Some(rule) = Self::for_full_tag(&normalized) {
            return Some(rule);
        }
        let primary = normalized.split('_').next().unwrap_or_default();
        Self::for_primary_language(primary)
    }

    fn for_full_tag(tag: &str) -> Option<Self> {
        match tag {
            "pt_br" => Some(Self::ZeroOneOther),
            _ => None,
        }
    }

    fn for_primary_language(language: &str) -> Option<Self> {
        let rule = match language {
            "zh" | "ja" | "ko" | "id" | "ms" | "fa" | "tr" | "hu" | "th" | "vi" | "jv" | "my"
            | "bo" | "dz" | "lo" | "km" | "su" | "yo" | "tt" => Self::Single,
            "en" | "de" | "nl" | "sv" | "da" | "no" | "nb" | "nn" | "fo" | "it" | "es" | "pt"
            | "ca" | "bg" | "el" | "fi" | "et" | "he" | "eo" | "ka" | "af" | "eu" | "gl" | "is"
            | "sq" | "az" | "kk" | "mn" | "hi" | "bn" | "ta" | "te" | "ur" | "sw" => Self::OneOther,
            "fr" | "hy" | "br" | "fil" | "ti" | "wa" | "oc" => Self::ZeroOneOther,
            "ru" | "uk" | "be" | "hr" | "sr" | "bs" => Self::Slavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            "lt" => Self::Lithuanian,
            "lv" => Self::Latvian,
            "ro" | "mo" => Self::Romanian,
            "sl" => Self::Slovenian,
            "ga" => Self::Irish,
            "ar" => Self::Arabic,
            _ => return None,
        };
        Some(rule)
    }

    /// Number of numerus forms a translation must supply.
    pub fn form_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::OneOther | Self::ZeroOneOther => 2,
            Self::Slavic
            | Self::Polish
            | Self::Czech
            | Self::Lithuanian
            | Self::Latvian
            | Self::Romanian => 3,
            Self::Slovenian => 4,
            Self::Irish => 5,
            Self::Arabic => 6,
        }
    }

    /// Index of the numerus form used for `n`.
    pub fn form_index(&self, n: u64) -> usize {
        let n10 = n % 10;
        let n100 = n % 100;
        let teen = (10..20).contains(&n100);
        match self {
            Self::Single => 0,
            Self::OneOther => usize::from(n != 1),
            Self::ZeroOneOther => usize::from(n > 1),
            Self::Slavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !teen {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !teen {
                    1
                } else {
                    2
                }
            }
            Self::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !teen {
                    1
                } else {
                    2
                }
            }
            Self::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Irish => match n {
                1 => 0,
                2 => 1,
                3..=6 => 2,
                7..=10 => 3,
                _ => 4,
            },
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
        }
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single",
            Self::OneOther => "one-other",
            Self::ZeroOneOther => "zero-one-other",
            Self::Slavic => "slavic",
            Self::Polish => "polish",
            Self::Czech => "czech",
            Self::Lithuanian => "lithuanian",
            Self::Latvian => "latvian",
            Self::Romanian => "romanian",
            Self::Slovenian => "slovenian",
            Self::Irish => "irish",
            Self::Arabic => "arabic",
        };
        write!(f, "{}", name)
    }
}
