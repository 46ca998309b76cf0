pub mod catalog;
pub mod detection;

pub use catalog::{Language, TextDirection, AUTO_DETECT, LANGUAGES, REGIONS};
pub use detection::LanguageDetection;

use serde::Deserialize;

/// Voice capability used to filter the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Stt,
    Tts,
}

/// Reduce a locale tag to the catalog's code: `en-US` and `en_us` become `en`.
/// Three letter codes such as `chr` and `haw` are kept as they are.
pub fn normalize_code(code: &str) -> String {
    let lowered = code.trim().to_lowercase();
    let primary = lowered
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_string();

    if find(&lowered).is_some() {
        lowered
    } else {
        // Google reports Chinese variants as zh-CN / zh-TW; the catalog only knows zh.
        primary
    }
}

pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

pub fn is_auto(code: &str) -> bool {
    code.trim().is_empty() || code.eq_ignore_ascii_case(AUTO_DETECT)
}

/// Catalog entries sorted by popularity, optionally narrowed by region and capability
pub fn list(region: Option<&str>, capability: Option<Capability>) -> Vec<&'static Language> {
    let mut languages: Vec<&'static Language> = LANGUAGES
        .iter()
        .filter(|l| match region {
            Some(region) => l
                .region
                .split('/')
                .any(|r| r.eq_ignore_ascii_case(region.trim())),
            None => true,
        })
        .filter(|l| match capability {
            Some(Capability::Stt) => l.has_stt,
            Some(Capability::Tts) => l.has_tts,
            None => true,
        })
        .collect();

    languages.sort_by_key(|l| l.popularity);
    languages
}
