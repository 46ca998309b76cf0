use lingua::{LanguageDetector, LanguageDetectorBuilder};

/// Local language detection for requests that ask for `auto` where the vendor
/// cannot detect by itself (speech synthesis needs a concrete locale).
pub struct LanguageDetection {
    detector: LanguageDetector,
    fallback: &'static str,
}

impl LanguageDetection {
    /// Detector over every language compiled into lingua; see the feature list in Cargo.toml
    pub fn new(fallback: &'static str) -> Self {
        Self {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
            fallback,
        }
    }

    /// ISO 639-1 code of the detected language, or the fallback when detection
    /// fails or lands on a language the catalog does not know
    pub fn detect_code(&self, text: &str) -> &'static str {
        let detected = self
            .detector
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string());

        match detected.as_deref().and_then(super::find) {
            Some(language) => language.code,
            None => {
                tracing::warn!(
                    fallback = self.fallback,
                    "Could not detect language, using fallback"
                );
                self.fallback
            }
        }
    }
}
