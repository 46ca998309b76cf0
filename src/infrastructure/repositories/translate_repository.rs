use crate::domain::translation::VendorTranslation;
use crate::error::AppResult;
use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the translation vendor behind the translate endpoint.
#[async_trait]
pub trait TranslateRepository: Send + Sync {
    /// Translate `text` into `target`.
    ///
    /// `source` is `None` when the vendor should detect the source language.
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> AppResult<VendorTranslation>;
}
