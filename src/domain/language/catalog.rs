use serde::Serialize;

/// Writing direction of a language's script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// A language offered by the translator UI, with the voice features it supports
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub region: &'static str,
    pub direction: TextDirection,
    #[serde(rename = "hasSTT")]
    pub has_stt: bool,
    #[serde(rename = "hasTTS")]
    pub has_tts: bool,
    /// 1 (experimental) to 5 (production grade)
    pub quality: u8,
    /// Usage rank, 1 is most popular
    pub popularity: u16,
}

/// Pseudo language code asking the vendor to detect the source language
pub const AUTO_DETECT: &str = "auto";

pub const REGIONS: &[&str] = &[
    "Europe",
    "Asia",
    "Americas",
    "Africa",
    "Middle East",
    "Oceania",
    "Universal",
];

#[allow(clippy::too_many_arguments)]
const fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    region: &'static str,
    direction: TextDirection,
    has_stt: bool,
    has_tts: bool,
    quality: u8,
    popularity: u16,
) -> Language {
    Language {
        code,
        name,
        native_name,
        region,
        direction,
        has_stt,
        has_tts,
        quality,
        popularity,
    }
}

pub static LANGUAGES: &[Language] = &[
    lang("auto", "Auto-detect", "Auto-detect", "Universal", TextDirection::Ltr, true, false, 5, 1),
    lang("en", "English", "English", "Europe/Americas", TextDirection::Ltr, true, true, 5, 2),
    lang("zh", "Chinese (Simplified)", "中文 (简体)", "Asia", TextDirection::Ltr, true, true, 5, 3),
    lang("es", "Spanish", "Español", "Europe/Americas", TextDirection::Ltr, true, true, 5, 4),
    lang("hi", "Hindi", "हिन्दी", "Asia", TextDirection::Ltr, true, true, 5, 5),
    lang("ar", "Arabic", "العربية", "Middle East/Africa", TextDirection::Rtl, true, true, 5, 6),
    lang("pt", "Portuguese", "Português", "Europe/Americas", TextDirection::Ltr, true, true, 5, 7),
    lang("bn", "Bengali", "বাংলা", "Asia", TextDirection::Ltr, true, true, 4, 8),
    lang("ru", "Russian", "Русский", "Europe/Asia", TextDirection::Ltr, true, true, 5, 9),
    lang("ja", "Japanese", "日本語", "Asia", TextDirection::Ltr, true, true, 5, 10),
    lang("fr", "French", "Français", "Europe", TextDirection::Ltr, true, true, 5, 11),
    lang("de", "German", "Deutsch", "Europe", TextDirection::Ltr, true, true, 5, 12),
    lang("it", "Italian", "Italiano", "Europe", TextDirection::Ltr, true, true, 5, 13),
    lang("nl", "Dutch", "Nederlands", "Europe", TextDirection::Ltr, true, true, 4, 14),
    lang("pl", "Polish", "Polski", "Europe", TextDirection::Ltr, true, true, 4, 15),
    lang("sv", "Swedish", "Svenska", "Europe", TextDirection::Ltr, true, true, 4, 16),
    lang("no", "Norwegian", "Norsk", "Europe", TextDirection::Ltr, true, true, 4, 17),
    lang("da", "Danish", "Dansk", "Europe", TextDirection::Ltr, true, true, 4, 18),
    lang("fi", "Finnish", "Suomi", "Europe", TextDirection::Ltr, true, true, 4, 19),
    lang("el", "Greek", "Ελληνικά", "Europe", TextDirection::Ltr, true, true, 4, 20),
    lang("ko", "Korean", "한국어", "Asia", TextDirection::Ltr, true, true, 5, 21),
    lang("th", "Thai", "ไทย", "Asia", TextDirection::Ltr, true, true, 4, 22),
    lang("vi", "Vietnamese", "Tiếng Việt", "Asia", TextDirection::Ltr, true, true, 4, 23),
    lang("id", "Indonesian", "Bahasa Indonesia", "Asia", TextDirection::Ltr, true, true, 4, 24),
    lang("ms", "Malay", "Bahasa Melayu", "Asia", TextDirection::Ltr, true, true, 4, 25),
    lang("tl", "Filipino", "Filipino", "Asia", TextDirection::Ltr, true, true, 3, 26),
    lang("ur", "Urdu", "اردو", "Asia", TextDirection::Rtl, true, true, 4, 27),
    lang("fa", "Persian", "فارسی", "Middle East", TextDirection::Rtl, true, true, 4, 28),
    lang("he", "Hebrew", "עברית", "Middle East", TextDirection::Rtl, true, true, 4, 29),
    lang("tr", "Turkish", "Türkçe", "Europe/Asia", TextDirection::Ltr, true, true, 4, 30),
    lang("sw", "Swahili", "Kiswahili", "Africa", TextDirection::Ltr, true, true, 3, 31),
    lang("am", "Amharic", "አማርኛ", "Africa", TextDirection::Ltr, true, false, 3, 32),
    lang("ha", "Hausa", "Hausa", "Africa", TextDirection::Ltr, false, false, 2, 33),
    lang("yo", "Yoruba", "Yorùbá", "Africa", TextDirection::Ltr, false, false, 2, 34),
    lang("ig", "Igbo", "Igbo", "Africa", TextDirection::Ltr, false, false, 2, 35),
    lang("zu", "Zulu", "isiZulu", "Africa", TextDirection::Ltr, false, false, 2, 36),
    lang("xh", "Xhosa", "isiXhosa", "Africa", TextDirection::Ltr, false, false, 2, 37),
    lang("af", "Afrikaans", "Afrikaans", "Africa", TextDirection::Ltr, true, true, 3, 38),
    lang("qu", "Quechua", "Runasimi", "Americas", TextDirection::Ltr, false, false, 1, 39),
    lang("gn", "Guarani", "Avañe'ẽ", "Americas", TextDirection::Ltr, false, false, 1, 40),
    lang("ay", "Aymara", "Aymar aru", "Americas", TextDirection::Ltr, false, false, 1, 41),
    lang("nv", "Navajo", "Diné bizaad", "Americas", TextDirection::Ltr, false, false, 1, 42),
    lang("chr", "Cherokee", "ᏣᎳᎩ", "Americas", TextDirection::Ltr, false, false, 1, 43),
    lang("haw", "Hawaiian", "ʻŌlelo Hawaiʻi", "Oceania", TextDirection::Ltr, false, false, 2, 44),
    lang("mi", "Māori", "Te Reo Māori", "Oceania", TextDirection::Ltr, true, true, 3, 45),
    lang("sm", "Samoan", "Gagana Sāmoa", "Oceania", TextDirection::Ltr, false, false, 2, 46),
    lang("to", "Tongan", "Lea Fakatonga", "Oceania", TextDirection::Ltr, false, false, 2, 47),
    lang("fj", "Fijian", "Na Vosa Vakaviti", "Oceania", TextDirection::Ltr, false, false, 2, 48),
    lang("cy", "Welsh", "Cymraeg", "Europe", TextDirection::Ltr, true, true, 3, 49),
    lang("ga", "Irish", "Gaeilge", "Europe", TextDirection::Ltr, true, true, 3, 50),
    lang("gd", "Scottish Gaelic", "Gàidhlig", "Europe", TextDirection::Ltr, false, false, 2, 51),
    lang("eu", "Basque", "Euskera", "Europe", TextDirection::Ltr, true, true, 3, 52),
    lang("ca", "Catalan", "Català", "Europe", TextDirection::Ltr, true, true, 4, 53),
    lang("gl", "Galician", "Galego", "Europe", TextDirection::Ltr, true, true, 3, 54),
    lang("mt", "Maltese", "Malti", "Europe", TextDirection::Ltr, false, false, 2, 55),
    lang("is", "Icelandic", "Íslenska", "Europe", TextDirection::Ltr, true, true, 3, 56),
    lang("fo", "Faroese", "Føroyskt", "Europe", TextDirection::Ltr, false, false, 2, 57),
    lang("kl", "Greenlandic", "Kalaallisut", "Americas", TextDirection::Ltr, false, false, 1, 58),
];
