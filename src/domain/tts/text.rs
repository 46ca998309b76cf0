use regex::Regex;
use std::sync::OnceLock;

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("valid url regex"))
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?。！？]+\s*").expect("valid sentence regex"))
}

/// Prepare text for speech: drop URLs and collapse whitespace
pub fn clean_text(text: &str) -> String {
    let without_urls = url_pattern().replace_all(text, "");
    let normalized = whitespace_pattern().replace_all(&without_urls, " ");
    normalized.trim().to_string()
}

/// Split text into batches of at most `max_chars` characters, preferring
/// sentence boundaries. Sentences longer than the limit are cut by characters.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut last_end = 0;

    let mut sentences: Vec<&str> = sentence_pattern()
        .find_iter(text)
        .map(|mat| {
            let sentence = &text[last_end..mat.end()];
            last_end = mat.end();
            sentence
        })
        .collect();
    if last_end < text.len() {
        sentences.push(&text[last_end..]);
    }

    for sentence in sentences {
        let sentence_len = sentence.chars().count();

        if current_len > 0 && current_len + sentence_len > max_chars {
            push_trimmed(&mut batches, &current);
            current.clear();
            current_len = 0;
        }

        if sentence_len > max_chars {
            let chars: Vec<char> = sentence.chars().collect();
            for chunk in chars.chunks(max_chars) {
                push_trimmed(&mut batches, &chunk.iter().collect::<String>());
            }
            continue;
        }

        current.push_str(sentence);
        current_len += sentence_len;
    }

    push_trimmed(&mut batches, &current);
    batches
}

fn push_trimmed(batches: &mut Vec<String>, batch: &str) {
    let trimmed = batch.trim();
    if !trimmed.is_empty() {
        batches.push(trimmed.to_string());
    }
}
