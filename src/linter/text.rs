//! Word-level helpers shared by the voice and tone rules.

use std::collections::HashSet;

use regex::Regex;

use crate::config::Vocabulary;
use crate::error::Result;

/// Compiled word lists. Matching is whole-word and case-insensitive; an empty
/// list never matches.
#[derive(Debug, Clone)]
pub struct Lexicon {
    directive_verbs: HashSet<String>,
    modal: Option<Regex>,
    subjective: Option<Regex>,
    narrative_start: Option<Regex>,
}

fn alternation(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Some(escaped.join("|"))
}

fn word_pattern(words: &[String]) -> Result<Option<Regex>> {
    alternation(words)
        .map(|alt| Regex::new(&format!(r"(?i)\b(?:{alt})\b")))
        .transpose()
        .map_err(Into::into)
}

impl Lexicon {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let narrative_start = alternation(&vocabulary.narrative_openers)
            .map(|alt| Regex::new(&format!(r"(?i)^(?:{alt})\s")))
            .transpose()?;
        Ok(Self {
            directive_verbs: vocabulary
                .directive_verbs
                .iter()
                .map(|v| v.to_lowercase())
                .collect(),
            modal: word_pattern(&vocabulary.modal_verbs)?,
            subjective: word_pattern(&vocabulary.subjective_words)?,
            narrative_start,
        })
    }

    pub fn is_directive(&self, word: &str) -> bool {
        self.directive_verbs.contains(word)
    }

    pub fn has_modal(&self, text: &str) -> bool {
        self.modal.as_ref().is_some_and(|re| re.is_match(text))
    }

    pub fn count_modal(&self, text: &str) -> usize {
        count_matches(self.modal.as_ref(), text)
    }

    pub fn has_subjective(&self, text: &str) -> bool {
        self.subjective.as_ref().is_some_and(|re| re.is_match(text))
    }

    pub fn count_subjective(&self, text: &str) -> usize {
        count_matches(self.subjective.as_ref(), text)
    }

    /// True when `text` opens with a narrative pronoun or article followed
    /// by whitespace.
    pub fn starts_narrative(&self, text: &str) -> bool {
        self.narrative_start
            .as_ref()
            .is_some_and(|re| re.is_match(text))
    }
}

fn count_matches(pattern: Option<&Regex>, text: &str) -> usize {
    pattern.map_or(0, |re| re.find_iter(text).count())
}

/// First word of a paragraph: a leading `-`/`*`/`+` marker is dropped, then
/// the first whitespace-separated piece is reduced to ASCII letters and `-`
/// and lowercased.
pub fn first_word(text: &str) -> String {
    let text = text.trim();
    let text = match text.strip_prefix(['-', '*', '+']) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => text,
    };
    text.split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

const VARIATION_SELECTOR: char = '\u{FE0F}';
const KEYCAP: char = '\u{20E3}';

/// True when `text` contains at least one emoji. ASCII characters (digits,
/// `#`, `*`) only count when they start a keycap or emoji-presentation
/// sequence.
pub fn contains_emoji(text: &str) -> bool {
    let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    for (n, &start) in starts.iter().enumerate() {
        let mut chars = text[start..].chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if first.is_ascii() && !matches!(chars.next(), Some(VARIATION_SELECTOR | KEYCAP)) {
            continue;
        }
        for len in 1..=3 {
            let end = starts.get(n + len).copied().unwrap_or(text.len());
            if emojis::get(&text[start..end]).is_some() {
                return true;
            }
            if end == text.len() {
                break;
            }
        }
    }
    false
}
