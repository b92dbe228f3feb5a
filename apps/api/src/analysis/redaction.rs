//! Redaction — produces a layout-identical but meaningless copy of resume
//! text for unauthenticated previews.
//!
//! Every letter run is swapped for a pronounceable placeholder of the same
//! length and leading case. Whitespace, punctuation, digits and bullet glyphs
//! pass through, so line breaks and column alignment survive exactly.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};

use crate::models::resume::{PersonalInfo, Section};

pub const PHONE_MASK: &str = "***-***-****";
pub const LINKEDIN_MASK: &str = "linkedin.com/in/********";

const CONSONANTS: &[u8] = b"bcdfghklmnprstvwz";
const VOWELS: &[u8] = b"aeiou";
const FALLBACK_TLD: &str = "com";

/// A word unit: letter runs joined by single `'`, `-` or `/` ("self-taught", "CI/CD").
static WORD_UNIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+(?:['\-/]\p{L}+)*").unwrap());

/// Replaces every letter run in `text` with a same-length synthetic word.
pub fn redact_text(text: &str) -> String {
    let mut rng = rand::thread_rng();
    WORD_UNIT
        .replace_all(text, |caps: &Captures| redact_unit(&caps[0], &mut rng))
        .into_owned()
}

/// Redacts each section's content. Titles are generic and kept.
pub fn redact_sections(sections: &[Section]) -> Vec<Section> {
    sections
        .iter()
        .map(|section| Section::new(section.title.clone(), redact_text(&section.content)))
        .collect()
}

/// Masks contact details field by field. Absent fields stay absent.
pub fn redact_personal_info(info: &PersonalInfo) -> PersonalInfo {
    PersonalInfo {
        full_name: info.full_name.as_deref().map(redact_text),
        email: info.email.as_deref().map(redact_email),
        phone: info.phone.as_deref().map(|phone| mask(phone, PHONE_MASK)),
        location: info.location.as_deref().map(redact_text),
        linkedin: info.linkedin.as_deref().map(|url| mask(url, LINKEDIN_MASK)),
    }
}

fn mask(value: &str, masked: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        masked.to_string()
    }
}

/// `<gibberish>@<gibberish>.<tld>` keeping only the original top-level domain.
fn redact_email(email: &str) -> String {
    if email.is_empty() {
        return String::new();
    }
    let (local, domain) = email.rsplit_once('@').unwrap_or((email, ""));
    let (host, tld) = match domain.rsplit_once('.') {
        Some((host, tld)) if !tld.is_empty() => (host, tld),
        _ => (domain, FALLBACK_TLD),
    };

    let mut rng = rand::thread_rng();
    let local = synthetic_word(local.chars().count().max(1), false, &mut rng);
    let host = synthetic_word(host.chars().count().max(1), false, &mut rng);
    format!("{local}@{host}.{tld}")
}

fn redact_unit(unit: &str, rng: &mut impl Rng) -> String {
    let mut out = String::with_capacity(unit.len());
    let mut run = String::new();
    for c in unit.chars() {
        if c.is_alphabetic() {
            run.push(c);
        } else {
            out.push_str(&redact_run(&run, rng));
            run.clear();
            out.push(c);
        }
    }
    out.push_str(&redact_run(&run, rng));
    out
}

fn redact_run(run: &str, rng: &mut impl Rng) -> String {
    if run.is_empty() {
        return String::new();
    }
    let len = run.chars().count();
    let capitalize = run.chars().next().is_some_and(char::is_uppercase);
    loop {
        let word = synthetic_word(len, capitalize, rng);
        if !word.eq_ignore_ascii_case(run) {
            return word;
        }
    }
}

/// Alternates consonant and vowel characters, starting with a consonant.
fn synthetic_word(len: usize, capitalize: bool, rng: &mut impl Rng) -> String {
    (0..len)
        .map(|i| {
            let pool = if i % 2 == 0 { CONSONANTS } else { VOWELS };
            let c = pool[rng.gen_range(0..pool.len())] as char;
            if i == 0 && capitalize {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_runs(text: &str) -> Vec<usize> {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|run| !run.is_empty())
            .map(|run| run.chars().count())
            .collect()
    }

    fn skeleton(text: &str) -> String {
        text.chars()
            .map(|c| if c.is_alphabetic() { 'x' } else { c })
            .collect()
    }

    #[test]
    fn test_redacted_text_differs_but_keeps_shape() {
        let text = "Senior Rust engineer at Acme";
        let redacted = redact_text(text);
        assert_ne!(redacted, text);
        assert_eq!(skeleton(&redacted), skeleton(text));
        assert_eq!(letter_runs(&redacted), letter_runs(text));
        assert_eq!(
            redacted.split_whitespace().count(),
            text.split_whitespace().count()
        );
    }

    #[test]
    fn test_single_letter_words_still_change() {
        for _ in 0..50 {
            assert_ne!(redact_text("a"), "a");
            assert_ne!(redact_text("I"), "I");
            assert_ne!(redact_text("b"), "b");
        }
    }

    #[test]
    fn test_layout_and_non_letters_preserved() {
        let text = "• Cut p99 latency by 40% (2021–2023)\n\n  - Built CI/CD: don't panic!";
        let redacted = redact_text(text);
        assert_eq!(skeleton(&redacted), skeleton(text));
        assert_eq!(redacted.lines().count(), text.lines().count());
        assert!(redacted.starts_with("• "));
        assert!(redacted.contains("40% (2021–2023)\n\n  - "));
    }

    #[test]
    fn test_joiners_kept_verbatim() {
        let redacted = redact_text("self-taught don't CI/CD");
        let chars: Vec<char> = redacted.chars().collect();
        assert_eq!(chars[4], '-');
        assert_eq!(chars[15], '\'');
        assert_eq!(chars[20], '/');
    }

    #[test]
    fn test_leading_capital_preserved() {
        let redacted = redact_text("Alice bob CAROL");
        let words: Vec<&str> = redacted.split(' ').collect();
        assert!(words[0].starts_with(|c: char| c.is_ascii_uppercase()));
        assert!(words[1].chars().all(|c| c.is_ascii_lowercase()));
        assert!(words[2].starts_with(|c: char| c.is_ascii_uppercase()));
        assert!(words[2].chars().skip(1).all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_non_ascii_letters_redacted_to_same_length() {
        let redacted = redact_text("José Müller");
        assert_eq!(letter_runs(&redacted), vec![4, 6]);
        assert!(redacted.is_ascii());
    }

    #[test]
    fn test_text_without_letters_unchanged() {
        assert_eq!(redact_text(""), "");
        assert_eq!(redact_text("2019 - 2023 | 40%"), "2019 - 2023 | 40%");
    }

    #[test]
    fn test_synthetic_word_alternates_pools() {
        let mut rng = rand::thread_rng();
        let word = synthetic_word(9, true, &mut rng);
        for (i, c) in word.to_ascii_lowercase().bytes().enumerate() {
            let pool = if i % 2 == 0 { CONSONANTS } else { VOWELS };
            assert!(pool.contains(&c), "{word} at {i}");
        }
        assert!(word.starts_with(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_redact_sections_keeps_titles() {
        let sections = vec![Section::new("Experience", "Led the Rust migration")];
        let redacted = redact_sections(&sections);
        assert_eq!(redacted[0].title, "Experience");
        assert_ne!(redacted[0].content, sections[0].content);
        assert_eq!(skeleton(&redacted[0].content), skeleton(&sections[0].content));
    }

    #[test]
    fn test_phone_is_masked() {
        let info = PersonalInfo {
            phone: Some("604-555-1234".to_string()),
            ..Default::default()
        };
        assert_eq!(redact_personal_info(&info).phone.as_deref(), Some(PHONE_MASK));
    }

    #[test]
    fn test_linkedin_is_masked() {
        let info = PersonalInfo {
            linkedin: Some("https://linkedin.com/in/jane-doe".to_string()),
            ..Default::default()
        };
        assert_eq!(
            redact_personal_info(&info).linkedin.as_deref(),
            Some("linkedin.com/in/********")
        );
    }

    #[test]
    fn test_email_keeps_only_tld() {
        let info = PersonalInfo {
            email: Some("jane.doe@example.co".to_string()),
            ..Default::default()
        };
        let email = redact_personal_info(&info).email.unwrap();
        let (local, domain) = email.split_once('@').unwrap();
        let (host, tld) = domain.rsplit_once('.').unwrap();
        assert_eq!(tld, "co");
        assert_eq!(local.len(), "jane.doe".len());
        assert_eq!(host.len(), "example".len());
        assert!(!email.contains("jane"));
        assert!(!email.contains("example"));
    }

    #[test]
    fn test_email_without_domain_gets_fallback_tld() {
        assert!(redact_email("jane").ends_with(".com"));
        assert!(redact_email("jane@localhost").ends_with(".com"));
    }

    #[test]
    fn test_name_and_location_redacted() {
        let info = PersonalInfo {
            full_name: Some("Jane Doe".to_string()),
            location: Some("Vancouver, BC".to_string()),
            ..Default::default()
        };
        let redacted = redact_personal_info(&info);
        let name = redacted.full_name.unwrap();
        let location = redacted.location.unwrap();
        assert_ne!(name, "Jane Doe");
        assert_eq!(skeleton(&name), "xxxx xxx");
        assert_eq!(skeleton(&location), "xxxxxxxxx, xx");
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let redacted = redact_personal_info(&PersonalInfo::default());
        assert_eq!(redacted, PersonalInfo::default());
    }
}
