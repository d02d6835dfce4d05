//! Chaldean letter-to-number cipher.
//!
//! Values run 1..=8; 9 is never assigned to a letter. The three Scandinavian
//! letters follow their Latin counterparts (Å as A, Ø as O, Æ as A + E).

/// Letters grouped by their value.
pub const CHALDEAN_GROUPS: [(u32, &str); 8] = [
    (1, "AIJQYÅ"),
    (2, "BKR"),
    (3, "CGLS"),
    (4, "DMT"),
    (5, "EHNX"),
    (6, "UVWÆ"),
    (7, "OZØ"),
    (8, "FP"),
];

/// Value of one character; 0 for anything outside the cipher.
pub fn letter_value(c: char) -> u32 {
    let upper = match c {
        'å' => 'Å',
        'æ' => 'Æ',
        'ø' => 'Ø',
        _ => c.to_ascii_uppercase(),
    };
    CHALDEAN_GROUPS
        .iter()
        .find(|(_, letters)| letters.contains(upper))
        .map(|&(value, _)| value)
        .unwrap_or(0)
}

/// Sum of letter values of a word, saturating at `u32::MAX`.
pub fn word_value(word: &str) -> u32 {
    word.chars()
        .map(letter_value)
        .fold(0, |acc: u32, v| acc.saturating_add(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ascii_letter_mapped() {
        for c in 'A'..='Z' {
            let v = letter_value(c);
            assert!((1..=8).contains(&v), "{c} -> {v}");
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(letter_value('m'), letter_value('M'));
        assert_eq!(letter_value('ø'), 7);
        assert_eq!(letter_value('Æ'), 6);
        assert_eq!(letter_value('å'), 1);
    }

    #[test]
    fn unmapped_is_zero() {
        assert_eq!(letter_value('é'), 0);
        assert_eq!(letter_value('3'), 0);
    }

    #[test]
    fn known_words() {
        assert_eq!(word_value("JOHN"), 18);
        assert_eq!(word_value("Michael"), 22);
        assert_eq!(word_value("smith"), 17);
    }
}
