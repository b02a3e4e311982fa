//! Small English helpers for player-facing messages

const NUMBER_WORDS: [&str; 12] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

/// English ordinal for a 1-based position: 1st, 2nd, 3rd, 4th, 11th, 22nd ...
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Spell out a count; words never exceed eleven letters so digits are a fallback
#[must_use]
pub fn number_word(n: usize) -> String {
    NUMBER_WORDS
        .get(n)
        .map_or_else(|| n.to_string(), |word| (*word).to_string())
}

/// Uppercase glyph for a letter byte
#[inline]
#[must_use]
pub fn glyph(letter: u8) -> char {
    char::from(letter.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 10, 11, 12, 13, 21, 22, 23, 101, 111]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            [
                "1st", "2nd", "3rd", "4th", "10th", "11th", "12th", "13th", "21st", "22nd", "23rd",
                "101st", "111th"
            ]
        );
    }

    #[test]
    fn number_words() {
        assert_eq!(number_word(0), "zero");
        assert_eq!(number_word(2), "two");
        assert_eq!(number_word(11), "eleven");
        assert_eq!(number_word(12), "12");
    }

    #[test]
    fn glyph_is_uppercase() {
        assert_eq!(glyph(b'q'), 'Q');
    }
}
