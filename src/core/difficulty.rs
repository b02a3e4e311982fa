//! Difficulty levels and the consistency rules they enforce
//!
//! Each level is a table of letter rules. A candidate is tested against the
//! clue of every previous guess; each previous guess reports at most its first
//! broken rule, scanning positions in order.

use super::{CluedLetter, Classification, Clue, Violation, Word};
use std::fmt;
use std::str::FromStr;

/// How much consistency with earlier clues a guess must keep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Anything in the dictionary goes
    #[default]
    Normal,
    /// Greens stay in place, yellows and greens must be reused
    Hard,
    /// Hard, plus known-wrong placements and known letter counts are enforced
    UltraHard,
}

/// Everything a rule needs to judge one position of a previous clue
struct LetterCheck<'a> {
    position: usize,
    clued: CluedLetter,
    /// Positions in the clue where this letter was marked correct or elsewhere
    clue_count: usize,
    /// Copies of this letter in the candidate
    guess_count: usize,
    candidate: &'a Word,
}

type Rule = fn(&LetterCheck<'_>) -> Option<Violation>;

const HARD_RULES: &[Rule] = &[greens_stay, marked_letters_reused];

const ULTRA_HARD_RULES: &[Rule] = &[
    greens_stay,
    marked_letters_reused,
    no_known_wrong_placement,
    exact_count_when_known,
];

fn greens_stay(check: &LetterCheck<'_>) -> Option<Violation> {
    let CluedLetter {
        letter,
        classification,
    } = check.clued;
    (classification == Classification::Correct
        && check.candidate.letter_at(check.position) != letter)
        .then_some(Violation::MustBe {
            position: check.position,
            letter,
        })
}

fn marked_letters_reused(check: &LetterCheck<'_>) -> Option<Violation> {
    (check.guess_count < check.clue_count).then_some(Violation::MustContainAtLeast {
        letter: check.clued.letter,
        count: check.clue_count,
    })
}

fn no_known_wrong_placement(check: &LetterCheck<'_>) -> Option<Violation> {
    let CluedLetter {
        letter,
        classification,
    } = check.clued;
    (classification != Classification::Correct
        && check.candidate.letter_at(check.position) == letter)
        .then_some(Violation::CantBe {
            position: check.position,
            letter,
        })
}

/// An absent copy means the target holds exactly `clue_count` of the letter
fn exact_count_when_known(check: &LetterCheck<'_>) -> Option<Violation> {
    let CluedLetter {
        letter,
        classification,
    } = check.clued;
    if classification != Classification::Absent || check.guess_count == check.clue_count {
        return None;
    }
    Some(if check.clue_count == 0 {
        Violation::CantContain { letter }
    } else {
        Violation::MustContainExactly {
            letter,
            count: check.clue_count,
        }
    })
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Hard, Self::UltraHard];

    /// Letter rules checked at every position of every previous clue, in order
    #[must_use]
    fn rules(self) -> &'static [Rule] {
        match self {
            Self::Normal => &[],
            Self::Hard => HARD_RULES,
            Self::UltraHard => ULTRA_HARD_RULES,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::UltraHard => "ultra-hard",
        }
    }

    /// The first rule `candidate` breaks against a single previous clue
    ///
    /// # Panics
    /// Panics if `candidate` and `clue` have different lengths.
    #[must_use]
    pub fn violation(self, clue: &Clue, candidate: &Word) -> Option<Violation> {
        let rules = self.rules();
        if rules.is_empty() {
            return None;
        }
        assert_eq!(
            clue.len(),
            candidate.len(),
            "candidate length must match the clue"
        );

        clue.iter().enumerate().find_map(|(position, &clued)| {
            let check = LetterCheck {
                position,
                clued,
                clue_count: clue.marked_count(clued.letter),
                guess_count: candidate.count_of(clued.letter),
                candidate,
            };
            rules.iter().find_map(|rule| rule(&check))
        })
    }

    /// Test `candidate` against already computed clues, one violation per clue at most
    pub fn check_clues<'a>(
        self,
        clues: impl IntoIterator<Item = &'a Clue>,
        candidate: &Word,
    ) -> Vec<Violation> {
        if self.rules().is_empty() {
            return Vec::new();
        }
        clues
            .into_iter()
            .filter_map(|clue| self.violation(clue, candidate))
            .collect()
    }
}

/// Test `candidate` against every previous guess, each re-clued against `target`
///
/// Returns an empty list when the guess is consistent.
///
/// # Examples
/// ```
/// use dawdle::core::{Difficulty, Word, check_violations};
///
/// let target = Word::new("dart").unwrap();
/// let history = [Word::new("dark").unwrap()];
///
/// let ok = check_violations(Difficulty::Hard, &history, &target, &Word::new("darn").unwrap());
/// assert!(ok.is_empty());
///
/// let bad = check_violations(Difficulty::Hard, &history, &target, &Word::new("barn").unwrap());
/// assert_eq!(bad[0].to_string(), "1st letter must be D");
/// ```
#[must_use]
pub fn check_violations(
    difficulty: Difficulty,
    history: &[Word],
    target: &Word,
    candidate: &Word,
) -> Vec<Violation> {
    if difficulty == Difficulty::Normal {
        return Vec::new();
    }
    history
        .iter()
        .filter_map(|guess| difficulty.violation(&Clue::evaluate(guess, target), candidate))
        .collect()
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" | "n" => Ok(Self::Normal),
            "hard" | "h" => Ok(Self::Hard),
            "ultra-hard" | "ultrahard" | "ultra" | "u" => Ok(Self::UltraHard),
            _ => Err(format!(
                "Unknown difficulty: {s} (expected normal, hard or ultra-hard)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn messages(difficulty: Difficulty, history: &[&str], target: &str, candidate: &str) -> Vec<String> {
        let history: Vec<Word> = history.iter().map(|g| w(g)).collect();
        check_violations(difficulty, &history, &w(target), &w(candidate))
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn normal_never_complains() {
        assert!(messages(Difficulty::Normal, &["wolf", "dorm"], "word", "cake").is_empty());
    }

    #[test]
    fn hard_accepts_consistent_guess() {
        assert!(messages(Difficulty::Hard, &["dark"], "dart", "darn").is_empty());
    }

    #[test]
    fn hard_repeating_a_guess_is_consistent() {
        for (guess, target) in [("dark", "dart"), ("abab", "aabb"), ("robot", "floor")] {
            assert!(messages(Difficulty::Hard, &[guess], target, guess).is_empty());
        }
    }

    #[test]
    fn hard_greens_must_stay() {
        assert_eq!(
            messages(Difficulty::Hard, &["dark"], "dart", "bark"),
            ["1st letter must be D"]
        );
    }

    #[test]
    fn hard_yellows_must_be_reused() {
        // ROBOT vs FLOOR: R yellow, O yellow, O green
        assert_eq!(
            messages(Difficulty::Hard, &["robot"], "floor", "gloom"),
            ["Guess must contain R"]
        );
        assert_eq!(
            messages(Difficulty::Hard, &["robot"], "floor", "tutor"),
            ["Guess must contain at least two Os"]
        );
    }

    #[test]
    fn only_first_violation_per_previous_guess() {
        // Both the W and the O are missing, only the W is reported
        assert_eq!(
            messages(Difficulty::Hard, &["wolf"], "word", "cake"),
            ["1st letter must be W"]
        );
    }

    #[test]
    fn each_previous_guess_reports_separately() {
        assert_eq!(
            messages(Difficulty::Hard, &["wolf", "dorm"], "word", "cold"),
            ["1st letter must be W", "3rd letter must be R"]
        );
    }

    #[test]
    fn ultra_hard_forbids_known_wrong_placement() {
        // DORW vs WORD: D and W elsewhere
        assert!(messages(Difficulty::Hard, &["dorw"], "word", "dorw").is_empty());
        assert_eq!(
            messages(Difficulty::UltraHard, &["dorw"], "word", "dorw"),
            ["1st letter can't be D"]
        );
    }

    #[test]
    fn ultra_hard_forbids_absent_letters() {
        assert!(messages(Difficulty::Hard, &["wolf"], "word", "wool").is_empty());
        assert_eq!(
            messages(Difficulty::UltraHard, &["wolf"], "word", "wool"),
            ["Guess can't contain L"]
        );
    }

    #[test]
    fn ultra_hard_enforces_exact_counts() {
        // OBOE vs WORD: first O elsewhere, second O absent, so exactly one O
        assert_eq!(
            messages(Difficulty::UltraHard, &["oboe"], "word", "solo"),
            ["Guess must contain exactly one O"]
        );
    }

    #[test]
    fn ultra_hard_counts_beyond_one() {
        // EERIE vs SLEEP: two Es elsewhere, the third E absent
        assert!(messages(Difficulty::UltraHard, &["eerie"], "sleep", "sleet").is_empty());
        assert_eq!(
            messages(Difficulty::UltraHard, &["eerie"], "sleep", "steee"),
            ["Guess must contain exactly two Es"]
        );
    }

    #[test]
    fn ultra_hard_rejects_a_repeat_guess() {
        assert_eq!(
            messages(Difficulty::UltraHard, &["wood"], "word", "wood"),
            ["3rd letter can't be O"]
        );
    }

    #[test]
    fn check_clues_matches_recomputed_history() {
        let target = w("word");
        let history = [w("wolf"), w("dorm")];
        let clues: Vec<Clue> = history.iter().map(|g| Clue::evaluate(g, &target)).collect();
        let candidate = w("cold");

        assert_eq!(
            Difficulty::Hard.check_clues(&clues, &candidate),
            check_violations(Difficulty::Hard, &history, &target, &candidate)
        );
    }

    #[test]
    fn difficulty_parse_and_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!("Ultra".parse::<Difficulty>(), Ok(Difficulty::UltraHard));
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
