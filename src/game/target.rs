//! Seeded target selection
//!
//! Targets come from an explicitly owned generator so a seed and game number
//! always reproduce the same word. The generator is mulberry32, the one the
//! browser game uses, so seeds carry over. The daily game uses the date's
//! digits (YYYYMMDD) as its seed.

use crate::core::Word;
use chrono::{Datelike, Local, NaiveDate};
use rand::RngCore;
use rand::rand_core::impls;

/// Added to user seeds before seeding the generator
pub const SEED_OFFSET: u32 = 123_456;

/// The seed of the daily game for `date`
#[must_use]
pub fn seed_for_date(date: NaiveDate) -> u32 {
    date.year().unsigned_abs() * 10_000 + date.month() * 100 + date.day()
}

/// The seed of today's game, by the local calendar
#[must_use]
pub fn today_seed() -> u32 {
    seed_for_date(Local::now().date_naive())
}

/// Date-like seeds (years 2000 to 2100) read as dates, others as numbers
#[must_use]
pub fn describe_seed(seed: u32) -> String {
    let year = seed / 10_000;
    let date = i32::try_from(year)
        .ok()
        .filter(|_| (2000..=2100).contains(&year))
        .and_then(|year| NaiveDate::from_ymd_opt(year, seed / 100 % 100, seed % 100));
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => format!("seed {seed}"),
    }
}

/// The mulberry32 generator: 32 bits of state, 32 bits per step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub const fn new(state: u32) -> Self {
        Self { state }
    }

    /// Uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

/// Picks targets, reproducibly when seeded
#[derive(Debug, Clone)]
pub struct TargetPicker {
    seed: Option<u32>,
    rng: Mulberry32,
}

impl TargetPicker {
    /// A picker for `seed`, or a randomly seeded one
    #[must_use]
    pub fn new(seed: Option<u32>) -> Self {
        Self {
            seed,
            rng: Self::fresh_rng(seed),
        }
    }

    fn fresh_rng(seed: Option<u32>) -> Mulberry32 {
        Mulberry32::new(seed.map_or_else(rand::random, |s| s.wrapping_add(SEED_OFFSET)))
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Restart the sequence; unseeded pickers get a new random state
    pub fn reset(&mut self) {
        self.rng = Self::fresh_rng(self.seed);
    }

    /// Next target from `targets`, `None` if the list is empty
    pub fn pick<'a>(&mut self, targets: &'a [Word]) -> Option<&'a Word> {
        if targets.is_empty() {
            return None;
        }
        let index = (targets.len() as f64 * self.rng.next_f64()) as usize;
        targets.get(index.min(targets.len() - 1))
    }

    /// The target of game `game_number` (1-based) from a reset sequence
    pub fn pick_for_game<'a>(&mut self, targets: &'a [Word], game_number: u32) -> Option<&'a Word> {
        self.reset();
        for _ in 1..game_number {
            self.pick(targets);
        }
        self.pick(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn mulberry32_known_sequence() {
        // Reference values from the JavaScript implementation with seed 1
        let mut rng = Mulberry32::new(1);
        assert_eq!(rng.next_u32(), 2_693_262_067);
        assert_eq!(rng.next_u32(), 11_749_833);
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn seeded_picks_reproduce() {
        let targets = words_from_slice(&["word", "wolf", "dart", "dark", "barn", "yarn"]);

        let mut a = TargetPicker::new(Some(20_240_101));
        let mut b = TargetPicker::new(Some(20_240_101));
        for game in 1..=5 {
            assert_eq!(
                a.pick_for_game(&targets, game),
                b.pick_for_game(&targets, game)
            );
        }
    }

    #[test]
    fn pick_for_game_skips_earlier_games() {
        let targets = words_from_slice(&["word", "wolf", "dart", "dark", "barn", "yarn"]);
        let mut picker = TargetPicker::new(Some(7));

        let first = picker.pick(&targets).cloned();
        let second = picker.pick(&targets).cloned();
        let third = picker.pick(&targets).cloned();

        assert_eq!(picker.pick_for_game(&targets, 1).cloned(), first);
        assert_eq!(picker.pick_for_game(&targets, 2).cloned(), second);
        assert_eq!(picker.pick_for_game(&targets, 3).cloned(), third);
    }

    #[test]
    fn daily_seeds_are_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(seed_for_date(date), 20_240_305);
        assert_eq!(describe_seed(20_240_305), "Mar 5, 2024");
        assert_eq!(describe_seed(20_240_229), "Feb 29, 2024");
        assert_eq!(describe_seed(20_230_229), "seed 20230229");
        assert_eq!(describe_seed(99), "seed 99");
        assert!(!describe_seed(today_seed()).starts_with("seed"));
    }

    #[test]
    fn pick_from_empty_list() {
        let mut picker = TargetPicker::new(None);
        assert!(picker.pick(&[]).is_none());
        assert_eq!(picker.seed(), None);
    }
}
