//! Unique element ids for the `ids` option.
//!
//! Randomness sits behind [`IdGenerator`] so callers can swap in a seeded or
//! scripted source. The default, [`RandomIds`], draws from `rand`.
//!
//! ```rust
//! use json2xml::ids::{IdGenerator, RandomIds};
//!
//! let mut ids = RandomIds::seeded(7);
//! let id = ids.unique_id("person");
//! assert!(id.starts_with("person_"));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest generated id number.
pub const ID_MIN: u32 = 100_000;
/// Largest generated id number.
pub const ID_MAX: u32 = 999_999;

/// Source of id numbers.
pub trait IdGenerator {
    /// Returns a number in `start..=end`.
    fn next_in(&mut self, start: u32, end: u32) -> u32;

    /// Returns `"<element>_<n>"` with `n` in the default id range.
    fn unique_id(&mut self, element: &str) -> String {
        make_id(self, element, ID_MIN, ID_MAX)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_in(&mut self, start: u32, end: u32) -> u32 {
        (**self).next_in(start, end)
    }
}

/// Formats an id for `element`; a zero `start` or `end` uses the default bound.
pub fn make_id<G: IdGenerator + ?Sized>(ids: &mut G, element: &str, start: u32, end: u32) -> String {
    let start = if start == 0 { ID_MIN } else { start };
    let end = if end == 0 { ID_MAX } else { end };
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    format!("{}_{}", element, ids.next_in(low, high))
}

/// `rand`-backed id source.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    /// Seeds from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        RandomIds {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomIds {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_in(&mut self, start: u32, end: u32) -> u32 {
        self.rng.gen_range(start..=end)
    }
}

/// Convenience wrapper drawing one id from a fresh [`RandomIds`].
#[must_use]
pub fn get_unique_id(element: &str) -> String {
    RandomIds::new().unique_id(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl IdGenerator for Fixed {
        fn next_in(&mut self, start: u32, end: u32) -> u32 {
            self.0.clamp(start, end)
        }
    }

    fn number_of(id: &str) -> u32 {
        id.rsplit('_').next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_unique_id_format_and_range() {
        let mut ids = RandomIds::new();
        for _ in 0..200 {
            let id = ids.unique_id("li");
            assert!(id.starts_with("li_"));
            let n = number_of(&id);
            assert!((ID_MIN..=ID_MAX).contains(&n));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut first = RandomIds::seeded(42);
        let mut second = RandomIds::seeded(42);
        for _ in 0..5 {
            assert_eq!(first.unique_id("x"), second.unique_id("x"));
        }
    }

    #[test]
    fn test_make_id_zero_bounds_use_defaults() {
        let mut ids = Fixed(5);
        assert_eq!(make_id(&mut ids, "test_element", 0, 0), "test_element_100000");
        assert_eq!(make_id(&mut ids, "e", 1, 10), "e_5");
    }

    #[test]
    fn test_get_unique_id() {
        assert!(get_unique_id("element").starts_with("element_"));
    }
}
