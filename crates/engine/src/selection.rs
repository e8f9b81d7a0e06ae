use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

use topo_core::model::{Catalog, LocationItem, PresentationMode};

/// Chooses the next question: which item to ask and how to present it.
///
/// Both choices take the random source as a parameter so callers can supply
/// a seeded generator in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionPolicy {
    mode_override: Option<PresentationMode>,
}

impl SelectionPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode_override: None,
        }
    }

    /// Force every question into a single presentation mode.
    #[must_use]
    pub fn with_mode_override(mut self, mode: PresentationMode) -> Self {
        self.mode_override = Some(mode);
        self
    }

    #[must_use]
    pub fn mode_override(&self) -> Option<PresentationMode> {
        self.mode_override
    }

    /// Draws the next unanswered item uniformly at random.
    ///
    /// Every item in `catalog` whose name is not in `answered` has equal
    /// probability of selection. Returns `None` once the pool is exhausted.
    pub fn select_next<'a, R: Rng + ?Sized>(
        &self,
        catalog: &'a Catalog,
        answered: &HashSet<String>,
        rng: &mut R,
    ) -> Option<&'a LocationItem> {
        let remaining: Vec<&LocationItem> = catalog
            .iter()
            .filter(|item| !answered.contains(item.name()))
            .collect();

        remaining.choose(rng).copied()
    }

    /// Chooses the presentation mode for one question.
    ///
    /// An unweighted coin flip unless overridden; independent of the item
    /// choice and independent across calls.
    pub fn choose_mode<R: Rng + ?Sized>(&self, rng: &mut R) -> PresentationMode {
        if let Some(mode) = self.mode_override {
            return mode;
        }

        if rng.random_bool(0.5) {
            PresentationMode::MultipleChoice
        } else {
            PresentationMode::Typed
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;
    use topo_core::model::Category;

    fn build_catalog(names: &[&str]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|name| LocationItem::new(*name, Category::City).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn select_skips_answered_items() {
        let catalog = build_catalog(&["Hamburg", "Bremen", "Hannover"]);
        let answered: HashSet<String> = ["Hamburg", "Hannover"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        let mut rng = StdRng::seed_from_u64(1);

        let policy = SelectionPolicy::new();
        for _ in 0..20 {
            let item = policy.select_next(&catalog, &answered, &mut rng).unwrap();
            assert_eq!(item.name(), "Bremen");
        }
    }

    #[test]
    fn select_returns_none_when_exhausted() {
        let catalog = build_catalog(&["Hamburg"]);
        let answered: HashSet<String> = ["Hamburg"].iter().map(|s| (*s).to_owned()).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let policy = SelectionPolicy::new();
        assert!(policy.select_next(&catalog, &answered, &mut rng).is_none());
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let catalog = build_catalog(&["Hamburg", "Bremen", "Hannover", "Berlijn"]);
        let answered = HashSet::new();
        let mut rng = StdRng::seed_from_u64(7);
        let policy = SelectionPolicy::new();

        let mut counts: HashMap<String, usize> = HashMap::new();
        let draws = 4000;
        for _ in 0..draws {
            let item = policy.select_next(&catalog, &answered, &mut rng).unwrap();
            *counts.entry(item.name().to_owned()).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (name, count) in &counts {
            assert!(
                (880..=1120).contains(count),
                "{name} drawn {count} times out of {draws}"
            );
        }
    }

    #[test]
    fn mode_override_wins_every_flip() {
        let policy = SelectionPolicy::new().with_mode_override(PresentationMode::Typed);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(policy.choose_mode(&mut rng), PresentationMode::Typed);
        }
    }

    #[test]
    fn coin_flip_produces_both_modes() {
        let policy = SelectionPolicy::new();
        let mut rng = StdRng::seed_from_u64(11);

        let mut multiple_choice = 0_usize;
        let flips = 200;
        for _ in 0..flips {
            if policy.choose_mode(&mut rng) == PresentationMode::MultipleChoice {
                multiple_choice += 1;
            }
        }

        assert!(
            (60..=140).contains(&multiple_choice),
            "{multiple_choice} multiple-choice flips out of {flips}"
        );
    }
}
