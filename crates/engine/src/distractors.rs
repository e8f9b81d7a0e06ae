use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

use topo_core::model::{Catalog, LocationItem};

/// Wrong answers sampled per multiple-choice question unless configured
/// otherwise.
pub const DEFAULT_DISTRACTOR_COUNT: usize = 3;

/// Builds the option labels for a multiple-choice question.
///
/// Samples `distractors` names from the catalog without replacement,
/// excluding the target, then shuffles the target name in. When the catalog
/// is too small the sample shrinks to whatever is available, so small
/// catalogs degrade instead of failing.
///
/// Guarantees: the target name appears exactly once, all labels are unique
/// (names are de-duplicated before sampling), and the result holds
/// `min(distractors + 1, unique names)` labels with the correct one at a
/// random position.
pub fn generate_options<R: Rng + ?Sized>(
    target: &LocationItem,
    catalog: &Catalog,
    distractors: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let candidates: Vec<&str> = catalog
        .iter()
        .map(LocationItem::name)
        .filter(|name| *name != target.name() && seen.insert(*name))
        .collect();

    let take = distractors.min(candidates.len());
    let mut options: Vec<String> = candidates
        .choose_multiple(rng, take)
        .map(|name| (*name).to_owned())
        .collect();

    options.push(target.name().to_owned());
    options.shuffle(rng);
    options
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
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
    fn options_contain_target_exactly_once() {
        let catalog = build_catalog(&["Hamburg", "Bremen", "Hannover", "Berlijn", "Keulen"]);
        let target = catalog.get("Bremen").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let options = generate_options(target, &catalog, 3, &mut rng);
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| *o == "Bremen").count(), 1);

            let unique: HashSet<&String> = options.iter().collect();
            assert_eq!(unique.len(), options.len());
        }
    }

    #[test]
    fn small_catalog_shrinks_the_sample() {
        let catalog = build_catalog(&["Hamburg", "Bremen"]);
        let target = catalog.get("Hamburg").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let options = generate_options(target, &catalog, 3, &mut rng);
        assert_eq!(options.len(), 2);
        assert!(options.contains(&"Hamburg".to_owned()));
        assert!(options.contains(&"Bremen".to_owned()));
    }

    #[test]
    fn single_item_catalog_yields_only_the_target() {
        let catalog = build_catalog(&["Hamburg"]);
        let target = catalog.get("Hamburg").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let options = generate_options(target, &catalog, 3, &mut rng);
        assert_eq!(options, vec!["Hamburg".to_owned()]);
    }

    #[test]
    fn target_position_is_not_fixed() {
        let catalog = build_catalog(&["Hamburg", "Bremen", "Hannover", "Berlijn", "Keulen"]);
        let target = catalog.get("Keulen").unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let mut positions = HashSet::new();
        for _ in 0..80 {
            let options = generate_options(target, &catalog, 3, &mut rng);
            let index = options.iter().position(|o| o == "Keulen").unwrap();
            positions.insert(index);
        }

        assert_eq!(positions.len(), 4, "target never moved across all slots");
    }

    #[test]
    fn distractors_are_drawn_from_the_catalog() {
        let catalog = build_catalog(&["Hamburg", "Bremen", "Hannover", "Berlijn"]);
        let target = catalog.get("Hamburg").unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let options = generate_options(target, &catalog, 2, &mut rng);
        assert_eq!(options.len(), 3);
        for option in &options {
            assert!(catalog.contains(option));
        }
    }
}
