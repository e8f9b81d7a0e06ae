//! Encouragement phrases shown with quiz feedback.

use rand::Rng;
use rand::seq::IndexedRandom;

use topo_core::model::AnswerFeedback;

/// Which pool of phrases to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncouragementKind {
    /// The answer scored as correct (including near misses).
    Correct,
    /// The answer was wrong.
    Incorrect,
    /// No answer yet; the player is thinking.
    Thinking,
}

impl EncouragementKind {
    /// Maps a resolved answer to the pool used for its feedback text.
    #[must_use]
    pub fn for_feedback(feedback: AnswerFeedback) -> Self {
        if feedback.is_correct() {
            EncouragementKind::Correct
        } else {
            EncouragementKind::Incorrect
        }
    }
}

static CORRECT: &[&str] = &[
    "Geweldig gedaan!",
    "Wauw, dat is super goed!",
    "Ik ben zo trots op je!",
    "Dat heb je perfect gedaan!",
    "Je bent een echte topograaf!",
];

static INCORRECT: &[&str] = &[
    "Niet getreurd, probeer het nog een keer!",
    "Je kunt het! Ga door!",
    "Bijna goed! Probeer het nog eens!",
    "Niet opgeven! Je komt er wel!",
    "Laten we het nog een keer proberen!",
];

static THINKING: &[&str] = &[
    "Hmm, laten we even nadenken...",
    "Denk goed na over je antwoord...",
    "Je kunt het! Denk na over wat je weet...",
    "Neem je tijd om na te denken...",
    "Laat je hersenen werken...",
];

/// The full phrase pool for a kind.
#[must_use]
pub fn pool(kind: EncouragementKind) -> &'static [&'static str] {
    match kind {
        EncouragementKind::Correct => CORRECT,
        EncouragementKind::Incorrect => INCORRECT,
        EncouragementKind::Thinking => THINKING,
    }
}

/// Draws one phrase uniformly at random from the pool.
pub fn random_message<R: Rng + ?Sized>(kind: EncouragementKind, rng: &mut R) -> &'static str {
    pool(kind)
        .choose(rng)
        .copied()
        .unwrap_or("Goed bezig!")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn pools_are_never_empty() {
        for kind in [
            EncouragementKind::Correct,
            EncouragementKind::Incorrect,
            EncouragementKind::Thinking,
        ] {
            assert!(!pool(kind).is_empty());
        }
    }

    #[test]
    fn near_miss_draws_from_the_correct_pool() {
        assert_eq!(
            EncouragementKind::for_feedback(AnswerFeedback::NearMiss),
            EncouragementKind::Correct
        );
        assert_eq!(
            EncouragementKind::for_feedback(AnswerFeedback::Wrong),
            EncouragementKind::Incorrect
        );
    }

    #[test]
    fn picker_varies_over_the_pool() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            seen.insert(random_message(EncouragementKind::Correct, &mut rng));
        }
        assert!(seen.len() > 1);
        for message in &seen {
            assert!(pool(EncouragementKind::Correct).contains(message));
        }
    }
}
