//! Memory rhymes ("ezelsbruggetjes") tied to location names.

use serde::Serialize;

//
// ─── MNEMONIC ──────────────────────────────────────────────────────────────────
//

/// What a rhyme helps memorize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MnemonicKind {
    City,
    River,
    Region,
    Sea,
    /// Spans multiple kinds of locations at once.
    Combination,
}

/// A memory rhyme and the locations it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mnemonic {
    pub locations: &'static [&'static str],
    pub phrase: &'static str,
    pub kind: MnemonicKind,
    pub explanation: Option<&'static str>,
}

static MNEMONICS: &[Mnemonic] = &[
    Mnemonic {
        locations: &["Hamburg", "Bremen", "Hannover"],
        phrase: "Hamburgers Bremen Hun auto in Hannover",
        kind: MnemonicKind::City,
        explanation: Some("Deze steden liggen van noord naar zuid in deze volgorde"),
    },
    Mnemonic {
        locations: &["Berlijn"],
        phrase: "De Beer Lijnt in Berlijn",
        kind: MnemonicKind::City,
        explanation: Some("De beer is het symbool van Berlijn"),
    },
    Mnemonic {
        locations: &["München", "Stuttgart"],
        phrase: "Mün(t)chen Stutt(ert) van de Duitse auto's",
        kind: MnemonicKind::City,
        explanation: Some("Beide steden zijn bekend om hun auto-industrie (BMW en Mercedes)"),
    },
    Mnemonic {
        locations: &["Rijn", "Keulen", "Bonn"],
        phrase: "De Rijn stroomt door Keulen, waar ze Bonnen maken",
        kind: MnemonicKind::Combination,
        explanation: Some("De Rijn stroomt langs beide steden"),
    },
    Mnemonic {
        locations: &["Frankfurt"],
        phrase: "Frank zoekt zijn fort aan de Main",
        kind: MnemonicKind::City,
        explanation: Some("Frankfurt ligt aan de rivier de Main"),
    },
    Mnemonic {
        locations: &["Ruhrgebied", "Essen", "Dortmund"],
        phrase: "In het Ruhrgebied kun je lekker Essen en Dort(mund)drinken",
        kind: MnemonicKind::Combination,
        explanation: Some("Essen en Dortmund zijn belangrijke steden in het Ruhrgebied"),
    },
    Mnemonic {
        locations: &["Zwarte Woud"],
        phrase: "In het Zwarte Woud is het zo donker dat je de bomen niet ziet",
        kind: MnemonicKind::Region,
        explanation: Some("Het Zwarte Woud is een dichtbebost gebied"),
    },
    Mnemonic {
        locations: &["Noordzee", "Oostzee"],
        phrase: "In het Noorden en Oosten ligt de zee te wachten",
        kind: MnemonicKind::Sea,
        explanation: Some("De Noordzee ligt in het noorden, de Oostzee in het oosten"),
    },
    Mnemonic {
        locations: &["Elbe", "Dresden"],
        phrase: "De Elbe Draait en Dendert door Dresden",
        kind: MnemonicKind::Combination,
        explanation: Some("De Elbe stroomt door Dresden"),
    },
];

/// All rhymes, in display order.
#[must_use]
pub fn all() -> &'static [Mnemonic] {
    MNEMONICS
}

/// Rhymes that cover the given location name (exact match).
pub fn for_location(name: &str) -> impl Iterator<Item = &'static Mnemonic> {
    MNEMONICS
        .iter()
        .filter(move |mnemonic| mnemonic.locations.contains(&name))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
