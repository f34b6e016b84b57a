//! Butterfly species label table.
//!
//! Static index→name mapping for the 75 classes the pretrained model was
//! trained on. Table order is the model's class order; reordering it would
//! desynchronise predictions from labels.

/// Sentinel label for class indices outside the table.
pub const UNKNOWN_LABEL: &str = "Unknown";

const SPECIES: [&str; 75] = [
    "ADONIS",
    "AFRICAN GIANT SWALLOWTAIL",
    "AMERICAN SNOOT",
    "AN 88",
    "APPOLLO",
    "ATALA",
    "BANDED ORANGE HELICONIAN",
    "BANDED PEACOCK",
    "BECKERS WHITE",
    "BLACK HAIRSTREAK",
    "BLUE MORPHO",
    "BLUE SPOTTED CROW",
    "BROWN SIPROETA",
    "CABBAGE WHITE",
    "CAIRNS BIRDWING",
    "CHEQUERED SKIPPER",
    "CHESTNUT",
    "CLEOPATRA",
    "CLODIUS PARNASSIAN",
    "CLOUDED SULPHUR",
    "COMMON BANDED AWL",
    "COMMON WOOD-NYMPH",
    "COPPER TAIL",
    "CRESENT",
    "CRIMSON PATCH",
    "DANAID EGGFLY",
    "EASTERN COMA",
    "EASTERN DAPPLE WHITE",
    "EASTERN PINE ELFIN",
    "ELBOWED PIERROT",
    "GOLD BANDED",
    "GREAT EGGFLY",
    "GREAT JAY",
    "GREEN CELLED CATTLEHEART",
    "GREY HAIRSTREAK",
    "INDRA SWALLOW",
    "IPHICLUS SISTER",
    "JULIA",
    "LARGE MARBLE",
    "MALACHITE",
    "MANGROVE SKIPPER",
    "MESTRA",
    "METALMARK",
    "MILTERS TORTOISESHELL",
    "MONARCH",
    "MOURNING CLOAK",
    "ORANGE OAKLEAF",
    "ORANGE TIP",
    "ORCHARD SWALLOW",
    "PAINTED LADY",
    "PAPER KITE",
    "PEACOCK",
    "PINE WHITE",
    "PIPEVINE SWALLOW",
    "POPINJAY",
    "PURPLE HAIRSTREAK",
    "PURPLISH COPPER",
    "QUESTION MARK",
    "RED ADMIRAL",
    "RED CRACKER",
    "RED POSTMAN",
    "RED SPOTTED PURPLE",
    "SCARCE SWALLOW",
    "SILVER SPOT SKIPPER",
    "SLEEPY ORANGE",
    "SOOTYWING",
    "SOUTHERN DOGFACE",
    "STRAITED QUEEN",
    "TROPICAL LEAFWING",
    "TWO BARRED FLASHER",
    "ULYSES",
    "VICEROY",
    "WOOD SATYR",
    "YELLOW SWALLOW TAIL",
    "ZEBRA LONG WING",
];

/// Immutable index→species table.
///
/// Lookups outside the table resolve to [`UNKNOWN_LABEL`] instead of
/// failing, so a model/table mismatch degrades to a visible sentinel
/// rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesTable {
    names: &'static [&'static str],
}

impl SpeciesTable {
    /// The 75-class table matching the pretrained butterfly model.
    pub const fn builtin() -> Self {
        Self { names: &SPECIES }
    }

    /// A table over caller-provided names. Used by tests.
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// Species name for a class index, or [`UNKNOWN_LABEL`] if out of range.
    pub fn label(&self, index: usize) -> &'static str {
        self.names.get(index).copied().unwrap_or(UNKNOWN_LABEL)
    }

    /// Number of classes in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self::builtin()
    }
}
