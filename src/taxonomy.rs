use std::collections::{BTreeMap, HashSet};

use crate::models::{DetectedObject, DetectionSet};

/// Category names treated as noteheads and accidentals when filtering.
pub const NOTEHEAD_ACCIDENTAL_CATEGORIES: [&str; 14] = [
    "noteheadBlackInSpace",
    "noteheadBlackOnLine",
    "noteheadWhiteInSpace",
    "noteheadWhiteOnLine",
    "noteheadHalfInSpace",
    "noteheadHalfOnLine",
    "keyFlat",
    "keySharp",
    "keyNatural",
    "accidentalFlat",
    "accidentalSharp",
    "accidentalNatural",
    "accidentalDoubleSharp",
    "accidentalDoubleFlat",
];

/// A fixed set of category names. Membership is exact, case-sensitive
/// string equality; there is no fuzzy or prefix matching.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    names: HashSet<String>,
}

impl Taxonomy {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The canonical notehead-and-accidental taxonomy.
    pub fn noteheads_and_accidentals() -> Self {
        Self::new(NOTEHEAD_ACCIDENTAL_CATEGORIES)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.names.contains(category)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Keep the detections whose category is a member of `taxonomy`,
/// preserving relative order. Unknown categories are dropped silently;
/// filtering is a membership test, not a validation pass.
pub fn filter_by_taxonomy(detections: &[DetectedObject], taxonomy: &Taxonomy) -> DetectionSet {
    detections
        .iter()
        .filter(|d| taxonomy.contains(d.category()))
        .cloned()
        .collect()
}

/// Per-category frequency counts. A BTreeMap keeps report output in
/// lexicographic category order, so repeated runs print identically.
pub fn summarize(detections: &[DetectedObject]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for det in detections {
        *counts.entry(det.category().to_string()).or_insert(0) += 1;
    }
    counts
}
