//! Free-text category label normalization.
//!
//! The analyzer pipeline emits free-text category labels ("utility bill",
//! "e-statement", "contract renewal"). [`normalize_label`] maps any such
//! label onto the fixed taxonomy via ordered substring matching.

use crate::model::Category;

/// Ordered keyword groups; the first group with a hit decides the tag.
///
/// Order is significant and part of the contract: a label containing
/// keywords from several groups resolves to the earliest group. In
/// particular "renewal" is tested before "insurance", so an insurance
/// renewal notice resolves to [`Category::Employment`].
const KEYWORD_GROUPS: &[(&[&str], Category)] = &[
    (&["bill", "statement"], Category::Bills),
    (&["finance", "bank"], Category::Finance),
    (&["renewal", "contract"], Category::Employment),
    (&["license", "government"], Category::Government),
    (&["education", "school"], Category::Education),
    (&["health"], Category::Healthcare),
    (&["insurance"], Category::Insurance),
];

/// Normalizes a raw label into a category tag.
///
/// Total over its input: an absent, empty, or unmatched label falls back
/// to [`Category::Misc`]. Matching is case-insensitive.
#[must_use]
pub fn normalize_label(raw: Option<&str>) -> Category {
    let Some(raw) = raw else {
        return Category::Misc;
    };
    let key = raw.to_lowercase();

    for (keywords, category) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| key.contains(keyword)) {
            return *category;
        }
    }

    Category::Misc
}
