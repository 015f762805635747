//! Label/value projection of raw entry details for image-export rendering.

use crate::entry::MALE_SYMBOL;

/// The document types this registry renders. Closed set; raw tags are parsed
/// at the boundary so everything past it is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Aadhaar,
    Dl,
}

impl DocumentKind {
    pub fn parse(tag: &str) -> Option<DocumentKind> {
        match tag {
            "aadhaar" => Some(DocumentKind::Aadhaar),
            "dl" => Some(DocumentKind::Dl),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            DocumentKind::Aadhaar => "aadhaar",
            DocumentKind::Dl => "dl",
        }
    }
}

/// Raw detail values as read off a rendered entry. `gender` holds the
/// rendered symbol, not the submitted word.
#[derive(Clone, Debug, Default)]
pub struct RawDetails {
    pub number: String,
    pub name: String,
    pub gender: String,
    pub dob: String,
    pub address: String,
    pub expiry: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDetail {
    pub label: &'static str,
    pub value: String,
}

fn detail(label: &'static str, value: &str) -> ImageDetail {
    ImageDetail {
        label,
        value: value.to_string(),
    }
}

/// Re-derive the gender word from the rendered symbol: `♂` → `Male`, anything
/// else → `Female` (mirroring the symbol rendering, which maps every
/// non-`male` submission to `♀`).
fn gender_word(symbol: &str) -> &'static str {
    if symbol == MALE_SYMBOL { "Male" } else { "Female" }
}

/// The fixed, ordered detail list for one document kind.
pub fn image_details(kind: DocumentKind, details: &RawDetails) -> Vec<ImageDetail> {
    match kind {
        DocumentKind::Aadhaar => vec![
            detail("Number:", &details.number),
            detail("Name:", &details.name),
            detail("Gender:", gender_word(&details.gender)),
            detail("Date of Birth:", &details.dob),
            detail("Address:", &details.address),
        ],
        DocumentKind::Dl => vec![
            detail("Number:", &details.number),
            detail("Name:", &details.name),
            detail("Gender:", gender_word(&details.gender)),
            detail("Date of Birth:", &details.dob),
            detail("Date of Expiry:", &details.expiry),
        ],
    }
}

/// Boundary form taking a raw type tag. Unknown tags are rejected with a
/// diagnostic rather than projected into an undefined entry.
pub fn image_details_for_tag(tag: &str, details: &RawDetails) -> Option<Vec<ImageDetail>> {
    let Some(kind) = DocumentKind::parse(tag) else {
        log::warn!(target: "registry.projection", "unsupported document type tag {tag:?}");
        return None;
    };
    Some(image_details(kind, details))
}
