//! Rendered-entry operations: insert, patch, delete.

use crate::projection::DocumentKind;
use crate::template::{EntryRender, EntryTemplate};
use dom::traverse::{ancestor_with_class, find_by_label};
use dom::{Id, Page, PageError};

/// Class token marking one removable entry subtree.
pub const ITEM_CLASS: &str = "item";

/// `data-label` values for the four universal fields.
pub const LABEL_DOCUMENT_NUMBER: &str = "documentNumber";
pub const LABEL_HOLDING_PERSON_NAME: &str = "holdingPersonName";
pub const LABEL_DOB: &str = "DOB";
pub const LABEL_GENDER_SYMBOL: &str = "genderSymbol";

pub const MALE_SYMBOL: &str = "\u{2642}";
pub const FEMALE_SYMBOL: &str = "\u{2640}";

/// One document-holder record as captured from the form.
///
/// `dob` is always in display form (`day/month/year`) here; the input-control
/// form exists only inside date controls. `additional` keeps the configured
/// field order so rendering and patching walk it deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryData {
    pub document_number: String,
    pub holding_person_name: String,
    pub dob: String,
    pub gender: String,
    pub additional: Vec<(String, String)>,
}

impl EntryData {
    pub fn additional_value(&self, field: &str) -> Option<&str> {
        self.additional
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }
}

/// `male` renders `♂`; every other submitted value renders `♀`.
pub fn gender_symbol(gender: &str) -> &'static str {
    if gender == "male" {
        MALE_SYMBOL
    } else {
        FEMALE_SYMBOL
    }
}

/// Labels that were configured but had no labeled child in the entry subtree.
/// Tolerated, but reported so callers can see partial patches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub missing_labels: Vec<String>,
}

/// Render `data` through the template and append it to `container`.
///
/// `entry_count` is the display ordinal handed to the template. No uniqueness
/// check is made against existing entries; duplicate document numbers are
/// allowed.
pub fn insert_entry(
    page: &mut Page,
    container: Id,
    data: &EntryData,
    template: &dyn EntryTemplate,
    kind: DocumentKind,
    entry_count: usize,
) -> Result<Vec<Id>, PageError> {
    let markup = template.entry_markup(&EntryRender {
        entry_count,
        data,
        kind,
    });
    page.append_fragment(container, &markup)
}

/// Overwrite the labeled children of an existing rendered entry in place.
///
/// Missing labeled children are skipped with a diagnostic and reported;
/// `None` means the entry itself is no longer in the page and nothing was
/// touched.
pub fn patch_entry(page: &mut Page, item: Id, data: &EntryData) -> Option<PatchReport> {
    if page.find(item).is_none() {
        log::warn!(target: "registry.patch", "entry {item:?} is not in the page");
        return None;
    }

    let symbol = gender_symbol(&data.gender);
    let mut fields: Vec<(&str, &str)> = vec![
        (LABEL_DOCUMENT_NUMBER, data.document_number.as_str()),
        (LABEL_HOLDING_PERSON_NAME, data.holding_person_name.as_str()),
        (LABEL_DOB, data.dob.as_str()),
        (LABEL_GENDER_SYMBOL, symbol),
    ];
    for (field, value) in &data.additional {
        fields.push((field.as_str(), value.as_str()));
    }

    // Resolve every target first: the lookups borrow the subtree, the writes
    // borrow the page mutably.
    let targets: Vec<(String, Option<Id>)> = {
        let entry = page.find(item)?;
        fields
            .iter()
            .map(|(label, _)| ((*label).to_string(), find_by_label(entry, label).map(|n| n.id())))
            .collect()
    };

    let mut report = PatchReport::default();
    for ((label, target), (_, value)) in targets.into_iter().zip(fields) {
        let Some(target) = target else {
            log::warn!(target: "registry.patch", "no child with data-label {label:?} in entry {item:?}");
            report.missing_labels.push(label);
            continue;
        };
        if let Err(err) = page.set_text_content(target, value) {
            // The target was found a moment ago inside this entry; only a
            // non-element node (label on a text node is impossible) gets here.
            log::warn!(target: "registry.patch", "could not write {label:?}: {err:?}");
            report.missing_labels.push(label);
        }
    }
    Some(report)
}

/// Remove the entry enclosing `target` (the activation point of a delete
/// control). Returns the removed entry's id, or `None` when `target` is not
/// inside any `item` subtree.
pub fn delete_item(page: &mut Page, target: Id) -> Option<Id> {
    let Some(item) = ancestor_with_class(page.root(), target, ITEM_CLASS) else {
        log::warn!(target: "registry.delete", "activation target {target:?} is not inside an item");
        return None;
    };
    match page.remove_subtree(item) {
        Ok(()) => Some(item),
        Err(err) => {
            debug_assert!(false, "resolved ancestor must be removable: {err:?}");
            None
        }
    }
}
