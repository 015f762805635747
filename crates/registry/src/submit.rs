//! Submission handling: read the form, validate required fields, dispatch to
//! insert or patch, reset the form.

use crate::dates;
use crate::entry::{EntryData, ITEM_CLASS, PatchReport, insert_entry, patch_entry};
use crate::form::{read_field, reset_form};
use crate::projection::DocumentKind;
use crate::template::EntryTemplate;
use controls::ControlStore;
use dom::{Id, Page};

pub const FIELD_DOCUMENT_NUMBER: &str = "documentNumber";
pub const FIELD_HOLDING_PERSON_NAME: &str = "holdingPersonName";
pub const FIELD_DOB: &str = "DOB";
pub const FIELD_GENDER: &str = "gender";

/// Per-form configuration: which document kind it captures and which
/// type-specific fields exist beyond the universal four.
#[derive(Clone, Debug)]
pub struct FormConfig {
    pub kind: DocumentKind,
    pub additional_fields: Vec<String>,
}

impl FormConfig {
    pub fn new(kind: DocumentKind) -> Self {
        FormConfig {
            kind,
            additional_fields: Vec::new(),
        }
    }

    pub fn with_additional_fields<I, S>(kind: DocumentKind, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FormConfig {
            kind,
            additional_fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new entry was appended; carries the appended root ids.
    Inserted { nodes: Vec<Id> },
    /// The edit target was patched in place.
    Patched { report: PatchReport },
    /// A required field was empty; nothing was mutated and the form keeps its
    /// values. Carries the missing field names.
    Rejected { missing: Vec<&'static str> },
    /// The edit target or the container is no longer in the page; nothing was
    /// mutated apart from the form reset.
    TargetMissing,
}

/// Handle one submit occurrence.
///
/// The form is reset whenever the required fields were present, matching the
/// source behavior of resetting after both insert and update.
pub fn handle_submit(
    page: &mut Page,
    store: &mut ControlStore,
    form: Id,
    edit_target: Option<Id>,
    container: Id,
    template: &dyn EntryTemplate,
    config: &FormConfig,
) -> SubmitOutcome {
    let Some(form_node) = page.find(form) else {
        log::warn!(target: "registry.submit", "form {form:?} is not in the page");
        return SubmitOutcome::TargetMissing;
    };

    let document_number = read_trimmed(form_node, store, FIELD_DOCUMENT_NUMBER);
    let holding_person_name = read_trimmed(form_node, store, FIELD_HOLDING_PERSON_NAME);
    let dob = read_trimmed(form_node, store, FIELD_DOB);
    let gender = read_field(form_node, store, FIELD_GENDER).unwrap_or_default();
    let additional: Vec<(String, String)> = config
        .additional_fields
        .iter()
        .map(|field| (field.clone(), read_trimmed(form_node, store, field)))
        .collect();

    let missing: Vec<&'static str> = [
        (FIELD_DOCUMENT_NUMBER, document_number.is_empty()),
        (FIELD_HOLDING_PERSON_NAME, holding_person_name.is_empty()),
        (FIELD_DOB, dob.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, empty)| empty.then_some(name))
    .collect();
    if !missing.is_empty() {
        log::warn!(target: "registry.submit", "required fields missing: {missing:?}");
        return SubmitOutcome::Rejected { missing };
    }

    let data = EntryData {
        document_number,
        holding_person_name,
        dob: dates::format_display(&dob),
        gender,
        additional,
    };

    let outcome = match edit_target {
        Some(item) => match patch_entry(page, item, &data) {
            Some(report) => SubmitOutcome::Patched { report },
            None => SubmitOutcome::TargetMissing,
        },
        None => {
            let entry_count = count_items(page, container) + 1;
            match insert_entry(page, container, &data, template, config.kind, entry_count) {
                Ok(nodes) => SubmitOutcome::Inserted { nodes },
                Err(err) => {
                    log::warn!(target: "registry.submit", "insert into {container:?} failed: {err:?}");
                    SubmitOutcome::TargetMissing
                }
            }
        }
    };

    if let Some(form_node) = page.find(form) {
        reset_form(form_node, store);
    }
    outcome
}

fn read_trimmed(form: &dom::Node, store: &ControlStore, name: &str) -> String {
    read_field(form, store, name)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Current number of rendered entries under `container`, for display
/// ordinals.
pub fn count_items(page: &Page, container: Id) -> usize {
    let Some(node) = page.find(container) else {
        return 0;
    };
    let mut items = Vec::new();
    dom::traverse::collect_by_class(node, ITEM_CLASS, &mut items);
    items.len()
}
