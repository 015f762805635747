//! Edit-mode form population: push an existing entry's values back into the
//! form controls.

use crate::dates;
use crate::entry::EntryData;
use crate::form::{RadioGroupIndex, control_id};
use controls::ControlStore;
use dom::Node;
use dom::traverse::find_by_element_id;

pub const DOC_NUMBER_CONTROL: &str = "doc-number";
pub const DOC_NAME_CONTROL: &str = "doc-name";
pub const DOC_DOB_CONTROL: &str = "doc-dob";

/// Controls (by element id) that were configured but absent from the form.
/// Population is as tolerant as patching: misses are logged and reported,
/// never fatal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulateReport {
    pub missing_controls: Vec<String>,
}

/// Write `data` into the form controls for editing.
///
/// The DOB is converted back to the date-control form; the gender selection
/// targets `#gender_<value>` through the radio-group index so the rest of the
/// group unchecks. `additional` values are keyed by target control element
/// id.
pub fn populate_form(
    form: &Node,
    store: &mut ControlStore,
    index: &RadioGroupIndex,
    data: &EntryData,
    additional: &[(String, String)],
) -> PopulateReport {
    let mut report = PopulateReport::default();

    let set_text = |store: &mut ControlStore, report: &mut PopulateReport, elem_id: &str, value: &str| {
        match find_by_element_id(form, elem_id) {
            Some(node) => store.set(control_id(node), value.to_string()),
            None => miss(report, elem_id),
        }
    };

    set_text(store, &mut report, DOC_NUMBER_CONTROL, &data.document_number);
    set_text(store, &mut report, DOC_NAME_CONTROL, &data.holding_person_name);
    set_text(store, &mut report, DOC_DOB_CONTROL, &dates::format_input(&data.dob));

    let gender_control = format!("gender_{}", data.gender);
    match find_by_element_id(form, &gender_control) {
        Some(node) => {
            index.check(store, control_id(node));
        }
        None => miss(&mut report, &gender_control),
    }

    for (elem_id, value) in additional {
        set_text(store, &mut report, elem_id, value);
    }

    report
}

fn miss(report: &mut PopulateReport, elem_id: &str) {
    log::warn!(target: "registry.populate", "no control with id {elem_id:?} in the form");
    report.missing_controls.push(elem_id.to_string());
}
