//! Entry form controller for the document-registry page.
//!
//! The controller owns no page state of its own: every operation takes the
//! [`dom::Page`] and [`controls::ControlStore`] it acts on, runs to
//! completion, and reports an explicit outcome. Diagnostics follow a
//! log-and-continue policy throughout; nothing here is fatal.

pub mod dates;
pub mod nav;
pub mod projection;

mod entry;
mod form;
mod populate;
mod submit;
mod template;

pub use crate::entry::{
    EntryData, FEMALE_SYMBOL, ITEM_CLASS, LABEL_DOB, LABEL_DOCUMENT_NUMBER, LABEL_GENDER_SYMBOL,
    LABEL_HOLDING_PERSON_NAME, MALE_SYMBOL, PatchReport, delete_item, gender_symbol, insert_entry,
    patch_entry,
};
pub use crate::form::{
    ControlKind, RadioGroupIndex, control_id, control_kind, read_field, reset_form, seed_form,
};
pub use crate::populate::{
    DOC_DOB_CONTROL, DOC_NAME_CONTROL, DOC_NUMBER_CONTROL, PopulateReport, populate_form,
};
pub use crate::submit::{
    FIELD_DOB, FIELD_DOCUMENT_NUMBER, FIELD_GENDER, FIELD_HOLDING_PERSON_NAME, FormConfig,
    SubmitOutcome, count_items, handle_submit,
};
pub use crate::template::{EntryRender, EntryTemplate, ListItemTemplate};
