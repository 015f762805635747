//! The markup-generation collaborator seam.
//!
//! The visual template is owned outside this crate; the controller only
//! demands "give me a fragment for this entry". [`ListItemTemplate`] is the
//! plain list-item rendering the demo driver and tests run against.

use crate::entry::{
    EntryData, LABEL_DOB, LABEL_DOCUMENT_NUMBER, LABEL_GENDER_SYMBOL, LABEL_HOLDING_PERSON_NAME,
    gender_symbol,
};
use crate::projection::DocumentKind;
use std::fmt::Write;

/// Everything a template needs to render one entry.
pub struct EntryRender<'a> {
    /// 1-based display ordinal of the entry within its container.
    pub entry_count: usize,
    pub data: &'a EntryData,
    pub kind: DocumentKind,
}

pub trait EntryTemplate {
    /// Produce an HTML fragment for one entry. The fragment must carry the
    /// `item` marker class on its root and a `data-label` child per field,
    /// or later patches will skip the absent fields.
    fn entry_markup(&self, render: &EntryRender<'_>) -> String;
}

/// Minimal list-item template: one `<li class="item">` per entry with a
/// labeled span per field and a delete control.
pub struct ListItemTemplate;

impl EntryTemplate for ListItemTemplate {
    fn entry_markup(&self, render: &EntryRender<'_>) -> String {
        let data = render.data;
        let mut out = String::new();
        let _ = write!(
            &mut out,
            "<li class=\"item\" data-kind=\"{}\"><span class=\"entry-count\">{}.</span>",
            render.kind.tag(),
            render.entry_count,
        );
        for (label, value) in [
            (LABEL_DOCUMENT_NUMBER, data.document_number.as_str()),
            (LABEL_HOLDING_PERSON_NAME, data.holding_person_name.as_str()),
            (LABEL_DOB, data.dob.as_str()),
            (LABEL_GENDER_SYMBOL, gender_symbol(&data.gender)),
        ] {
            push_labeled_span(&mut out, label, value);
        }
        for (field, value) in &data.additional {
            push_labeled_span(&mut out, field, value);
        }
        out.push_str("<button class=\"delete\" type=\"button\">Delete</button></li>");
        out
    }
}

fn push_labeled_span(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        &mut *out,
        "<span data-label=\"{}\">{}</span>",
        escape_markup(label),
        escape_markup(value),
    );
}

/// Escape text interpolated into markup so field values survive the fragment
/// tokenizer intact.
fn escape_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
