//! Form-control plumbing: seeding the control store from a form subtree,
//! radio-group exclusivity, field reads by control name, and reset.

use controls::{ControlId, ControlStore};
use dom::Node;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Checkbox,
    Radio,
    Other,
}

/// Classify an element as a form control.
///
/// A missing `type` defaults to text; `date` controls hold plain text values
/// here (the `year-month-day` string), so they classify as text too.
pub fn control_kind(node: &Node) -> ControlKind {
    if node.element_name() != Some("input") {
        return ControlKind::Other;
    }
    match node.attr("type").map(str::trim) {
        None | Some("") => ControlKind::Text,
        Some(t) if t.eq_ignore_ascii_case("text") => ControlKind::Text,
        Some(t) if t.eq_ignore_ascii_case("date") => ControlKind::Text,
        Some(t) if t.eq_ignore_ascii_case("checkbox") => ControlKind::Checkbox,
        Some(t) if t.eq_ignore_ascii_case("radio") => ControlKind::Radio,
        _ => ControlKind::Other,
    }
}

pub fn control_id(node: &Node) -> ControlId {
    ControlId::from_raw(node.id().0)
}

/// Radio exclusivity within named groups of one form.
///
/// Groups are keyed by the `name` attribute; the seeding walk covers a single
/// form subtree, so the form-owner scoping comes for free.
#[derive(Clone, Debug, Default)]
pub struct RadioGroupIndex {
    group_by_radio: HashMap<ControlId, usize>,
    groups: Vec<Vec<ControlId>>,
}

impl RadioGroupIndex {
    fn ensure_group(&mut self, group_by_name: &mut HashMap<String, usize>, name: &str) -> usize {
        if let Some(group) = group_by_name.get(name) {
            return *group;
        }
        let group = self.groups.len();
        self.groups.push(Vec::new());
        group_by_name.insert(name.to_string(), group);
        group
    }

    fn add_member(&mut self, group: usize, radio: ControlId) {
        let prev = self.group_by_radio.insert(radio, group);
        if prev.is_none()
            && let Some(members) = self.groups.get_mut(group)
        {
            members.push(radio);
        }
    }

    /// Check `radio`, unchecking the rest of its group. Returns `true` if any
    /// checked state changed. A radio outside every group just gets checked.
    pub fn check(&self, store: &mut ControlStore, radio: ControlId) -> bool {
        let Some(group) = self.group_by_radio.get(&radio).copied() else {
            return store.set_checked(radio, true);
        };
        let Some(members) = self.groups.get(group) else {
            return store.set_checked(radio, true);
        };
        let mut changed = false;
        for &member in members {
            changed |= store.set_checked(member, member == radio);
        }
        changed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GroupSelection {
    /// Live store state; survives markup defaults.
    Locked(ControlId),
    /// Selected by a `checked` attribute this walk; a later one wins.
    Seeded(ControlId),
}

/// Walk `form` and seed the store with each control's default state.
///
/// Live store entries win over markup defaults, so re-seeding after a page
/// rebuild keeps what the user had. Within a radio group, the last
/// markup-checked radio wins unless live state already locked a selection.
pub fn seed_form(form: &Node, store: &mut ControlStore) -> RadioGroupIndex {
    let mut index = RadioGroupIndex::default();
    let mut group_by_name: HashMap<String, usize> = HashMap::new();
    let mut selections: HashMap<usize, GroupSelection> = HashMap::new();

    for_each_control(form, &mut |node| {
        let id = control_id(node);
        match control_kind(node) {
            ControlKind::Text => {
                store.ensure_initial(id, node.attr("value").unwrap_or_default().to_string());
            }
            ControlKind::Checkbox => {
                store.ensure_initial_checked(id, node.has_attr("checked"));
            }
            ControlKind::Radio => {
                seed_radio(node, id, store, &mut index, &mut group_by_name, &mut selections);
            }
            ControlKind::Other => {}
        }
    });

    index
}

fn seed_radio(
    node: &Node,
    id: ControlId,
    store: &mut ControlStore,
    index: &mut RadioGroupIndex,
    group_by_name: &mut HashMap<String, usize>,
    selections: &mut HashMap<usize, GroupSelection>,
) {
    let group = node
        .attr("name")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            let group = index.ensure_group(group_by_name, name);
            index.add_member(group, id);
            group
        });

    let already_live = store.has(id);
    if already_live {
        let Some(group) = group else {
            return;
        };
        if store.is_checked(id) {
            match selections.get(&group).copied() {
                Some(GroupSelection::Seeded(prev)) => {
                    // Live state wins over markup default selection.
                    store.set_checked(prev, false);
                    selections.insert(group, GroupSelection::Locked(id));
                }
                Some(GroupSelection::Locked(prev)) => {
                    // Keep the first live selection to maintain exclusivity.
                    if prev != id {
                        store.set_checked(id, false);
                    }
                }
                None => {
                    selections.insert(group, GroupSelection::Locked(id));
                }
            }
        }
        return;
    }

    let wants_checked = node.has_attr("checked");
    store.ensure_initial_checked(id, wants_checked);
    let Some(group) = group else {
        return;
    };
    match selections.get(&group).copied() {
        Some(GroupSelection::Locked(_)) => {
            store.set_checked(id, false);
        }
        Some(GroupSelection::Seeded(prev)) => {
            if wants_checked {
                store.set_checked(prev, false);
                selections.insert(group, GroupSelection::Seeded(id));
            }
        }
        None => {
            if wants_checked {
                selections.insert(group, GroupSelection::Seeded(id));
            }
        }
    }
}

/// Read the submitted value of the first control named `name`.
///
/// Text controls report their live store value; radio groups report the
/// checked member's `value` attribute. Absent or unchecked fields read as
/// `None`.
pub fn read_field(form: &Node, store: &ControlStore, name: &str) -> Option<String> {
    let mut found: Option<String> = None;
    for_each_control(form, &mut |node| {
        if found.is_some() || node.attr("name") != Some(name) {
            return;
        }
        let id = control_id(node);
        match control_kind(node) {
            ControlKind::Text => {
                found = Some(
                    store
                        .get(id)
                        .unwrap_or_else(|| node.attr("value").unwrap_or_default())
                        .to_string(),
                );
            }
            ControlKind::Radio | ControlKind::Checkbox => {
                if store.is_checked(id) {
                    found = Some(node.attr("value").unwrap_or_default().to_string());
                }
            }
            ControlKind::Other => {}
        }
    });
    found
}

/// Restore every control in the form subtree to its seeded default.
pub fn reset_form(form: &Node, store: &mut ControlStore) {
    for_each_control(form, &mut |node| {
        if control_kind(node) != ControlKind::Other {
            store.reset(control_id(node));
        }
    });
}

fn for_each_control(node: &Node, visit: &mut impl FnMut(&Node)) {
    if let Node::Element { .. } = node {
        visit(node);
    }
    let Some(children) = node.children() else {
        return;
    };
    for child in children {
        for_each_control(child, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Page;
    use dom::traverse::find_by_element_id;

    const FORM: &str = concat!(
        "<form id=\"entry-form\">",
        "<input id=\"doc-number\" name=\"documentNumber\" type=\"text\" value=\"\">",
        "<input id=\"doc-dob\" name=\"DOB\" type=\"date\">",
        "<input id=\"gender_male\" name=\"gender\" type=\"radio\" value=\"male\" checked>",
        "<input id=\"gender_female\" name=\"gender\" type=\"radio\" value=\"female\">",
        "</form>",
    );

    fn seeded() -> (Page, ControlStore, RadioGroupIndex, dom::Id) {
        let page = Page::from_html(FORM);
        let form = find_by_element_id(page.root(), "entry-form").unwrap().id();
        let mut store = ControlStore::new();
        let index = seed_form(page.find(form).unwrap(), &mut store);
        (page, store, index, form)
    }

    fn ctrl(page: &Page, elem_id: &str) -> ControlId {
        control_id(find_by_element_id(page.root(), elem_id).unwrap())
    }

    #[test]
    fn seeds_text_defaults_and_radio_selection() {
        let (page, store, _, _) = seeded();
        assert_eq!(store.get(ctrl(&page, "doc-number")), Some(""));
        assert!(store.is_checked(ctrl(&page, "gender_male")));
        assert!(!store.is_checked(ctrl(&page, "gender_female")));
    }

    #[test]
    fn last_markup_checked_radio_wins_within_a_group() {
        let page = Page::from_html(
            "<form id=\"f\">\
             <input id=\"a\" name=\"g\" type=\"radio\" checked>\
             <input id=\"b\" name=\"g\" type=\"radio\" checked>\
             </form>",
        );
        let form = find_by_element_id(page.root(), "f").unwrap();
        let mut store = ControlStore::new();
        seed_form(form, &mut store);

        assert!(!store.is_checked(ctrl(&page, "a")));
        assert!(store.is_checked(ctrl(&page, "b")));
    }

    #[test]
    fn live_selection_survives_reseeding() {
        let (page, mut store, index, form) = seeded();
        let female = ctrl(&page, "gender_female");
        index.check(&mut store, female);

        // Re-seed (page rebuild): markup says male, live state says female.
        seed_form(page.find(form).unwrap(), &mut store);

        assert!(store.is_checked(female));
        assert!(!store.is_checked(ctrl(&page, "gender_male")));
    }

    #[test]
    fn check_unchecks_the_rest_of_the_group() {
        let (page, mut store, index, _) = seeded();
        let male = ctrl(&page, "gender_male");
        let female = ctrl(&page, "gender_female");

        assert!(index.check(&mut store, female));
        assert!(store.is_checked(female));
        assert!(!store.is_checked(male));

        // Checking the already-checked member changes nothing.
        assert!(!index.check(&mut store, female));
    }

    #[test]
    fn reads_text_and_radio_fields_by_name() {
        let (page, mut store, _, form) = seeded();
        store.set(ctrl(&page, "doc-number"), "1234".to_string());
        store.set(ctrl(&page, "doc-dob"), "2023-05-09".to_string());

        let form = page.find(form).unwrap();
        assert_eq!(read_field(form, &store, "documentNumber").as_deref(), Some("1234"));
        assert_eq!(read_field(form, &store, "DOB").as_deref(), Some("2023-05-09"));
        assert_eq!(read_field(form, &store, "gender").as_deref(), Some("male"));
        assert_eq!(read_field(form, &store, "missing"), None);
    }

    #[test]
    fn unchecked_radio_group_reads_as_none() {
        let page = Page::from_html(
            "<form id=\"f\"><input name=\"gender\" type=\"radio\" value=\"male\"></form>",
        );
        let form = find_by_element_id(page.root(), "f").unwrap();
        let mut store = ControlStore::new();
        seed_form(form, &mut store);

        assert_eq!(read_field(form, &store, "gender"), None);
    }

    #[test]
    fn reset_form_restores_defaults() {
        let (page, mut store, index, form) = seeded();
        store.set(ctrl(&page, "doc-number"), "typed".to_string());
        index.check(&mut store, ctrl(&page, "gender_female"));

        reset_form(page.find(form).unwrap(), &mut store);

        assert_eq!(store.get(ctrl(&page, "doc-number")), Some(""));
        assert!(store.is_checked(ctrl(&page, "gender_male")));
        assert!(!store.is_checked(ctrl(&page, "gender_female")));
    }
}
