//! End-to-end controller flow over one registry page: seed, submit, edit,
//! patch, delete, highlight.

use controls::ControlStore;
use dom::traverse::{collect_by_class, find_by_element_id, find_by_label, text_content};
use dom::{Id, Page};
use registry::projection::DocumentKind;
use registry::{
    FormConfig, ITEM_CLASS, ListItemTemplate, SubmitOutcome, control_id, delete_item,
    handle_submit, nav, populate_form, seed_form,
};

const PAGE: &str = concat!(
    "<nav>",
    "<a class=\"nav-item\" href=\"/\">Home</a>",
    "<a class=\"nav-item\" href=\"/aadhaar\">Aadhaar</a>",
    "</nav>",
    "<form id=\"entry-form\">",
    "<input id=\"doc-number\" name=\"documentNumber\" type=\"text\">",
    "<input id=\"doc-name\" name=\"holdingPersonName\" type=\"text\">",
    "<input id=\"doc-dob\" name=\"DOB\" type=\"date\">",
    "<input id=\"gender_male\" name=\"gender\" type=\"radio\" value=\"male\" checked>",
    "<input id=\"gender_female\" name=\"gender\" type=\"radio\" value=\"female\">",
    "<input id=\"address\" name=\"address\" type=\"text\">",
    "</form>",
    "<ul id=\"entries\"></ul>",
);

struct App {
    page: Page,
    store: ControlStore,
    index: registry::RadioGroupIndex,
    form: Id,
    container: Id,
    config: FormConfig,
}

impl App {
    fn start() -> App {
        let page = Page::from_html(PAGE);
        let form = find_by_element_id(page.root(), "entry-form").unwrap().id();
        let container = find_by_element_id(page.root(), "entries").unwrap().id();
        let mut store = ControlStore::new();
        let index = seed_form(page.find(form).unwrap(), &mut store);
        App {
            page,
            store,
            index,
            form,
            container,
            config: FormConfig::with_additional_fields(DocumentKind::Aadhaar, ["address"]),
        }
    }

    fn type_into(&mut self, elem_id: &str, value: &str) {
        let id = control_id(find_by_element_id(self.page.root(), elem_id).unwrap());
        self.store.set(id, value.to_string());
    }

    fn pick_gender(&mut self, value: &str) {
        let id = control_id(
            find_by_element_id(self.page.root(), &format!("gender_{value}")).unwrap(),
        );
        self.index.check(&mut self.store, id);
    }

    fn submit(&mut self, edit_target: Option<Id>) -> SubmitOutcome {
        handle_submit(
            &mut self.page,
            &mut self.store,
            self.form,
            edit_target,
            self.container,
            &ListItemTemplate,
            &self.config,
        )
    }

    fn items(&self) -> Vec<Id> {
        let mut out = Vec::new();
        collect_by_class(self.page.root(), ITEM_CLASS, &mut out);
        out
    }

    fn label_text(&self, item: Id, label: &str) -> String {
        let entry = self.page.find(item).unwrap();
        let mut out = String::new();
        text_content(find_by_label(entry, label).unwrap(), &mut out);
        out
    }
}

#[test]
fn full_registry_session() {
    let mut app = App::start();

    // Startup highlighting is explicit, not ambient.
    let marked = nav::highlight_active(&mut app.page, "https://registry.example/aadhaar");
    assert_eq!(marked.len(), 1);

    // First entry.
    app.type_into("doc-number", "1234-5678-9012");
    app.type_into("doc-name", "Asha Rao");
    app.type_into("doc-dob", "2000-01-01");
    app.pick_gender("male");
    app.type_into("address", "12 Lake Road");
    let first = match app.submit(None) {
        SubmitOutcome::Inserted { nodes } => nodes[0],
        other => panic!("expected insert, got {other:?}"),
    };
    assert_eq!(app.label_text(first, "DOB"), "01/01/2000");
    assert_eq!(app.label_text(first, "genderSymbol"), "♂");

    // Second entry; duplicates of the first are fine.
    app.type_into("doc-number", "1234-5678-9012");
    app.type_into("doc-name", "Asha Rao");
    app.type_into("doc-dob", "2000-01-01");
    let second = match app.submit(None) {
        SubmitOutcome::Inserted { nodes } => nodes[0],
        other => panic!("expected insert, got {other:?}"),
    };
    assert_eq!(app.items().len(), 2);

    // Edit the first entry: populate, retype one field, submit with target.
    let form_node = app.page.find(app.form).unwrap().clone();
    let data = registry::EntryData {
        document_number: "1234-5678-9012".to_string(),
        holding_person_name: "Asha Rao".to_string(),
        dob: "01/01/2000".to_string(),
        gender: "male".to_string(),
        additional: vec![("address".to_string(), "12 Lake Road".to_string())],
    };
    let report = populate_form(
        &form_node,
        &mut app.store,
        &app.index,
        &data,
        &[("address".to_string(), "12 Lake Road".to_string())],
    );
    assert!(report.missing_controls.is_empty());

    app.type_into("doc-name", "Asha Rao-Iyer");
    app.pick_gender("female");
    let outcome = app.submit(Some(first));
    assert!(matches!(outcome, SubmitOutcome::Patched { ref report } if report.missing_labels.is_empty()));

    // Only the edit target changed; no third entry appeared.
    assert_eq!(app.items().len(), 2);
    assert_eq!(app.label_text(first, "holdingPersonName"), "Asha Rao-Iyer");
    assert_eq!(app.label_text(first, "genderSymbol"), "♀");
    assert_eq!(app.label_text(second, "holdingPersonName"), "Asha Rao");

    // Delete the second entry from its delete control.
    let delete_target = {
        let entry = app.page.find(second).unwrap();
        let mut buttons = Vec::new();
        collect_by_class(entry, "delete", &mut buttons);
        buttons[0]
    };
    assert_eq!(delete_item(&mut app.page, delete_target), Some(second));
    assert_eq!(app.items(), vec![first]);
}

#[test]
fn rejected_submission_leaves_the_page_alone() {
    let mut app = App::start();
    app.type_into("doc-number", "1234");

    let outcome = app.submit(None);

    assert!(matches!(outcome, SubmitOutcome::Rejected { ref missing } if missing.len() == 2));
    assert!(app.items().is_empty());
}
