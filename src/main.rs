//! Demo driver: runs one registry session against a sample page and prints
//! the resulting tree.

use controls::ControlStore;
use dom::Page;
use dom::traverse::{collect_by_class, find_by_element_id};
use registry::projection::{DocumentKind, RawDetails, image_details};
use registry::{
    FormConfig, ITEM_CLASS, ListItemTemplate, SubmitOutcome, control_id, delete_item,
    handle_submit, nav, seed_form,
};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const PAGE: &str = concat!(
    "<nav>",
    "<a class=\"nav-item\" href=\"/\">Home</a>",
    "<a class=\"nav-item\" href=\"/aadhaar\">Aadhaar</a>",
    "<a class=\"nav-item\" href=\"/dl\">Driving Licence</a>",
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

fn main() {
    let mut page = Page::from_html(PAGE);
    let form = find_by_element_id(page.root(), "entry-form")
        .expect("sample page has a form")
        .id();
    let container = find_by_element_id(page.root(), "entries")
        .expect("sample page has an entries list")
        .id();

    let mut store = ControlStore::new();
    let index = seed_form(page.find(form).expect("form is live"), &mut store);
    let config = FormConfig::with_additional_fields(DocumentKind::Aadhaar, ["address"]);

    nav::highlight_active(&mut page, "/aadhaar");

    let mut type_into = |page: &Page, store: &mut ControlStore, elem_id: &str, value: &str| {
        let node = find_by_element_id(page.root(), elem_id).expect("sample control exists");
        store.set(control_id(node), value.to_string());
    };

    // Two submissions, then edit the first in place.
    type_into(&page, &mut store, "doc-number", "1234-5678-9012");
    type_into(&page, &mut store, "doc-name", "Asha Rao");
    type_into(&page, &mut store, "doc-dob", "2000-01-01");
    type_into(&page, &mut store, "address", "12 Lake Road");
    let first = match handle_submit(
        &mut page,
        &mut store,
        form,
        None,
        container,
        &ListItemTemplate,
        &config,
    ) {
        SubmitOutcome::Inserted { nodes } => nodes[0],
        other => panic!("sample submit must insert, got {other:?}"),
    };

    type_into(&page, &mut store, "doc-number", "5555-0000-1111");
    type_into(&page, &mut store, "doc-name", "Ravi Menon");
    type_into(&page, &mut store, "doc-dob", "1990-03-02");
    let female = find_by_element_id(page.root(), "gender_female").expect("radio exists");
    index.check(&mut store, control_id(female));
    type_into(&page, &mut store, "address", "4 Hill Street");
    let second = match handle_submit(
        &mut page,
        &mut store,
        form,
        None,
        container,
        &ListItemTemplate,
        &config,
    ) {
        SubmitOutcome::Inserted { nodes } => nodes[0],
        other => panic!("sample submit must insert, got {other:?}"),
    };

    type_into(&page, &mut store, "doc-number", "1234-5678-9012");
    type_into(&page, &mut store, "doc-name", "Asha Rao-Iyer");
    type_into(&page, &mut store, "doc-dob", "2000-01-01");
    type_into(&page, &mut store, "address", "12 Lake Road");
    handle_submit(
        &mut page,
        &mut store,
        form,
        Some(first),
        container,
        &ListItemTemplate,
        &config,
    );

    // Delete the second entry from its delete control.
    let delete_target = {
        let entry = page.find(second).expect("second entry is live");
        let mut buttons = Vec::new();
        collect_by_class(entry, "delete", &mut buttons);
        buttons[0]
    };
    delete_item(&mut page, delete_target);

    println!("page after one session:");
    for line in dom::outline::outline(page.root(), 60) {
        println!("  {line}");
    }

    let mut items = Vec::new();
    collect_by_class(page.root(), ITEM_CLASS, &mut items);
    println!("\n{} entr{} on the page", items.len(), if items.len() == 1 { "y" } else { "ies" });

    let details = image_details(
        DocumentKind::Aadhaar,
        &RawDetails {
            number: "1234-5678-9012".to_string(),
            name: "Asha Rao-Iyer".to_string(),
            gender: "♂".to_string(),
            dob: "01/01/2000".to_string(),
            address: "12 Lake Road".to_string(),
            ..RawDetails::default()
        },
    );
    println!("\nimage export details (aadhaar):");
    for detail in details {
        println!("  {} {}", detail.label, detail.value);
    }
}
