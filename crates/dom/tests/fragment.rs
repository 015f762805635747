use dom::traverse::{
    ancestor_with_class, collect_by_class, find_by_element_id, find_by_label, text_content,
};
use dom::{Page, PageError};

const PAGE_SKELETON: &str = concat!(
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
    "</form>",
    "<ul id=\"entries\"></ul>",
);

fn text_of(page: &Page, label: &str) -> String {
    let mut out = String::new();
    text_content(find_by_label(page.root(), label).unwrap(), &mut out);
    out
}

#[test]
fn page_lifecycle_insert_patch_delete() {
    let mut page = Page::from_html(PAGE_SKELETON);
    let container = find_by_element_id(page.root(), "entries").unwrap().id();

    let appended = page
        .append_fragment(
            container,
            "<li class=\"item\"><span data-label=\"documentNumber\">A-1</span>\
             <span data-label=\"DOB\">09/05/2023</span>\
             <button class=\"delete\">x</button></li>",
        )
        .unwrap();
    assert_eq!(appended.len(), 1);

    // Patch one labeled child in place; the other keeps its text.
    let number = find_by_label(page.root(), "documentNumber").unwrap().id();
    page.set_text_content(number, "A-2").unwrap();
    assert_eq!(text_of(&page, "documentNumber"), "A-2");
    assert_eq!(text_of(&page, "DOB"), "09/05/2023");

    // Delete resolves the item from a descendant activation target.
    let mut buttons = Vec::new();
    collect_by_class(page.root(), "delete", &mut buttons);
    let item = ancestor_with_class(page.root(), buttons[0], "item").unwrap();
    page.remove_subtree(item).unwrap();

    let mut items = Vec::new();
    collect_by_class(page.root(), "item", &mut items);
    assert!(items.is_empty());
    assert!(find_by_label(page.root(), "documentNumber").is_none());
}

#[test]
fn sibling_items_survive_deletion() {
    let mut page = Page::from_html("<ul id=\"entries\"></ul>");
    let container = find_by_element_id(page.root(), "entries").unwrap().id();

    for name in ["a", "b", "c"] {
        page.append_fragment(
            container,
            &format!("<li class=\"item\"><span data-label=\"holdingPersonName\">{name}</span></li>"),
        )
        .unwrap();
    }

    let mut items = Vec::new();
    collect_by_class(page.root(), "item", &mut items);
    page.remove_subtree(items[0]).unwrap();

    let mut rest = Vec::new();
    collect_by_class(page.root(), "item", &mut rest);
    assert_eq!(rest, vec![items[1], items[2]]);

    let mut out = String::new();
    text_content(page.find(container).unwrap(), &mut out);
    assert_eq!(out, "bc");
}

#[test]
fn form_controls_are_reachable_by_selector() {
    let page = Page::from_html(PAGE_SKELETON);
    for selector in ["doc-number", "doc-name", "doc-dob", "gender_male", "gender_female"] {
        assert!(
            find_by_element_id(page.root(), selector).is_some(),
            "missing #{selector}"
        );
    }
    let male = find_by_element_id(page.root(), "gender_male").unwrap();
    assert!(male.has_attr("checked"));
    assert_eq!(male.attr("value"), Some("male"));
}

#[test]
fn append_into_text_node_is_rejected() {
    let mut page = Page::from_html("<p>text</p>");
    let p = page.root().children().unwrap()[0].id();
    let text = page.find(p).unwrap().children().unwrap()[0].id();

    let err = page.append_fragment(text, "<span></span>").unwrap_err();
    assert_eq!(err, PageError::NotAnElement(text));
}
