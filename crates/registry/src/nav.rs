//! Navigation-link highlighting, run explicitly at page startup.

use dom::traverse::collect_by_class;
use dom::{Id, Page};
use url::Url;

pub const NAV_ITEM_CLASS: &str = "nav-item";
pub const ACTIVE_CLASS: &str = "active";

/// Mark every `nav-item` link whose `href` exactly equals the current page
/// path as `active`. Returns the ids of the links marked.
///
/// `current` may be a full URL (the path is extracted) or a bare path.
pub fn highlight_active(page: &mut Page, current: &str) -> Vec<Id> {
    let path = current_path(current);

    let mut links = Vec::new();
    collect_by_class(page.root(), NAV_ITEM_CLASS, &mut links);

    let mut marked = Vec::new();
    for link in links {
        let Some(node) = page.find(link) else {
            continue;
        };
        if node.attr("href") != Some(path.as_str()) {
            continue;
        }
        match page.add_class(link, ACTIVE_CLASS) {
            Ok(_) => marked.push(link),
            Err(err) => {
                log::warn!(target: "registry.nav", "could not mark link {link:?}: {err:?}");
            }
        }
    }
    marked
}

fn current_path(current: &str) -> String {
    match Url::parse(current) {
        Ok(parsed) => parsed.path().to_string(),
        // Not an absolute URL; treat the input as a bare path.
        Err(_) => current.to_string(),
    }
}
