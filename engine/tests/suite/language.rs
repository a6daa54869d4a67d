//! Language switching while browsing and while the terminal is open.

use folio_engine::{CategoryFilter, Language, ProjectCategory, ScrollbackEntry};

use crate::common::{selected_id, site};

#[test]
fn toggling_language_keeps_browser_state() {
    let mut site = site();
    {
        let browser = site.browser_mut();
        browser.select_project("endless-aisle").unwrap();
        browser.set_filter(CategoryFilter::Only(ProjectCategory::Rfid));
    }

    assert_eq!(site.toggle_language().unwrap(), Language::Es);

    let browser = site.browser();
    assert_eq!(browser.current_index(), 3);
    assert_eq!(selected_id(&site), Some("endless-aisle"));
    assert_eq!(
        site.browser().active_filter(),
        CategoryFilter::Only(ProjectCategory::Rfid)
    );
    assert!(site.browser().has_explored_once());
}

#[test]
fn catalog_text_follows_language() {
    let mut site = site();
    let english = site.browser().current_project().unwrap().title.clone();
    site.set_language(Language::Es).unwrap();
    let spanish = site.browser().current_project().unwrap().title.clone();

    assert_eq!(english, "RFID Inventory Platform");
    assert_eq!(spanish, "Plataforma de inventario RFID");
}

#[test]
fn open_terminal_answers_in_new_language() {
    let mut site = site();
    site.open_terminal();
    site.submit("xyzzy");
    site.toggle_language().unwrap();
    site.submit("xyzzy");

    let messages: Vec<String> = site
        .terminal()
        .unwrap()
        .scrollback()
        .entries()
        .iter()
        .filter_map(|entry| match entry {
            ScrollbackEntry::Command { output, .. } => Some(output.plain_text()),
            ScrollbackEntry::System(_) => None,
        })
        .collect();

    assert!(messages[0].starts_with("Command not found"));
    assert!(messages[1].starts_with("Comando no encontrado"));
}
