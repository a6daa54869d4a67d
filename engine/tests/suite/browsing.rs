//! Project browser scenarios against the bundled catalog.

use folio_engine::{CategoryFilter, ProjectCategory};

use crate::common::{selected_id, site};

#[test]
fn visitor_explores_then_arrows_through_details() {
    let mut site = site();
    let browser = site.browser_mut();

    browser.next();
    assert_eq!(browser.current_index(), 1);
    assert_eq!(
        browser.selected_project_id().map(|id| id.as_str()),
        Some("rfid-inventory")
    );

    browser.select_project("click-and-collect").unwrap();
    assert!(browser.has_explored_once());
    assert_eq!(browser.current_index(), 2);

    browser.next();
    browser.next();
    assert_eq!(
        browser.selected_project_id().map(|id| id.as_str()),
        Some("store-pulse")
    );
    assert!(browser.selected_detail().unwrap().is_empty());

    browser.next();
    assert_eq!(browser.current_index(), 0);
    assert_eq!(selected_id(&site), Some("rfid-inventory"));
}

#[test]
fn back_to_carousel_and_forward_again() {
    let mut site = site();
    let browser = site.browser_mut();
    browser.select_project("smart-fitting-room").unwrap();
    browser.clear_selection();
    assert!(browser.selected_project().is_none());
    assert_eq!(browser.current_index(), 1);

    browser.previous();
    assert_eq!(selected_id(&site), Some("rfid-inventory"));
}

#[test]
fn filter_narrows_grid_only() {
    let mut site = site();
    let browser = site.browser_mut();
    browser.next();
    browser.set_filter(CategoryFilter::Only(ProjectCategory::Omni));

    let ids: Vec<&str> = browser
        .visible_projects()
        .iter()
        .map(|project| project.id.as_str())
        .collect();
    assert_eq!(ids, ["click-and-collect", "endless-aisle"]);
    assert_eq!(browser.current_index(), 1);

    let every_filter: usize = ProjectCategory::all()
        .iter()
        .map(|category| browser.projects_filtered_by(CategoryFilter::from(*category)).len())
        .sum();
    assert_eq!(every_filter, browser.catalog().len());
}

#[test]
fn unknown_selection_leaves_state_alone() {
    let mut site = site();
    let err = site.browser_mut().select_project("does-not-exist").unwrap_err();
    assert_eq!(err.id, "does-not-exist");
    assert_eq!(selected_id(&site), Some("rfid-inventory"));
    assert!(!site.browser().has_explored_once());
}
