use super::*;

#[test]
fn home_is_active_only_at_root() {
    assert!(is_active("/", "/"));
    assert!(is_active("/", ""));
    assert!(!is_active("/", "/projects"));
}

#[test]
fn section_is_active_for_sub_routes() {
    assert!(is_active("/projects", "/projects"));
    assert!(is_active("/projects", "/projects/"));
    assert!(is_active("/projects", "/projects/modern-villa"));
    assert!(!is_active("/projects", "/projectsx"));
    assert!(!is_active("/about", "/projects"));
}

#[test]
fn page_title_appends_firm_name() {
    assert_eq!(page_title("Contact Us"), "Contact Us | Bhardwaj Architect");
}

#[test]
fn nav_paths_are_unique() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for b in &NAV_ITEMS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}
