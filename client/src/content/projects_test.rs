use super::*;
use crate::content::filter::{CategoryFilter, filter_by_category};

#[test]
fn project_ids_are_unique() {
    for (i, a) in PROJECTS.iter().enumerate() {
        for b in &PROJECTS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn every_project_category_has_a_tab() {
    for project in PROJECTS {
        assert!(PROJECT_FILTERS.contains(&project.category), "{}", project.id);
    }
}

#[test]
fn residential_filter_returns_three_in_catalogue_order() {
    let hits = filter_by_category(PROJECTS, CategoryFilter::Only("Residential"));
    assert_eq!(
        hits.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec!["modern-villa", "luxury-apartments", "seaside-villa"]
    );
}

#[test]
fn find_project_by_id() {
    assert_eq!(find_project("art-museum").map(|p| p.title), Some("Art Museum"));
    assert!(find_project("missing").is_none());
}

#[test]
fn related_projects_exclude_self_and_share_category() {
    let villa = find_project("modern-villa").unwrap();
    let related = related_projects(villa, RELATED_LIMIT);
    assert_eq!(
        related.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec!["luxury-apartments", "seaside-villa"]
    );
}

#[test]
fn related_projects_respect_limit() {
    let office = find_project("urban-office").unwrap();
    assert_eq!(related_projects(office, 1).len(), 1);
}

#[test]
fn featured_projects_are_the_first_three() {
    let ids = featured_projects().iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids, vec!["modern-villa", "urban-office", "cultural-center"]);
}

#[test]
fn href_points_at_detail_route() {
    assert_eq!(PROJECTS[0].href(), "/projects/modern-villa");
}
