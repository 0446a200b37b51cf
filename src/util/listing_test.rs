use super::*;

fn keys(query: &Query) -> Vec<&'static str> {
    query.iter().map(|(k, _)| *k).collect()
}

// =============================================================
// Filters
// =============================================================

#[test]
fn college_query_omits_blank_filters() {
    let filters = CollegeFilters {
        kind: "Engineering".to_owned(),
        city: "   ".to_owned(),
        ..CollegeFilters::default()
    };
    let query = filters.query(&Pagination::new(COLLEGE_PAGE_SIZE));
    assert_eq!(
        query,
        vec![
            ("type", "Engineering".to_owned()),
            ("page", "1".to_owned()),
            ("limit", "12".to_owned()),
        ]
    );
}

#[test]
fn college_query_includes_all_filled_filters_in_order() {
    let filters = CollegeFilters {
        kind: "Medical".to_owned(),
        state: "Kerala".to_owned(),
        city: "Kochi".to_owned(),
        search: " aiims ".to_owned(),
    };
    let mut pagination = Pagination::new(COLLEGE_PAGE_SIZE);
    pagination.update_totals(40, 4);
    pagination.go_to(3);
    let query = filters.query(&pagination);
    assert_eq!(keys(&query), vec!["type", "state", "city", "search", "page", "limit"]);
    assert_eq!(query[3].1, "aiims");
    assert_eq!(query[4].1, "3");
}

#[test]
fn roadmap_and_exam_queries_skip_empty_values() {
    assert!(CatalogFilters::default().query().is_empty());
    let roadmap = CatalogFilters { difficulty: "beginner".to_owned(), ..CatalogFilters::default() };
    assert_eq!(roadmap.query(), vec![("difficulty", "beginner".to_owned())]);

    let exams = ExamFilters { category: "Engineering".to_owned(), level: "National".to_owned() };
    assert_eq!(keys(&exams.query()), vec!["category", "level"]);
}

#[test]
fn questions_are_limited_to_twenty() {
    assert_eq!(questions_query(), vec![("limit", "20".to_owned())]);
}

#[test]
fn empty_college_filters_report_empty() {
    assert!(CollegeFilters::default().is_empty());
    assert!(!CollegeFilters { search: "x".to_owned(), ..CollegeFilters::default() }.is_empty());
}

// =============================================================
// Pagination
// =============================================================

fn at(page: u32, pages: u32) -> Pagination {
    let mut p = Pagination::new(COLLEGE_PAGE_SIZE);
    p.update_totals(u64::from(pages) * 12, pages);
    p.go_to(page);
    p
}

#[test]
fn window_lists_every_page_when_few() {
    assert_eq!(at(1, 3).page_window(), vec![1, 2, 3]);
    assert_eq!(at(5, 5).page_window(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_is_pinned_at_the_start() {
    assert_eq!(at(2, 10).page_window(), vec![1, 2, 3, 4, 5]);
    assert_eq!(at(3, 10).page_window(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_is_centred_in_the_middle() {
    assert_eq!(at(6, 10).page_window(), vec![4, 5, 6, 7, 8]);
}

#[test]
fn window_is_pinned_at_the_end() {
    assert_eq!(at(8, 10).page_window(), vec![6, 7, 8, 9, 10]);
    assert_eq!(at(10, 10).page_window(), vec![6, 7, 8, 9, 10]);
}

#[test]
fn no_pages_means_no_window_and_no_controls() {
    let p = Pagination::new(COLLEGE_PAGE_SIZE);
    assert!(p.page_window().is_empty());
    assert!(!p.show_controls());
    assert!(!p.has_prev());
    assert!(!p.has_next());
}

#[test]
fn prev_next_disabled_at_the_ends() {
    let first = at(1, 4);
    assert!(!first.has_prev());
    assert!(first.has_next());
    let last = at(4, 4);
    assert!(last.has_prev());
    assert!(!last.has_next());
}

#[test]
fn go_to_clamps_and_reset_returns_to_first_page() {
    let mut p = at(2, 4);
    p.go_to(99);
    assert_eq!(p.page, 4);
    p.go_to(0);
    assert_eq!(p.page, 1);
    p.go_to(3);
    p.reset();
    assert_eq!(p.page, 1);
}
