// tests/integration_tests/view_test.rs
use typetally::repl::Session;
use typetally::{DensityView, PAGE_SIZE};

#[test]
fn test_pagination_over_twelve_rows() {
    // Twelve distinct words -> twelve density rows.
    let mut session = Session::new(1);
    session.push_line("ant bee cat dog elk fox gnu hen ibis jay kit lark");
    session.toggle_view();

    let rows = session.density();
    assert_eq!(rows.len(), 12);
    assert_eq!(DensityView::total_pages(rows.len()), 3);

    session.next_page();
    session.next_page();
    let view = session.view();
    assert_eq!(view.page(), 3);
    assert_eq!(view.start_rank(), 11, "Page 3 starts at rank 11");
    assert_eq!(view.window(&rows).len(), 2, "Page 3 shows ranks 11-12");

    session.next_page();
    assert_eq!(session.view().page(), 3, "Next at the last page is a no-op");
}

#[test]
fn test_text_change_while_open_resets_everything() {
    let mut session = Session::new(1);
    session.push_line("ant bee cat dog elk fox gnu hen");
    session.toggle_view();
    session.next_page();
    session.show_all();

    session.push_line("more text arrives");
    let view = session.view();
    assert!(!view.is_open(), "Editing closes the view");
    assert!(!view.is_show_all());
    assert_eq!(view.page(), 1);
}

#[test]
fn test_collapsing_forgets_page_and_mode() {
    let mut session = Session::new(1);
    session.push_line("ant bee cat dog elk fox gnu hen ibis jay");
    session.toggle_view();
    session.next_page();

    session.toggle_view();
    assert_eq!(session.view(), DensityView::new());

    session.toggle_view();
    assert_eq!(session.view().page(), 1, "Reopening starts from page 1");
}

#[test]
fn test_window_matches_page_size() {
    let mut session = Session::new(1);
    session.push_line("ant bee cat dog elk fox gnu hen ibis jay kit lark");
    session.toggle_view();
    let rows = session.density();
    assert_eq!(session.view().window(&rows).len(), PAGE_SIZE);
}

#[test]
fn test_show_all_and_back() {
    let mut session = Session::new(1);
    session.push_line("ant bee cat dog elk fox gnu");
    session.toggle_view();
    session.next_page();
    session.show_all();

    let rows = session.density();
    let view = session.view();
    assert_eq!(view.window(&rows).len(), rows.len());
    assert_eq!(view.start_rank(), 1);

    session.paginate();
    assert_eq!(session.view().page(), 1);
    assert!(!session.view().is_show_all());
}
