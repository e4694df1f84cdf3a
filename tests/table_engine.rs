use designkit::domain::{Column, JsonRecord, Record};
use designkit::table::{handle_event, PageSummary, SortDirection, TableEvent, TableOptions, TableView};
use serde_json::json;

fn numbered_rows(count: i64) -> Vec<JsonRecord> {
    (1..=count)
        .map(|i| {
            JsonRecord::from_value(json!({
                "id": i,
                "name": format!("Row {i:02}"),
                "score": (i * 7) % 10,
            }))
            .unwrap()
        })
        .collect()
}

fn numbered_table(count: i64, page_size: usize) -> TableView<JsonRecord> {
    TableView::new(
        numbered_rows(count),
        vec![Column::field("name", "Name"), Column::field("score", "Score")],
        TableOptions::with_page_size(page_size),
    )
    .unwrap()
}

fn ids(rows: &[&JsonRecord]) -> Vec<String> {
    rows.iter().map(|row| row.id().to_string()).collect()
}

#[test]
fn last_page_of_twenty_five_rows() {
    let mut view = numbered_table(25, 10);
    assert_eq!(view.total_pages(), 3);

    assert!(view.set_page(3));
    assert_eq!(ids(&view.visible_rows()), ["21", "22", "23", "24", "25"]);

    let summary = PageSummary::new(view.current_page(), 10, view.filtered_count()).unwrap();
    assert_eq!(summary.to_string(), "Showing 21 to 25 of 25 results");
}

#[test]
fn header_clicks_alternate_direction() {
    let rows = JsonRecord::parse_array(r#"[{"id": 1, "name": "Bob"}, {"id": 2, "name": "Amy"}]"#).unwrap();
    let mut view = TableView::new(rows, vec![Column::field("name", "Name")], TableOptions::default()).unwrap();

    let names = |view: &TableView<JsonRecord>| -> Vec<String> {
        view.visible_rows().iter().map(|row| row.get("name").to_string()).collect()
    };

    assert!(handle_event(&mut view, &TableEvent::HeaderClicked("name".to_string())));
    assert_eq!(names(&view), ["Amy", "Bob"]);
    assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Asc));

    assert!(handle_event(&mut view, &TableEvent::HeaderClicked("name".to_string())));
    assert_eq!(names(&view), ["Bob", "Amy"]);
    assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Desc));
}

#[test]
fn empty_filter_is_identity() {
    let mut view = numbered_table(12, 5);
    view.set_filter_text("");
    assert_eq!(ids(&view.filtered_rows()), ids(&view.rows().iter().collect::<Vec<_>>()));
}

#[test]
fn filter_yields_matching_subset_in_order() {
    let mut view = numbered_table(25, 10);
    view.set_filter_text("ROW 1");

    let filtered = view.filtered_rows();
    assert_eq!(ids(&filtered), ["10", "11", "12", "13", "14", "15", "16", "17", "18", "19"]);
    assert!(filtered
        .iter()
        .all(|row| row.get("name").to_string().to_lowercase().contains("row 1")));
}

#[test]
fn sort_is_a_permutation_and_idempotent_through_a_full_toggle() {
    let mut view = numbered_table(25, 10);

    view.toggle_sort("score");
    let ascending = ids(&view.sorted_rows());

    let mut as_set = ascending.clone();
    as_set.sort();
    let mut original = ids(&view.filtered_rows());
    original.sort();
    assert_eq!(as_set, original);

    let scores: Vec<i64> = view
        .sorted_rows()
        .iter()
        .map(|row| row.get("score").to_string().parse().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));

    view.toggle_sort("score");
    view.toggle_sort("score");
    view.toggle_sort("name");
    view.toggle_sort("score");
    assert_eq!(ids(&view.sorted_rows()), ascending);
}

#[test]
fn pages_concatenate_to_sorted_rows() {
    let mut view = numbered_table(23, 4);
    view.toggle_sort("score");
    view.toggle_sort("score");

    let mut concatenated = Vec::new();
    for page in 1..=view.total_pages() {
        view.set_page(page);
        let visible = view.visible_rows();
        assert!(visible.len() <= 4);
        concatenated.extend(ids(&visible));
    }

    assert_eq!(concatenated, ids(&view.sorted_rows()));
}

#[test]
fn out_of_range_pages_are_ignored() {
    let mut view = numbered_table(25, 10);
    view.set_page(2);

    assert!(!view.set_page(0));
    assert!(!view.set_page(4));
    assert_eq!(view.current_page(), 2);

    assert!(handle_event(&mut view, &TableEvent::LastPage));
    assert!(!handle_event(&mut view, &TableEvent::NextPage));
    assert_eq!(view.current_page(), 3);
}

#[test]
fn viewmodel_reflects_state_after_events() {
    let mut view = numbered_table(25, 10);
    handle_event(&mut view, &TableEvent::PageRequested(2));
    handle_event(&mut view, &TableEvent::FilterChanged("row 2".to_string()));

    let vm = view.compute_viewmodel(1);
    assert_eq!(vm.filter.as_deref(), Some("row 2"));
    assert_eq!(vm.rows.len(), 6);
    assert!(vm.pagination.is_none());
    assert!(vm.empty_state.is_none());
    assert_eq!(vm.rows[0].cells, ["Row 20", "0"]);
}
