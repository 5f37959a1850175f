//! End-to-end flow: store → derived view → sort → grid.

use tabula::{render_sorted, Column, Content, GridRow, SortState};
use tabula_store::{RecordStore, StoreRecord, ViewEntry, ViewSelector};

#[derive(Clone, Debug, PartialEq)]
struct Car {
    id: u32,
    name: String,
    cost: f64,
}

impl StoreRecord for Car {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

impl GridRow for Car {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn store_with_cars() -> RecordStore<Car> {
    let mut store = RecordStore::new();
    for (id, name, cost) in [
        (1, "Civic", 20000.0),
        (2, "Accord", 25000.0),
        (3, "civic si", 30000.0),
    ] {
        store.add_record(Car {
            id,
            name: name.to_string(),
            cost,
        });
    }
    store
}

fn columns() -> Vec<Column<ViewEntry<Car>>> {
    vec![
        Column::new("Name", |entry: &ViewEntry<Car>| {
            Content::text(entry.record.name.clone())
        })
        .sort_value(|entry: &ViewEntry<Car>| entry.record.name.clone().into()),
        Column::new("Cost", |entry: &ViewEntry<Car>| {
            Content::text(format!("{:.0}", entry.record.cost))
        })
        .sort_value(|entry: &ViewEntry<Car>| entry.record.cost.into()),
    ]
}

fn row_keys(grid: &tabula::Grid) -> Vec<&str> {
    grid.rows.iter().map(|row| row.key.as_str()).collect()
}

#[test]
fn filter_then_sort_by_cost() {
    let mut store = store_with_cars();
    store.set_search_term("civic");

    let selector = ViewSelector::new();
    let view = selector.select(&store.snapshot());

    // Case-insensitive substring match keeps ids 1 and 3, store order.
    let ids: Vec<u32> = view.iter().map(|entry| entry.record.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let mut sort = SortState::new();
    sort.toggle("Cost");

    let grid = render_sorted(view.entries(), &columns(), &sort).unwrap();
    assert_eq!(row_keys(&grid), vec!["1", "3"]);

    sort.toggle("Cost");
    let grid = render_sorted(view.entries(), &columns(), &sort).unwrap();
    assert_eq!(row_keys(&grid), vec!["3", "1"]);

    // Third toggle clears the sort; store order comes back.
    sort.toggle("Cost");
    assert_eq!(sort, SortState::Unsorted);
    let grid = render_sorted(view.entries(), &columns(), &sort).unwrap();
    assert_eq!(row_keys(&grid), vec!["1", "3"]);
}

#[test]
fn highlight_flags_flow_through_to_rendered_rows() {
    let mut store = store_with_cars();
    store.set_highlight_term("si");

    let selector = ViewSelector::new();
    let view = selector.select(&store.snapshot());

    let columns = vec![Column::new("Name", |entry: &ViewEntry<Car>| {
        if entry.matches_highlight {
            Content::text(format!("*{}*", entry.record.name))
        } else {
            Content::text(entry.record.name.clone())
        }
    })];

    let grid = render_sorted(view.entries(), &columns, &SortState::Unsorted).unwrap();
    assert_eq!(grid.rows[0].cells[0], Content::text("Civic"));
    assert_eq!(grid.rows[2].cells[0], Content::text("*civic si*"));
}

#[test]
fn empty_store_renders_header_only() {
    let store: RecordStore<Car> = RecordStore::new();
    let selector = ViewSelector::new();
    let view = selector.select(&store.snapshot());

    let grid = render_sorted(view.entries(), &columns(), &SortState::Unsorted).unwrap();
    assert_eq!(grid.header.len(), 2);
    assert!(grid.rows.is_empty());
}

#[test]
fn removal_feeds_through_the_whole_pipeline() {
    let mut store = store_with_cars();
    let selector = ViewSelector::new();

    store.remove_record(&2);
    let view = selector.select(&store.snapshot());

    let mut sort = SortState::new();
    sort.toggle("Name");

    let grid = render_sorted(view.entries(), &columns(), &sort).unwrap();
    // "Civic" sorts before "civic si" by code point (uppercase first).
    assert_eq!(row_keys(&grid), vec!["1", "3"]);
}
