use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::{render_sorted, Column, Content, GridRow, SortState};
use tabula_store::{RecordStore, StoreRecord, ViewEntry, ViewSelector};

#[derive(Clone, Debug)]
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

fn columns() -> Vec<Column<ViewEntry<Car>>> {
    vec![
        Column::new("Name", |entry: &ViewEntry<Car>| {
            // Highlighted names are wrapped in asterisks in this flat
            // paint; a styled surface would bold them instead.
            if entry.matches_highlight {
                Content::text(format!("*{}*", entry.record.name))
            } else {
                Content::text(entry.record.name.clone())
            }
        })
        .sort_value(|entry: &ViewEntry<Car>| entry.record.name.clone().into()),
        Column::new("Cost", |entry: &ViewEntry<Car>| {
            Content::text(format!("${:.0}", entry.record.cost))
        })
        .sort_value(|entry: &ViewEntry<Car>| entry.record.cost.into()),
    ]
}

/// Turn the pending form input into a stored record, like a form submit.
fn submit(store: &mut RecordStore<Car>, id: u32) {
    let name = store.form().get("name").to_string();
    let cost: f64 = store.form().get("cost").parse().unwrap_or(0.0);
    store.add_record(Car { id, name, cost });
    store.clear_form();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("cars.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut store = RecordStore::new();

    store.set_form_field("name", "Civic");
    store.set_form_field("cost", "20000");
    submit(&mut store, 1);

    store.set_form_field("name", "Accord");
    store.set_form_field("cost", "25000");
    submit(&mut store, 2);

    store.set_form_field("name", "civic si");
    store.set_form_field("cost", "30000");
    submit(&mut store, 3);

    store.set_search_term("c");
    store.set_highlight_term("civic");

    let selector = ViewSelector::new();
    let view = selector.select(&store.snapshot());

    let mut sort = SortState::new();
    sort.toggle("Cost");

    let grid = render_sorted(view.entries(), &columns(), &sort)?;
    println!("{grid}");

    // Typing in the form does not invalidate the derived view.
    store.set_form_field("name", "Prelude");
    let again = selector.select(&store.snapshot());
    println!(
        "cache hit after form input: {}",
        std::sync::Arc::ptr_eq(&view, &again)
    );

    Ok(())
}
