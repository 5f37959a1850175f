use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::{render_sorted, Column, Content, GridRow, SortState};

#[derive(Clone)]
struct Fruit {
    id: u32,
    name: &'static str,
    stock: u32,
}

impl GridRow for Fruit {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("sortable.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let fruits = vec![
        Fruit {
            id: 1,
            name: "pear",
            stock: 5,
        },
        Fruit {
            id: 2,
            name: "apple",
            stock: 12,
        },
        Fruit {
            id: 3,
            name: "fig",
            stock: 5,
        },
    ];

    let columns = vec![
        Column::new("Name", |fruit: &Fruit| Content::text(fruit.name))
            .sort_value(|fruit: &Fruit| fruit.name.into()),
        Column::new("Stock", |fruit: &Fruit| Content::text(fruit.stock.to_string()))
            .sort_value(|fruit: &Fruit| fruit.stock.into()),
    ];

    // Walk the full toggle cycle on one column: unsorted, ascending,
    // descending, back to unsorted.
    let mut sort = SortState::new();
    for _ in 0..4 {
        let grid = render_sorted(&fruits, &columns, &sort)?;
        println!("{grid}");
        sort.toggle("Stock");
    }

    Ok(())
}
