//! Builds a small aligned report and a generated code snippet, showing the
//! fluent and indent-aware builders together.
//!
//! ```bash
//! cargo run --example report
//! ```

use textforge::{Alignment, IndentBuilder, TextBuilder};

fn main() {
    let entries = [("apples", 12_u32, 0.5_f64), ("bananas", 3, 0.25), ("cherries", 250, 0.02)];

    let mut table = TextBuilder::new();
    table
        .align("item", 10, Alignment::LEFT)
        .align("qty", 5, Alignment::RIGHT)
        .align("price", 8, Alignment::RIGHT)
        .newline();
    table.enumerate(entries, |b, (name, qty, price)| {
        b.align(name, 10, Alignment::LEFT);
        let qty = qty.to_string();
        b.align(&qty, 5, Alignment::RIGHT);
        b.format(" {0:0.00}", &[&price]).unwrap();
        b.newline();
    });
    println!("{table}");

    let mut code = IndentBuilder::new();
    code.write("fn totals(prices: &[f64]) -> f64 {");
    code.indented("    ", |b| {
        b.newline();
        b.write("prices.iter().sum()");
    });
    code.newline();
    code.write("}");
    println!("{code}");
}
