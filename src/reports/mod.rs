use cipherforge::api::DemoReport;
use cipherforge::key::Key;
use cipherforge::optimizer::SearchResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Two-row grid: ciphertext letters on top, the plaintext letter each one
/// decodes to underneath.
pub fn print_key_grid(name: &str, key: &Key) {
    println!("\nKey: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cipher_row: Vec<Cell> = (b'a'..=b'z')
        .map(|b| Cell::new((b as char).to_string()).set_alignment(CellAlignment::Center))
        .collect();
    let plain_row: Vec<Cell> = key
        .to_string()
        .chars()
        .map(|c| {
            Cell::new(c.to_string())
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold)
        })
        .collect();

    table.add_row(cipher_row);
    table.add_row(plain_row);
    println!("{}", table);
}

pub fn print_result_table(result: &SearchResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Best Iter"),
        Cell::new("Iterations"),
        Cell::new("Accepted"),
        Cell::new("Chain"),
    ]);
    for i in 0..5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new(format!("{:.3}", result.score)).fg(Color::Cyan),
        Cell::new(result.best_iteration),
        Cell::new(result.iterations),
        Cell::new(format!("{:.1}%", result.acceptance_rate() * 100.0)),
        Cell::new(result.chain),
    ]);
    println!("\n{}", table);
}

pub fn print_demo_report(report: &DemoReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Identity score"),
        Cell::new(format!("{:.3}", report.baseline_score)),
    ]);
    table.add_row(vec![
        Cell::new("True key score"),
        Cell::new(format!("{:.3}", report.true_score)),
    ]);
    table.add_row(vec![
        Cell::new("Best score").fg(Color::Cyan),
        Cell::new(format!("{:.3}", report.result.score)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Letter accuracy"),
        Cell::new(format!("{:.1}%", report.letter_accuracy * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Bigram overlap").fg(Color::Green),
        Cell::new(format!("{:.1}%", report.bigram_overlap * 100.0)).fg(Color::Green),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

pub fn print_text(label: &str, text: &str) {
    println!("\n{}:\n{}", label, text.trim_end());
}
