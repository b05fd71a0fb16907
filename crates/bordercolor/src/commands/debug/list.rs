use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

pub fn execute() {
    let windows = bordercolor_windows::enumerate_windows();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("Style"),
            Cell::new("Border"),
        ]);

    let mut count = 0;
    for window in windows.iter().filter(|w| w.is_visible()) {
        let title = window.title();
        if title.is_empty() {
            continue;
        }

        let style = window.style().unwrap_or_default();
        table.add_row(vec![
            Cell::new(format!("0x{:X}", window.raw())),
            Cell::new(window.process_id()).set_alignment(CellAlignment::Right),
            Cell::new(title),
            Cell::new(window.class()),
            Cell::new(format!("0x{style:08X}")),
            Cell::new(if window.is_eligible() { "yes" } else { "no" }),
        ]);
        count += 1;
    }

    println!("{table}");
    println!("\n{count} windows found");
}
