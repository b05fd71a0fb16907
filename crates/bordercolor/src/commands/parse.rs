use bordercolor_core::Color;

pub fn execute(hex: &str) {
    match Color::from_hex(hex) {
        Some(color) => println!("{color} -> 0x{:08X}", color.to_colorref()),
        None => {
            let fallback = Color::parse(None);
            println!(
                "invalid color {hex:?}, falls back to {fallback} -> 0x{:08X}",
                fallback.to_colorref()
            );
        }
    }
}
