use crate::config::OutputFormat;
use crate::models::{GradientStep, Rgb};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub const BANNER: &str = "Gradient Code Generator";
pub const INSTRUCTIONS: &str = "Copy and paste this code as the gradient animation value:";

/// `{ 0xRRGGBB, 0xRRGGBB, ... }`
pub fn render_array(colours: &[Rgb]) -> String {
    let values = colours
        .iter()
        .map(Rgb::to_hex)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {} }}", values)
}

pub fn render_json(colours: &[Rgb]) -> serde_json::Result<String> {
    let steps: Vec<GradientStep> = colours.iter().enumerate().map(GradientStep::from).collect();
    serde_json::to_string_pretty(&steps)
}

pub fn render(colours: &[Rgb], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Array => render_array(colours),
        OutputFormat::Json => render_json(colours)?,
    })
}

/// Truecolour block for terminals that support 24-bit escapes.
pub fn swatch(colour: &Rgb) -> String {
    format!(
        "\x1b[38;2;{};{};{}m██\x1b[0m",
        colour.red, colour.green, colour.blue
    )
}

pub fn preview_table(colours: &[Rgb]) -> Table {
    let header = |name: &str| {
        Cell::new(name)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center)
    };

    let mut table = Table::new();
    table
        .set_header(vec![
            header("Step"),
            header("Hex"),
            header("R"),
            header("G"),
            header("B"),
            Cell::new("Colour").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for (i, colour) in colours.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Center),
            Cell::new(colour.to_hex()),
            Cell::new(colour.red).set_alignment(CellAlignment::Right),
            Cell::new(colour.green).set_alignment(CellAlignment::Right),
            Cell::new(colour.blue).set_alignment(CellAlignment::Right),
            Cell::new(swatch(colour)),
        ]);
    }

    table
}

pub fn print_preview(colours: &[Rgb]) {
    let bar: String = colours.iter().map(swatch).collect();
    println!("Preview:\n{}\n\n{}\n", bar, preview_table(colours));
}
