use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{api::OptimizationResult, core::OptimizationRequest};

pub fn build_forecast_table(request: &OptimizationRequest, result: &OptimizationResult) -> Table {
    let output = &result.output;
    let saved = output.metric_value_immediate_execution - output.metric_value_optimal_execution;

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.add_row(vec![
        Cell::new("Zone").add_attribute(Attribute::Dim),
        Cell::new(&output.zone_key),
    ]);
    table.add_row(vec![
        Cell::new("Window").add_attribute(Attribute::Dim),
        Cell::new(format!(
            "{} → {}",
            request.start_window.format("%b %d %H:%M"),
            request.end_window.format("%b %d %H:%M"),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Reserved").add_attribute(Attribute::Dim),
        Cell::new(format!("{} h", request.duration_hours)),
    ]);
    table.add_row(vec![
        Cell::new("Recommended start").add_attribute(Attribute::Dim),
        Cell::new(result.recommended_start.format("%b %d %H:%M"))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(format!("Now, {}", output.metric_unit)).add_attribute(Attribute::Dim),
        Cell::new(output.metric_value_immediate_execution)
            .set_alignment(CellAlignment::Right)
            .fg(if saved > 0.0 { Color::Red } else { Color::Green }),
    ]);
    table.add_row(vec![
        Cell::new(format!("At the optimum, {}", output.metric_unit)).add_attribute(Attribute::Dim),
        Cell::new(output.metric_value_optimal_execution)
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new(format!("Saved, {}", output.metric_unit)).add_attribute(Attribute::Dim),
        Cell::new(saved)
            .set_alignment(CellAlignment::Right)
            .fg(if saved > 0.0 { Color::Green } else { Color::DarkYellow }),
    ]);
    table
}
