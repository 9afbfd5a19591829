//! Dual-ring donut chart on a braille canvas.
//!
//! Inner ring: current allocation. Outer ring: goal allocation. Sectors
//! start at 12 o'clock and sweep clockwise, colored from the palette in
//! holding order so both rings agree on each asset's color.

use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Context, Points},
    },
};

use crate::allocation::AllocationEntry;

const CURRENT_INNER: f64 = 0.35;
const CURRENT_OUTER: f64 = 0.62;
const GOAL_INNER: f64 = 0.68;
const GOAL_OUTER: f64 = 1.0;

const ANGLE_STEP: f64 = 0.008;
const RADIAL_STEP: f64 = 0.02;

/// Render both rings into `area`.
pub fn render(frame: &mut Frame, area: Rect, entries: &[AllocationEntry], palette: &[Color]) {
    // Braille pixels are close to square when the terminal cell is 1:2,
    // so keeping the x span proportional to width/(2*height) keeps the
    // rings round.
    let y_span = 2.3;
    let x_span = y_span * f64::from(area.width) / (2.0 * f64::from(area.height.max(1)));

    let canvas = Canvas::default()
        .block(Block::default().title("Allocation").borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([-x_span / 2.0, x_span / 2.0])
        .y_bounds([-y_span / 2.0, y_span / 2.0])
        .paint(|ctx| {
            ring(ctx, entries, palette, CURRENT_INNER, CURRENT_OUTER, |e| {
                e.current_pct
            });
            ring(ctx, entries, palette, GOAL_INNER, GOAL_OUTER, |e| e.goal_pct);
        });

    frame.render_widget(canvas, area);
}

/// The color assigned to the entry at `index`.
pub fn sector_color(index: usize, palette: &[Color]) -> Color {
    if palette.is_empty() {
        return Color::White;
    }
    palette[index % palette.len()]
}

/// Draw one annular ring, one sector per entry.
fn ring(
    ctx: &mut Context,
    entries: &[AllocationEntry],
    palette: &[Color],
    inner: f64,
    outer: f64,
    pct: impl Fn(&AllocationEntry) -> f64,
) {
    let mut start = std::f64::consts::FRAC_PI_2;

    for (i, entry) in entries.iter().enumerate() {
        let frac = (pct(entry) / 100.0).max(0.0);
        let sweep = frac * std::f64::consts::TAU;
        if sweep <= 0.0 {
            continue;
        }

        let mut coords = Vec::new();
        let mut r = inner;
        while r <= outer {
            // Scale the angular step by radius so point density stays even.
            let step = ANGLE_STEP / r.max(0.1);
            let mut a = 0.0;
            while a < sweep {
                let angle = start - a;
                coords.push((r * angle.cos(), r * angle.sin()));
                a += step;
            }
            r += RADIAL_STEP;
        }

        ctx.draw(&Points {
            coords: &coords,
            color: sector_color(i, palette),
        });

        start -= sweep;
    }
}
