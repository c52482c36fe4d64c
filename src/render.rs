use crossterm::style::Stylize;
use rayon::prelude::*;

use crate::grid::Snapshot;

// Cell colors for the raster renderer
const LIVE: [u8; 4] = [0, 200, 80, 255];
const DEAD: [u8; 4] = [16, 16, 16, 255];

fn render_bordered(snapshot: &Snapshot, live_cell: &str) -> String {
    let w = snapshot.width();
    let h = snapshot.height();
    let bar = "--".repeat(w);

    let mut out = String::with_capacity((h + 1) * (w + 1) * 4);
    out.push_str(&bar);
    for y in 0..h {
        out.push('\n');
        for x in 0..w {
            out.push('|');
            out.push_str(if snapshot.is_alive(x, y) { live_cell } else { " " });
        }
        out.push_str("|\n");
        out.push_str(&bar);
    }
    out
}

/// Bordered text rendering: a `--` bar per row, cells as `|*` or `| `.
pub fn render_plain(snapshot: &Snapshot) -> String {
    render_bordered(snapshot, "*")
}

/// Same layout as `render_plain`, live cells styled green for terminals.
pub fn render_ansi(snapshot: &Snapshot) -> String {
    let live = "*".green().to_string();
    render_bordered(snapshot, &live)
}

/// One RGBA pixel per cell, for PNG encoding in the HTTP driver.
pub fn render_rgba(snapshot: &Snapshot) -> Vec<u8> {
    let w = snapshot.width();
    let h = snapshot.height();
    let mut rgba = vec![0u8; w * h * 4];
    if w == 0 {
        return rgba;
    }

    rgba.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            let color = if snapshot.is_alive(x, y) { LIVE } else { DEAD };
            row[x * 4..x * 4 + 4].copy_from_slice(&color);
        }
    });

    rgba
}
