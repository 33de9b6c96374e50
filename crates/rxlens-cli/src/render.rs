//! Terminal presentation: report markdown, the preview thumbnail, the banner.

use rxlens_core::{AnalysisOutcome, PreviewHandle};
use termimad::MadSkin;
use termimad::crossterm::style::{Color, Stylize};

/// Standing guidance shown under every report.
const DISCLAIMER: &str = "IMPORTANT DISCLAIMER: This tool is for informational purposes only. \
    It uses AI to assist in reading prescriptions but may make errors. Always verify details \
    with a licensed pharmacist or doctor.";

/// Skin used for every markdown block the tool prints.
pub fn report_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Yellow);
    skin
}

pub fn print_banner(skin: &MadSkin) {
    skin.print_text("# rxlens\n\nPrescription analysis in your language.\n");
}

/// Prints the analysis outcome as formatted markdown.
///
/// A real report gets the disclaimer footer; the fixed failure message
/// stands alone.
pub fn print_outcome(skin: &MadSkin, outcome: &AnalysisOutcome) {
    skin.print_text(outcome.text());
    if !outcome.is_failure() {
        println!();
        skin.print_text(&format!("*{DISCLAIMER}*"));
    }
}

/// Paints the preview thumbnail with half-block glyphs, two pixel rows per
/// terminal line.
pub fn print_preview(preview: &PreviewHandle) {
    let width = preview.width() as usize;
    let height = preview.height() as usize;
    let pixels = preview.pixels();

    let sample = |x: usize, y: usize| {
        let offset = (y * width + x) * 4;
        Color::Rgb {
            r: pixels[offset],
            g: pixels[offset + 1],
            b: pixels[offset + 2],
        }
    };

    for top in (0..height).step_by(2) {
        let mut line = String::new();
        for x in 0..width {
            let upper = sample(x, top);
            let lower = if top + 1 < height {
                sample(x, top + 1)
            } else {
                Color::Reset
            };
            line.push_str(&"▀".with(upper).on(lower).to_string());
        }
        println!("{line}");
    }
}
