// src/export/svg.rs

use crate::config::Config;
use crate::core::grid::axis::{LANE_LABELS, hour_lines, quarter_ticks};
use crate::core::grid::{GridScale, LANE_COUNT};
use crate::core::logic::DailySheet;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const BAR_OPACITY: f64 = 0.7;

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Grid area of one sheet on the configured canvas.
pub fn sheet_scale(cfg: &Config) -> GridScale {
    GridScale::with_margins(
        cfg.canvas_width,
        cfg.canvas_height,
        cfg.margin_left,
        cfg.margin_top,
        cfg.margin_right,
        cfg.margin_bottom,
    )
}

/// SVG group for one day, drawn at the canvas origin.
pub fn render_sheet(sheet: &DailySheet, cfg: &Config) -> String {
    let scale = sheet_scale(cfg);
    let (left, top) = (scale.origin_x, scale.origin_y);
    let (right, bottom) = (left + scale.width, top + scale.height);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<text x="{left}" y="15" font-size="12" font-weight="bold">{}</text>"#,
        escape_xml(&sheet.group.date_str())
    );

    // Frame
    let _ = writeln!(
        out,
        r##"<rect x="{left}" y="{top}" width="{}" height="{}" fill="none" stroke="#000" stroke-width="2"/>"##,
        scale.width, scale.height
    );

    // Lane separators
    for lane in 1..=LANE_COUNT {
        let y = scale.y_for_lane(lane);
        let _ = writeln!(
            out,
            r##"<line x1="{left}" y1="{y}" x2="{right}" y2="{y}" stroke="#000" stroke-width="1"/>"##
        );
    }

    if cfg.show_quarter_ticks {
        for slot in quarter_ticks() {
            let x = scale.x_for_slot(slot as f64);
            let _ = writeln!(
                out,
                r##"<line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="#ccc" stroke-width="0.5"/>"##
            );
        }
    }

    // Hour lines and labels
    for line in hour_lines() {
        let x = scale.x_for_slot(line.slot as f64);
        let _ = writeln!(
            out,
            r##"<line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="#000" stroke-width="1"/>"##
        );
        let _ = writeln!(
            out,
            r#"<text x="{x}" y="{}" text-anchor="middle" font-size="10">{}</text>"#,
            top - 5.0,
            line.label
        );
    }

    // Lane labels
    for (lane, label) in LANE_LABELS.iter().enumerate() {
        let y = scale.y_for_lane(lane) + scale.lane_height() / 2.0;
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{y}" text-anchor="end" dominant-baseline="middle" font-size="12" font-weight="bold">{label}</text>"#,
            left - 10.0
        );
    }

    // Bars, in encounter order
    for rect in &sheet.layout.rectangles {
        let r = scale.rect(rect);
        let remarks = sheet
            .group
            .entries
            .get(rect.entry_index)
            .map(|e| format!("{} {}: {}", e.time_range(), e.status.ds_as_str(), e.remarks))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="{BAR_OPACITY}"><title>{}</title></rect>"#,
            r.x,
            r.y,
            r.width,
            r.height,
            rect.status.color_hex(),
            escape_xml(&remarks)
        );
    }

    out
}

/// All sheets stacked vertically in one document.
pub fn render_document(sheets: &[DailySheet], cfg: &Config) -> String {
    let w = cfg.canvas_width;
    let h = cfg.canvas_height * sheets.len().max(1) as f64;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    for (i, sheet) in sheets.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<g transform="translate(0,{})">"#,
            cfg.canvas_height * i as f64
        );
        out.push_str(&render_sheet(sheet, cfg));
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");

    out
}

pub(crate) fn export_svg(sheets: &[DailySheet], cfg: &Config, path: &Path) -> AppResult<()> {
    info(format!("Exporting to SVG: {}", path.display()));

    fs::write(path, render_document(sheets, cfg))?;

    notify_export_success("SVG", path);
    Ok(())
}
