//! Console summaries.

use gingerbread_house::{Dimensions, HouseReport};
use std::error::Error;
use std::fmt::Write;
use std::path::Path;

const RULE_WIDTH: usize = 60;

const ASSEMBLY_TIPS: [&str; 5] = [
    "Print walls flat on the print bed",
    "Tabs on front/back walls slide into slots on side walls",
    "Roof panels rest on the peaked edges of the side walls",
    "The chimney sits on one of the roof panels",
    "Interlocking tabs allow assembly without glue",
];

fn rule(out: &mut String) {
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
}

/// Per-part results, assembly tips and any failures with their causes.
pub fn house_summary(dims: &Dimensions, report: &HouseReport, out_dir: &Path) -> String {
    let mut out = String::new();
    rule(&mut out);
    let _ = writeln!(out, "Gingerbread House");
    rule(&mut out);
    let _ = writeln!(
        out,
        "House: {:.2} x {:.2} x {:.2} mm, walls {:.2} mm thick",
        dims.house_width(),
        dims.house_depth(),
        dims.gable_height(),
        dims.wall_thickness()
    );
    let _ = writeln!(out);

    for (i, part) in report.iter().enumerate() {
        let n = i + 1;
        match &part.result {
            Ok(solid) => {
                let size = solid.bounding_box().size();
                let _ = writeln!(
                    out,
                    "  {n}. {:<11} {:>7.2} x {:>6.2} x {:>6.2} mm  {:>10.1} mm³  {:>6} tris  {}",
                    part.kind.label(),
                    size.x,
                    size.y,
                    size.z,
                    solid.volume(),
                    solid.triangle_count(),
                    out_dir.join(part.kind.file_name()).display()
                );
                let _ = writeln!(out, "     {}", part.kind.description());
            }
            Err(err) => {
                let _ = writeln!(out, "  {n}. {:<11} FAILED: {}", part.kind.label(), error_chain(err));
            }
        }
    }

    let built = report.successes().count();
    let _ = writeln!(out);
    let _ = writeln!(out, "{built} of {} parts written", report.parts.len());
    if report.is_complete() {
        let _ = writeln!(out, "\nAssembly tips:");
        for tip in ASSEMBLY_TIPS {
            let _ = writeln!(out, "  - {tip}");
        }
    }
    out
}

/// The validated dimension set, one value per line.
pub fn dimension_table(dims: &Dimensions) -> String {
    let door = dims.door();
    let window = dims.window();
    let chimney = dims.chimney();
    let tab = dims.tab();

    let rows = [
        ("wall thickness", dims.wall_thickness()),
        ("house width", dims.house_width()),
        ("house depth", dims.house_depth()),
        ("wall height", dims.wall_height()),
        ("peak height", dims.peak_height()),
        ("door width", door.width),
        ("door height", door.height),
        ("door offset", door.offset),
        ("window width", window.width),
        ("window height", window.height),
        ("window offset", window.offset),
        ("roof overhang", dims.roof_overhang()),
        ("roof thickness", dims.roof_thickness()),
        ("roof length", dims.roof_length()),
        ("roof width", dims.roof_width()),
        ("chimney width", chimney.width),
        ("chimney depth", chimney.depth),
        ("chimney height", chimney.height),
        ("chimney wall", dims.chimney_wall()),
        ("tab width", tab.width),
        ("tab depth", tab.depth),
        ("tab height", tab.height),
        ("tab tolerance", tab.tolerance),
        ("cut margin", dims.cut_margin()),
    ];

    let mut out = String::new();
    for (name, value) in rows {
        let _ = writeln!(out, "{name:<16} {value:>9.3} mm");
    }
    out
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            let _ = write!(message, ": {cause_text}");
        }
        source = cause.source();
    }
    message
}
