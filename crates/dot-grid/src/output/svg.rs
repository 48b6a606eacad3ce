//! SVG serialization of a [`DotImage`].

use std::fmt::Write;

use super::DotImage;

/// Format a coordinate with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub(crate) fn write_svg(image: &DotImage) -> String {
    let style = image.style();
    let (w, h) = (image.width(), image.height());
    let mut svg = String::with_capacity(128 + image.dots().len() * 64);

    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{w}" height="{h}" fill="{}"/>"#,
        style.background
    );
    let _ = writeln!(
        svg,
        r#"  <g stroke="{}" stroke-opacity="{}" stroke-width="{}">"#,
        style.stroke,
        num(style.stroke_opacity as f64),
        num(style.stroke_width as f64)
    );
    for dot in image.dots() {
        let (cx, cy) = dot.center();
        let _ = writeln!(
            svg,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(cx),
            num(cy),
            num(dot.radius()),
            dot.color
        );
    }
    svg.push_str("  </g>\n</svg>\n");
    svg
}
