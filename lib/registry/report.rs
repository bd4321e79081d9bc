use std::fmt::Write as _;

use super::types::Segment;

pub const REPORT_TITLE: &str = "INFORME DE CARRILES BICI - Bahía de Cádiz";
pub const REPORT_UNDERLINE: &str = "===========================================";

/// Formats a length in km as shortest round-trip decimal that always keeps a fractional part
/// (`3.0`, not `3`).
///
/// Magnitudes from `1e16` up and below `1e-4` use exponent form with a `.0` mantissa kept
/// (`1.0e16`, `1.0e-7`). Lengths are finite, but a total can overflow; it renders as `inf`.
pub fn format_km(value: f64) -> String {
    let rendered = format!("{value:?}");
    if !value.is_finite() || rendered.contains('.') {
        return rendered;
    }

    match rendered.split_once('e') {
        Some((mantissa, exponent)) => format!("{mantissa}.0e{exponent}"),
        None => format!("{rendered}.0"),
    }
}

/// Builds the report text. Every line, the total included, ends with `\n`.
pub(crate) fn render_report(segments: &[Segment], total_km: f64) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(REPORT_UNDERLINE);
    out.push('\n');

    for segment in segments {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "- {} ({} km): {}",
            segment.name,
            format_km(segment.length_km),
            segment.status
        );
    }

    let _ = writeln!(out, "Longitud total: {} km", format_km(total_km));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SegmentRegistry;

    #[test]
    fn km_values_keep_a_fractional_part() {
        assert_eq!(format_km(0.0), "0.0");
        assert_eq!(format_km(3.0), "3.0");
        assert_eq!(format_km(4.2), "4.2");
        assert_eq!(format_km(4.2 + 3.0), "7.2");
    }

    #[test]
    fn exponent_form_keeps_a_fractional_mantissa() {
        assert_eq!(format_km(1e16), "1.0e16");
        assert_eq!(format_km(1e-7), "1.0e-7");
        assert_eq!(format_km(2.5e20), "2.5e20");
    }

    #[test]
    fn extreme_lengths_render_with_fraction_and_overflow_as_inf() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Big", 1e16).expect("failed to add Big");
        registry.add_segment("Tiny", 1e-7).expect("failed to add Tiny");

        let report = registry.generate_report();
        assert!(report.contains("- Big (1.0e16 km): En servicio\n"));
        assert!(report.contains("- Tiny (1.0e-7 km): En servicio\n"));
        assert!(report.ends_with("Longitud total: 1.0e16 km\n"));

        let mut overflowing = SegmentRegistry::new();
        overflowing.add_segment("A", f64::MAX).expect("failed to add A");
        overflowing.add_segment("B", f64::MAX).expect("failed to add B");

        assert_eq!(format_km(overflowing.total_length()), "inf");
        assert!(overflowing
            .generate_report()
            .ends_with("Longitud total: inf km\n"));
    }

    #[test]
    fn empty_registry_report_has_header_and_zero_total() {
        let report = SegmentRegistry::new().generate_report();

        assert_eq!(
            report,
            format!("{REPORT_TITLE}\n{REPORT_UNDERLINE}\nLongitud total: 0.0 km\n")
        );
    }

    #[test]
    fn report_lists_segments_in_name_order() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Playa Victoria", 3.0).expect("failed to add");
        registry.add_segment("Paseo Marítimo", 4.2).expect("failed to add");
        registry
            .update_status("Paseo Marítimo", "Cerrado por obras")
            .expect("failed to update status");

        let report = registry.generate_report();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                REPORT_TITLE,
                REPORT_UNDERLINE,
                "- Paseo Marítimo (4.2 km): Cerrado por obras",
                "- Playa Victoria (3.0 km): En servicio",
                "Longitud total: 7.2 km",
            ]
        );
        assert!(report.ends_with('\n'));
    }
}
