//! Text rendering for sweep summaries, single operating points and the gas table.
//!
//! Renderers return strings so the binary decides where they go and tests can
//! inspect them without capturing stdout.

use std::fmt::Write as _;

use thruster_lib::{
    GasSummary, GasTable, HallRecord, IonRecord, SpaceChargeLimit, ThrusterFamily,
};

use crate::terminal::{format_si, ColorPalette};

/// Render the per-gas summary printed after a family's sweep.
pub fn render_summary(
    family: ThrusterFamily,
    summaries: &[GasSummary],
    palette: &ColorPalette,
) -> String {
    let p = palette;
    let mut out = String::new();
    let rows: usize = summaries.iter().map(|s| s.points).sum();
    let _ = writeln!(
        out,
        "{}{} sweep{}: {} gases, {} points",
        p.white_bold,
        capitalize(&family.to_string()),
        p.reset,
        summaries.len(),
        rows
    );

    for summary in summaries {
        let _ = writeln!(
            out,
            "  {}{:<10}{} {}thrust{} {} mean / {} max  {}Isp{} {:.0} s  {}P{} {}  {}eta{} {:.3}",
            p.white_bold,
            summary.gas,
            p.reset,
            p.gray,
            p.reset,
            format_si(summary.mean_thrust_n, "N"),
            format_si(summary.max_thrust_n, "N"),
            p.gray,
            p.reset,
            summary.mean_isp_s,
            p.gray,
            p.reset,
            format_si(summary.mean_power_w, "W"),
            p.gray,
            p.reset,
            summary.mean_thrust_efficiency,
        );
        if let (Some(margin), Some(limited)) =
            (summary.min_perveance_margin, summary.space_charge_limited)
        {
            let _ = writeln!(
                out,
                "  {:<10} {}min margin{} {}{:.3}{}  {} of {} points space-charge limited",
                "",
                p.gray,
                p.reset,
                p.margin(margin),
                margin,
                p.reset,
                limited,
                summary.points
            );
        }
    }
    out
}

/// Render a single ion engine operating point with its space-charge limit.
pub fn render_ion_point(
    record: &IonRecord,
    limit: &SpaceChargeLimit,
    palette: &ColorPalette,
) -> String {
    let p = palette;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Ion engine{} {} at Va = {}, Ib = {}",
        p.white_bold,
        p.reset,
        record.gas,
        format_si(record.acceleration_voltage, "V"),
        format_si(record.beam_current, "A"),
    );
    push_common(
        &mut out,
        p,
        record.thrust_n,
        record.isp_s,
        record.power_w,
        record.thrust_efficiency,
    );
    push_line(
        &mut out,
        p,
        "J_limit",
        format!("{:.3} A/m²", limit.current_density),
    );
    push_line(&mut out, p, "I_limit", format_si(limit.current_limit, "A"));
    let _ = writeln!(
        out,
        "  {}{:<10}{} {}{:.3}{}{}",
        p.gray,
        "margin",
        p.reset,
        if record.beam_current > 0.0 {
            p.margin(record.perveance_margin)
        } else {
            p.gray
        },
        record.perveance_margin,
        p.reset,
        if record.is_space_charge_limited() {
            " (space-charge limited)"
        } else {
            ""
        }
    );
    out
}

/// Render a single Hall thruster operating point.
pub fn render_hall_point(record: &HallRecord, palette: &ColorPalette) -> String {
    let p = palette;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Hall thruster{} {} at Vd = {}, mdot = {}",
        p.white_bold,
        p.reset,
        record.gas,
        format_si(record.discharge_voltage, "V"),
        format_si(record.mass_flow, "kg/s"),
    );
    push_common(
        &mut out,
        p,
        record.thrust_n,
        record.isp_s,
        record.power_w,
        record.thrust_efficiency,
    );
    out
}

/// Render the gas table as an aligned listing.
pub fn render_gases(table: &GasTable) -> String {
    let gases = table.gases_sorted();
    if gases.is_empty() {
        return "No gases available.\n".to_string();
    }

    let mut out = String::new();
    let source = table
        .source_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    let _ = writeln!(out, "Available gases ({}, {}):", gases.len(), source);
    let _ = writeln!(
        out,
        "{:<12} {:>14} {:>14} {:>7}",
        "Name", "Mass (amu)", "Mass (kg)", "Charge"
    );
    for gas in gases {
        let _ = writeln!(
            out,
            "{:<12} {:>14.3} {:>14.4e} {:>7}",
            gas.name,
            gas.mass_kg / thruster_lib::constants::ATOMIC_MASS_UNIT,
            gas.mass_kg,
            gas.charge_state
        );
    }
    out
}

fn push_common(
    out: &mut String,
    p: &ColorPalette,
    thrust: f64,
    isp: f64,
    power: f64,
    efficiency: f64,
) {
    push_line(out, p, "thrust", format_si(thrust, "N"));
    push_line(out, p, "Isp", format!("{isp:.1} s"));
    push_line(out, p, "power", format_si(power, "W"));
    push_line(out, p, "eta", format!("{efficiency:.4}"));
}

fn push_line(out: &mut String, p: &ColorPalette, label: &str, value: String) {
    let _ = writeln!(
        out,
        "  {}{:<10}{} {}{}{}",
        p.gray, label, p.reset, p.cyan, value, p.reset
    );
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thruster_lib::{summarize, PerformanceTable};

    fn ion_record(margin: f64) -> IonRecord {
        IonRecord {
            gas: "Xenon".to_string(),
            acceleration_voltage: 2000.0,
            beam_current: 2.0,
            thrust_n: 0.0977503,
            isp_s: 5507.64,
            power_w: 4000.0,
            thrust_efficiency: 0.659955,
            perveance_margin: margin,
        }
    }

    #[test]
    fn summary_lists_each_gas_with_margin() {
        let mut argon = ion_record(2.0);
        argon.gas = "Argon".to_string();
        let table = PerformanceTable::Ion(vec![argon, ion_record(0.53), ion_record(0.8)]);
        let text = render_summary(
            ThrusterFamily::Ion,
            &summarize(&table),
            &ColorPalette::plain(),
        );

        assert!(text.starts_with("Ion engine sweep: 2 gases, 3 points"));
        assert!(text.contains("Argon"));
        assert!(text.contains("min margin 0.530"));
        assert!(text.contains("2 of 2 points space-charge limited"));
        assert!(text.contains("97.750 mN mean"));
    }

    #[test]
    fn ion_point_flags_space_charge_limit() {
        let limit = SpaceChargeLimit {
            current_density: 106.678,
            current_limit: 1.06678,
            beam_current: 2.0,
            margin: 0.533391,
        };
        let text = render_ion_point(&ion_record(0.533391), &limit, &ColorPalette::plain());
        assert!(text.contains("Va = 2.000 kV"));
        assert!(text.contains("thrust     97.750 mN"));
        assert!(text.contains("I_limit    1.067 A"));
        assert!(text.contains("0.533 (space-charge limited)"));
    }

    #[test]
    fn colored_margin_uses_red_when_limited() {
        let limit = SpaceChargeLimit {
            current_density: 1.0,
            current_limit: 1.0,
            beam_current: 2.0,
            margin: 0.5,
        };
        let text = render_ion_point(&ion_record(0.5), &limit, &ColorPalette::colored());
        assert!(text.contains("\x1b[31m0.500"));
    }

    #[test]
    fn hall_point_shows_mass_flow() {
        let record = HallRecord {
            gas: "Krypton".to_string(),
            discharge_voltage: 300.0,
            mass_flow: 5e-6,
            thrust_n: 0.05,
            isp_s: 1200.0,
            power_w: 1700.0,
            thrust_efficiency: 0.17,
        };
        let text = render_hall_point(&record, &ColorPalette::plain());
        assert!(text.starts_with("Hall thruster Krypton at Vd = 300.000 V, mdot = 5.000 µkg/s"));
        assert!(text.contains("Isp        1200.0 s"));
    }

    #[test]
    fn gas_listing_reports_source_and_masses() {
        let text = render_gases(&GasTable::builtin());
        assert!(text.starts_with("Available gases (4, built-in):"));
        assert!(text.contains("Xenon"));
        assert!(text.contains("131.293"));
    }
}
