//! Per-gas aggregate statistics over a sweep table.

use serde::Serialize;

use crate::device::ThrusterFamily;
use crate::record::PerformanceTable;

/// Aggregates for one gas of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasSummary {
    pub gas: String,
    pub points: usize,
    pub mean_thrust_n: f64,
    pub max_thrust_n: f64,
    pub mean_isp_s: f64,
    pub mean_power_w: f64,
    pub mean_thrust_efficiency: f64,
    /// Smallest perveance margin among points drawing beam current (ion tables only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_perveance_margin: Option<f64>,
    /// Number of space-charge-limited points (ion tables only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_charge_limited: Option<usize>,
}

struct Row<'a> {
    gas: &'a str,
    thrust: f64,
    isp: f64,
    power: f64,
    efficiency: f64,
    /// Perveance margin of an ion point drawing beam current.
    margin: Option<f64>,
    limited: bool,
}

/// Summarize a table per gas, in the order gases first appear.
pub fn summarize(table: &PerformanceTable) -> Vec<GasSummary> {
    let rows: Vec<Row<'_>> = match table {
        PerformanceTable::Ion(records) => records
            .iter()
            .map(|r| Row {
                gas: &r.gas,
                thrust: r.thrust_n,
                isp: r.isp_s,
                power: r.power_w,
                efficiency: r.thrust_efficiency,
                margin: (r.beam_current > 0.0).then_some(r.perveance_margin),
                limited: r.is_space_charge_limited(),
            })
            .collect(),
        PerformanceTable::Hall(records) => records
            .iter()
            .map(|r| Row {
                gas: &r.gas,
                thrust: r.thrust_n,
                isp: r.isp_s,
                power: r.power_w,
                efficiency: r.thrust_efficiency,
                margin: None,
                limited: false,
            })
            .collect(),
    };

    let is_ion = table.family() == ThrusterFamily::Ion;
    let mut summaries: Vec<GasSummary> = Vec::new();
    for chunk in rows.chunk_by(|a, b| a.gas == b.gas) {
        summaries.push(summarize_gas(chunk, is_ion));
    }
    summaries
}

fn summarize_gas(rows: &[Row<'_>], is_ion: bool) -> GasSummary {
    let count = rows.len() as f64;
    let mean = |value: fn(&Row<'_>) -> f64| rows.iter().map(value).sum::<f64>() / count;

    let min_margin = rows.iter().filter_map(|r| r.margin).reduce(f64::min);
    let limited = is_ion.then(|| rows.iter().filter(|r| r.limited).count());

    GasSummary {
        gas: rows[0].gas.to_string(),
        points: rows.len(),
        mean_thrust_n: mean(|r| r.thrust),
        max_thrust_n: rows.iter().map(|r| r.thrust).fold(0.0, f64::max),
        mean_isp_s: mean(|r| r.isp),
        mean_power_w: mean(|r| r.power),
        mean_thrust_efficiency: mean(|r| r.efficiency),
        min_perveance_margin: min_margin,
        space_charge_limited: limited,
    }
}
