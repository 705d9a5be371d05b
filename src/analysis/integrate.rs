use super::AnalysisError;

/// Integrate `y` over `x` with the trapezoidal rule.
///
/// Pairs beyond the shorter slice are ignored; fewer than two points give 0.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    y.windows(2)
        .zip(x.windows(2))
        .map(|(y, x)| (x[1] - x[0]) * (y[0] + y[1]) / 2.0)
        .sum()
}

/// Coulombic efficiency (%) from signed oxidation and reduction charges.
///
/// Computed as `|min(ox, red)| / |max(ox, red)| * 100` on the signed values.
/// For the usual `red <= 0 <= ox` this is `|red| / ox * 100`, which exceeds
/// 100 when more charge was plated than stripped.
pub fn coulombic_efficiency(charge_ox: f64, charge_red: f64) -> Result<f64, AnalysisError> {
    let smaller = charge_ox.min(charge_red);
    let larger = charge_ox.max(charge_red);

    if larger == 0.0 {
        return Err(AnalysisError::ZeroCharge {
            charge_ox,
            charge_red,
        });
    }

    Ok(smaller.abs() / larger.abs() * 100.0)
}
