use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::CvAnalysis;

/// Formula shown to students so they compute the efficiency themselves
pub const CE_FORMULA: &str = "CE (%) = (Smaller Charge ÷ Larger Charge) × 100";

/// Human-readable charge summary for one analysis.
///
/// By default the computed efficiency is withheld and only the formula is
/// shown; [`ChargeReport::with_efficiency`] adds it.
#[derive(Debug, Clone)]
pub struct ChargeReport<'a> {
    analysis: &'a CvAnalysis,
    source: Option<String>,
    show_efficiency: bool,
}

impl<'a> ChargeReport<'a> {
    /// Create a report for `analysis`
    pub fn new(analysis: &'a CvAnalysis) -> Self {
        Self {
            analysis,
            source: None,
            show_efficiency: false,
        }
    }

    /// Name the analyzed file in the report header
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Include the computed coulombic efficiency
    pub fn with_efficiency(mut self, show: bool) -> Self {
        self.show_efficiency = show;
        self
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            if let Some(source) = &self.source {
                output.push_str(&format!("{}: {}\n\n", style("File").bold(), source));
            }
            output.push_str(&format!(
                "{}: {} mC\n",
                style("Stripping Charge").bold(),
                style(format!("{:.4}", self.analysis.charge_ox)).red()
            ));
            output.push_str(&format!(
                "{}: {} mC\n\n",
                style("Plating Charge").bold(),
                style(format!("{:.4}", self.analysis.charge_red)).blue()
            ));
            output.push_str("Use the formula below to calculate Coulombic Efficiency:\n");
            output.push_str(&format!("{}\n", style(CE_FORMULA).cyan()));

            if self.show_efficiency {
                let ce = format!("{:.2} %", self.analysis.efficiency_pct);
                let ce = if (0.0..=100.0).contains(&self.analysis.efficiency_pct) {
                    style(ce).green()
                } else {
                    style(ce).yellow()
                };
                output.push_str(&format!("\n{}: {}\n", style("Computed CE").bold(), ce));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ChargeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            writeln!(f, "File: {}", source)?;
            writeln!(f)?;
        }
        writeln!(f, "Stripping Charge: {:.4} mC", self.analysis.charge_ox)?;
        writeln!(f, "Plating Charge: {:.4} mC", self.analysis.charge_red)?;
        writeln!(f)?;
        writeln!(f, "Use the formula below to calculate Coulombic Efficiency:")?;
        writeln!(f, "{}", CE_FORMULA)?;

        if self.show_efficiency {
            writeln!(f)?;
            writeln!(f, "Computed CE: {:.2} %", self.analysis.efficiency_pct)?;
        }

        Ok(())
    }
}
