use std::fmt::Write;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::state::{TrainOutcome, TrainState};

/// One evaluated example: what went in, what came out, what was wanted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
    pub target: Option<Vec<f64>>,
}

/// Summary of a run for human comparison of outputs against targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub iterations: usize,
    pub total_error: Option<f64>,
    pub state: Option<TrainState>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Runs every input through `network` with its current weights.
    ///
    /// `targets`, when given, must be parallel to `inputs`.
    pub fn evaluate(
        network: &Network,
        inputs: &[Vec<f64>],
        targets: Option<&[Vec<f64>]>,
        outcome: Option<&TrainOutcome>,
    ) -> Result<Report> {
        let outputs = network.run_all(inputs)?;
        let rows = inputs
            .iter()
            .zip(outputs)
            .enumerate()
            .map(|(i, (input, output))| ReportRow {
                input: input.clone(),
                output,
                target: targets.and_then(|t| t.get(i)).cloned(),
            })
            .collect();

        Ok(Report {
            iterations: outcome.map_or(0, |o| o.iterations),
            total_error: outcome.map(|o| o.total_error),
            state: outcome.map(|o| o.state),
            rows,
        })
    }

    /// Renders the report with every number fixed to `precision` decimals.
    pub fn render(&self, precision: usize) -> String {
        let mut out = String::new();

        if let Some(state) = self.state {
            let _ = writeln!(out, "Training outcome: {state}");
            let _ = writeln!(out, "Iterations reached: {}", self.iterations);
        }
        if let Some(error) = self.total_error {
            let _ = writeln!(out, "Error reached: {error:.precision$}");
        }
        let _ = writeln!(out, "Truth table:");

        for row in &self.rows {
            for (k, a) in row.input.iter().enumerate() {
                let _ = write!(out, "\ta{k} = {a:.precision$}");
            }
            let _ = write!(out, "\tf = {}", format_vector(&row.output, precision));
            if let Some(target) = &row.target {
                let _ = write!(out, "\tt = {}", format_vector(target, precision));
            }
            out.push('\n');
        }

        out
    }
}

fn format_vector(values: &[f64], precision: usize) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.precision$}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            iterations: 1234,
            total_error: Some(0.000987654),
            state: Some(TrainState::Converged),
            rows: vec![
                ReportRow {
                    input: vec![0.0, 1.0],
                    output: vec![0.976543],
                    target: Some(vec![1.0]),
                },
                ReportRow {
                    input: vec![1.0, 1.0],
                    output: vec![0.02, 0.5],
                    target: None,
                },
            ],
        }
    }

    #[test]
    fn renders_fixed_precision_rows() {
        let text = sample().render(4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Training outcome: converged");
        assert_eq!(lines[1], "Iterations reached: 1234");
        assert_eq!(lines[2], "Error reached: 0.0010");
        assert_eq!(lines[3], "Truth table:");
        assert_eq!(lines[4], "\ta0 = 0.0000\ta1 = 1.0000\tf = [0.9765]\tt = [1.0000]");
        assert_eq!(lines[5], "\ta0 = 1.0000\ta1 = 1.0000\tf = [0.0200, 0.5000]");
    }

    #[test]
    fn run_only_report_has_no_training_header() {
        let report = Report {
            iterations: 0,
            total_error: None,
            state: None,
            rows: vec![],
        };
        assert_eq!(report.render(2), "Truth table:\n");
    }
}
