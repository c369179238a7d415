//! The roll engine: drives the generation loop, applies the rounding
//! transform and the filter chain, writes accepted values, statistics and
//! the flags dump, and returns a run report.

use std::io::Write;
use std::time::Instant;

use tracing::{info, warn};

use rollcast_core::{FilterSet, RunConfig, format_fixed, stats};

use crate::errors::GenerateError;
use crate::model::RollReport;
use crate::sampler::Sampler;

/// Entry point for one configured run.
#[derive(Debug, Clone)]
pub struct RollEngine {
    config: RunConfig,
}

impl RollEngine {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Runs the generation loop against `out` and returns the report.
    ///
    /// In uncapped mode the loop position advances once per draw, so the
    /// accepted count can fall short of the request. In forced mode it
    /// advances only on acceptance and the loop runs until the request is
    /// met; an unsatisfiable filter chain makes that loop non-terminating,
    /// which is the documented trade-off of `--numbers-force`.
    pub fn run(&self, out: &mut dyn Write) -> Result<RollReport, GenerateError> {
        let config = &self.config;
        let start = Instant::now();

        info!(
            requested = config.number,
            generator = %config.generator,
            lbound = config.lbound,
            ubound = config.ubound,
            forced = config.numbers_force,
            seed = config.seed,
            "roll started"
        );

        let mut sampler = Sampler::new(config)?;
        let filters = FilterSet::from_config(config);
        let mut report = RollReport {
            requested: config.number,
            ..RollReport::default()
        };
        let mut accepted: Vec<f64> = Vec::new();

        // `position` is the loop counter from the mode contract; the
        // attempt tally doubles as the `--list` label.
        let mut position: u64 = 1;
        while position <= config.number {
            if !config.numbers_force {
                position += 1;
            }
            report.attempts += 1;

            let mut value = sampler.draw();
            if let Some(mode) = config.round {
                value = mode.apply(value);
            }

            // One rendering per candidate, shared by the string filters
            // and the printed output.
            let rendered = format_fixed(value, config.precision);
            if let Some(rejection) = filters.evaluate(value, &rendered, &accepted) {
                report.record_rejection(rejection.as_str());
                continue;
            }

            accepted.push(value);
            if !config.quiet {
                if config.list && config.numbers_force {
                    write!(out, "{position}.\t")?;
                }
                if config.list {
                    write!(out, "{}.\t", report.attempts)?;
                }
                write!(out, "{rendered}{}", config.delim)?;
            }
            if config.numbers_force {
                position += 1;
            }
        }
        report.accepted = accepted.len() as u64;

        if config.delim != "\n" && !config.quiet {
            writeln!(out)?;
        }

        self.write_stats(out, &accepted)?;

        if config.flags {
            writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            attempts = report.attempts,
            accepted = report.accepted,
            rejected = report.rejected(),
            duration_ms = report.duration_ms,
            "roll finished"
        );
        Ok(report)
    }

    fn write_stats(&self, out: &mut dyn Write, accepted: &[f64]) -> Result<(), GenerateError> {
        let config = &self.config;
        if !config.stats.any() {
            return Ok(());
        }
        if accepted.is_empty() {
            warn!("no values accepted; statistics skipped");
            return Ok(());
        }

        // The separator belongs to the value block, so quiet suppresses
        // it while the statistic lines themselves still print.
        if !config.quiet {
            writeln!(out)?;
        }

        let precision = config.precision;
        if (config.stats.min || config.stats.max)
            && let Some((min, max)) = stats::min_max(accepted)
        {
            if config.stats.min {
                writeln!(out, "min: {}", format_fixed(min, precision))?;
            }
            if config.stats.max {
                writeln!(out, "max: {}", format_fixed(max, precision))?;
            }
        }
        if config.stats.median
            && let Some(median) = stats::median(accepted)
        {
            writeln!(out, "median: {}", format_fixed(median, precision))?;
        }
        if config.stats.avg
            && let Some(mean) = stats::mean(accepted)
        {
            writeln!(out, "avg: {}", format_fixed(mean, precision))?;
        }
        if config.stats.var
            && let Some(variance) = stats::variance(accepted)
        {
            writeln!(out, "var: {}", format_fixed(variance, precision))?;
        }
        if config.stats.std
            && let Some(std_dev) = stats::std_dev(accepted)
        {
            writeln!(out, "std: {}", format_fixed(std_dev, precision))?;
        }
        if config.stats.coef
            && let Some(coef) = stats::coef_variation(accepted)
        {
            writeln!(out, "coef: {}", format_fixed(coef, precision))?;
        }
        Ok(())
    }
}
