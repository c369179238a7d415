use serde::Serialize;

use crate::engines::EngineKind;
use crate::error::ConfigError;
use crate::format::{self, MAX_PRECISION};

/// Rounding transform applied to every raw value before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    /// Round up to the nearest integer.
    Ceil,
    /// Round down to the nearest integer.
    Floor,
    /// Round to the nearest integer, ties away from zero.
    Round,
    /// Drop the fractional part.
    Trunc,
}

impl RoundMode {
    /// Applies the transform to one value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundMode::Ceil => value.ceil(),
            RoundMode::Floor => value.floor(),
            RoundMode::Round => value.round(),
            RoundMode::Trunc => value.trunc(),
        }
    }

    fn flag(self) -> &'static str {
        match self {
            RoundMode::Ceil => "--ceil",
            RoundMode::Floor => "--floor",
            RoundMode::Round => "--round",
            RoundMode::Trunc => "--trunc",
        }
    }
}

/// Which statistics the reporter prints. Field order is print order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatSet {
    pub min: bool,
    pub max: bool,
    pub median: bool,
    pub avg: bool,
    pub var: bool,
    pub std: bool,
    pub coef: bool,
}

impl StatSet {
    /// Every statistic selected, as requested by `--stat-all`.
    pub fn all() -> StatSet {
        StatSet {
            min: true,
            max: true,
            median: true,
            avg: true,
            var: true,
            std: true,
            coef: true,
        }
    }

    /// True when at least one statistic is selected.
    pub fn any(&self) -> bool {
        self.min || self.max || self.median || self.avg || self.var || self.std || self.coef
    }
}

/// Raw command-line options, one field per flag, before validation.
///
/// `exclude`/`include` distinguish a flag given with no values
/// (`Some(empty)`) from an absent flag (`None`); the former is a
/// validation error for `exclude`.
#[derive(Debug, Clone)]
pub struct RollOptions {
    pub number: i64,
    pub lbound: f64,
    pub ubound: f64,
    pub ceil: bool,
    pub floor: bool,
    pub round: bool,
    pub trunc: bool,
    pub precision: i64,
    pub exclude: Option<Vec<f64>>,
    pub include: Option<Vec<f64>>,
    pub norepeat: bool,
    pub prefix: Vec<String>,
    pub suffix: Vec<String>,
    pub contains: Vec<String>,
    pub list: bool,
    pub delim: String,
    pub quiet: bool,
    pub numbers_force: bool,
    pub generator: String,
    pub seed: Option<u64>,
    pub flags: bool,
    pub stat_all: bool,
    pub stat_min: bool,
    pub stat_max: bool,
    pub stat_median: bool,
    pub stat_avg: bool,
    pub stat_var: bool,
    pub stat_std: bool,
    pub stat_coef: bool,
}

impl Default for RollOptions {
    fn default() -> Self {
        RollOptions {
            number: 1,
            lbound: 0.0,
            ubound: 1.0,
            ceil: false,
            floor: false,
            round: false,
            trunc: false,
            precision: MAX_PRECISION as i64,
            exclude: None,
            include: None,
            norepeat: false,
            prefix: Vec::new(),
            suffix: Vec::new(),
            contains: Vec::new(),
            list: false,
            delim: "\n".to_string(),
            quiet: false,
            numbers_force: false,
            generator: EngineKind::Std.name().to_string(),
            seed: None,
            flags: false,
            stat_all: false,
            stat_min: false,
            stat_max: false,
            stat_median: false,
            stat_avg: false,
            stat_var: false,
            stat_std: false,
            stat_coef: false,
        }
    }
}

/// Resolved, validated run configuration.
///
/// Immutable once built; this is exactly what `--flags` dumps.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub number: u64,
    pub lbound: f64,
    pub ubound: f64,
    pub round: Option<RoundMode>,
    pub precision: u32,
    pub exclude: Vec<f64>,
    pub include: Vec<f64>,
    pub norepeat: bool,
    pub prefix: Vec<String>,
    pub suffix: Vec<String>,
    pub contains: Vec<String>,
    pub list: bool,
    pub delim: String,
    pub quiet: bool,
    pub numbers_force: bool,
    pub generator: EngineKind,
    pub seed: Option<u64>,
    pub flags: bool,
    pub stats: StatSet,
}

impl RunConfig {
    /// Validates raw options into a run configuration.
    ///
    /// Checks run in a fixed order and the first failure wins; each
    /// failure is a distinct [`ConfigError`] with its own exit code.
    pub fn resolve(options: RollOptions) -> Result<RunConfig, ConfigError> {
        if options.number < 1 {
            return Err(ConfigError::CountNotPositive(options.number));
        }

        let mut modes = Vec::new();
        if options.ceil {
            modes.push(RoundMode::Ceil);
        }
        if options.floor {
            modes.push(RoundMode::Floor);
        }
        if options.round {
            modes.push(RoundMode::Round);
        }
        if options.trunc {
            modes.push(RoundMode::Trunc);
        }
        if modes.len() > 1 {
            let flags: Vec<&str> = modes.iter().map(|mode| mode.flag()).collect();
            return Err(ConfigError::RoundingConflict(flags.join(", ")));
        }
        let round = modes.first().copied();

        // A rounding mode renders integers only, so it forces precision 0
        // and the requested precision never reaches the range checks.
        let precision = if round.is_some() { 0 } else { options.precision };
        if precision > i64::from(MAX_PRECISION) {
            return Err(ConfigError::PrecisionTooHigh {
                got: precision,
                max: MAX_PRECISION,
            });
        }
        if precision < 0 {
            return Err(ConfigError::PrecisionNegative(precision));
        }
        let precision = precision as u32;

        let exclude = match options.exclude {
            Some(values) if values.is_empty() => return Err(ConfigError::ExcludeEmpty),
            Some(values) => values,
            None => Vec::new(),
        };
        let include = options.include.unwrap_or_default();

        for entry in options
            .prefix
            .iter()
            .chain(&options.suffix)
            .chain(&options.contains)
        {
            if !format::is_numeric_fragment(entry) {
                return Err(ConfigError::FilterNotNumeric(entry.clone()));
            }
        }

        let generator = EngineKind::from_name(&options.generator)
            .ok_or_else(|| ConfigError::UnknownEngine(options.generator.clone()))?;

        if options.lbound > options.ubound {
            return Err(ConfigError::BoundsInverted {
                lbound: options.lbound,
                ubound: options.ubound,
            });
        }

        let stats = if options.stat_all {
            StatSet::all()
        } else {
            StatSet {
                min: options.stat_min,
                max: options.stat_max,
                median: options.stat_median,
                avg: options.stat_avg,
                var: options.stat_var,
                std: options.stat_std,
                coef: options.stat_coef,
            }
        };

        Ok(RunConfig {
            number: options.number as u64,
            lbound: options.lbound,
            ubound: options.ubound,
            round,
            precision,
            exclude,
            include,
            norepeat: options.norepeat,
            prefix: options.prefix,
            suffix: options.suffix,
            contains: options.contains,
            list: options.list,
            delim: options.delim,
            quiet: options.quiet,
            numbers_force: options.numbers_force,
            generator,
            seed: options.seed,
            flags: options.flags,
            stats,
        })
    }
}
