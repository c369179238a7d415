use clap::Parser;

use rollcast_core::RollOptions;

const ENGINE_HELP: &str = "\
Engine to draw from. One of:
  std         stdlib-quality default
  small       small and fast, not portable
  pcg32       PCG XSH-RR, 64-bit state
  pcg64       PCG XSL-RR, 128-bit state
  pcg64mcg    PCG MCG, 128-bit state
  xoshiro128  xoshiro128++
  xoshiro256  xoshiro256++
  splitmix64  SplitMix64
  chacha8     ChaCha stream cipher, 8 rounds
  chacha12    ChaCha stream cipher, 12 rounds
  chacha20    ChaCha stream cipher, 20 rounds
  badrandom   weak LCG on a shared coarse clock seed";

/// Command-line surface.
///
/// Parsing stays permissive on purpose: counts and precision come in as
/// raw signed integers and the generator as a plain string, so that
/// domain validation happens in `RunConfig::resolve` and every failure
/// maps to its documented exit code instead of a generic usage error.
#[derive(Parser, Debug)]
#[command(
    name = "rollcast",
    version,
    about = "Roll pseudo-random numbers with rounding, filters and statistics"
)]
pub struct Cli {
    /// How many values to produce.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_name = "COUNT",
        allow_negative_numbers = true,
        help_heading = "Generation"
    )]
    pub number: i64,

    /// Lower bound of the sampling interval, inclusive.
    #[arg(
        short = 'l',
        long,
        default_value_t = 0.0,
        value_name = "REAL",
        allow_negative_numbers = true,
        help_heading = "Generation"
    )]
    pub lbound: f64,

    /// Upper bound of the sampling interval, inclusive.
    #[arg(
        short = 'u',
        long,
        default_value_t = 1.0,
        value_name = "REAL",
        allow_negative_numbers = true,
        help_heading = "Generation"
    )]
    pub ubound: f64,

    /// Engine to draw from; see --help for the full list.
    #[arg(
        short = 'g',
        long,
        default_value = "std",
        value_name = "ENGINE",
        long_help = ENGINE_HELP,
        help_heading = "Generation"
    )]
    pub generator: String,

    /// Seed the engine deterministically instead of from OS entropy.
    #[arg(long, value_name = "U64", help_heading = "Generation")]
    pub seed: Option<u64>,

    /// Keep drawing until the requested count is accepted.
    #[arg(long, help_heading = "Generation")]
    pub numbers_force: bool,

    /// Round values up to the nearest integer.
    #[arg(short = 'c', long, help_heading = "Rounding")]
    pub ceil: bool,

    /// Round values down to the nearest integer.
    #[arg(short = 'f', long, help_heading = "Rounding")]
    pub floor: bool,

    /// Round values to the nearest integer, ties away from zero.
    #[arg(short = 'r', long, help_heading = "Rounding")]
    pub round: bool,

    /// Drop the fractional part.
    #[arg(short = 't', long, help_heading = "Rounding")]
    pub trunc: bool,

    /// Reject these exact values.
    #[arg(
        long,
        num_args = 0..,
        value_name = "REAL",
        allow_negative_numbers = true,
        help_heading = "Filtering"
    )]
    pub exclude: Option<Vec<f64>>,

    /// Accept only these exact values.
    #[arg(
        long,
        num_args = 0..,
        value_name = "REAL",
        allow_negative_numbers = true,
        help_heading = "Filtering"
    )]
    pub include: Option<Vec<f64>>,

    /// Never accept the same value twice.
    #[arg(long, help_heading = "Filtering")]
    pub norepeat: bool,

    /// Accept only values whose rendering starts with one of these.
    #[arg(long, num_args = 1.., value_name = "DIGITS", help_heading = "Filtering")]
    pub prefix: Vec<String>,

    /// Accept only values whose rendering ends with one of these.
    #[arg(long, num_args = 1.., value_name = "DIGITS", help_heading = "Filtering")]
    pub suffix: Vec<String>,

    /// Accept only values whose rendering contains one of these.
    #[arg(long, num_args = 1.., value_name = "DIGITS", help_heading = "Filtering")]
    pub contains: Vec<String>,

    /// Fractional digits in the rendered output (0-17).
    #[arg(
        short = 'p',
        long,
        default_value_t = 17,
        value_name = "DIGITS",
        allow_negative_numbers = true,
        help_heading = "Output"
    )]
    pub precision: i64,

    /// Label each printed value with its position.
    #[arg(long, help_heading = "Output")]
    pub list: bool,

    /// Separator printed after each value (default: newline).
    #[arg(
        long,
        default_value = "\n",
        hide_default_value = true,
        value_name = "STRING",
        help_heading = "Output"
    )]
    pub delim: String,

    /// Print no values; statistics and the flags dump still print.
    #[arg(short = 'q', long, help_heading = "Output")]
    pub quiet: bool,

    /// Dump the resolved configuration as JSON after the run.
    #[arg(long, help_heading = "Output")]
    pub flags: bool,

    /// Print every statistic below.
    #[arg(long, help_heading = "Statistics")]
    pub stat_all: bool,

    /// Smallest accepted value.
    #[arg(long, help_heading = "Statistics")]
    pub stat_min: bool,

    /// Largest accepted value.
    #[arg(long, help_heading = "Statistics")]
    pub stat_max: bool,

    /// Median of the accepted values.
    #[arg(long, help_heading = "Statistics")]
    pub stat_median: bool,

    /// Arithmetic mean of the accepted values.
    #[arg(long, help_heading = "Statistics")]
    pub stat_avg: bool,

    /// Population variance of the accepted values.
    #[arg(long, help_heading = "Statistics")]
    pub stat_var: bool,

    /// Population standard deviation of the accepted values.
    #[arg(long, help_heading = "Statistics")]
    pub stat_std: bool,

    /// Coefficient of variation of the accepted values.
    #[arg(long, help_heading = "Statistics")]
    pub stat_coef: bool,
}

impl Cli {
    pub fn into_options(self) -> RollOptions {
        RollOptions {
            number: self.number,
            lbound: self.lbound,
            ubound: self.ubound,
            ceil: self.ceil,
            floor: self.floor,
            round: self.round,
            trunc: self.trunc,
            precision: self.precision,
            exclude: self.exclude,
            include: self.include,
            norepeat: self.norepeat,
            prefix: self.prefix,
            suffix: self.suffix,
            contains: self.contains,
            list: self.list,
            delim: self.delim,
            quiet: self.quiet,
            numbers_force: self.numbers_force,
            generator: self.generator,
            seed: self.seed,
            flags: self.flags,
            stat_all: self.stat_all,
            stat_min: self.stat_min,
            stat_max: self.stat_max,
            stat_median: self.stat_median,
            stat_avg: self.stat_avg,
            stat_var: self.stat_var,
            stat_std: self.stat_std,
            stat_coef: self.stat_coef,
        }
    }
}
