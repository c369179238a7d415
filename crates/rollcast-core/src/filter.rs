//! The filter chain: exclude, include, norepeat, then the string filters
//! over the rendered value, evaluated in that order with the first
//! rejection winning.

use crate::config::RunConfig;

/// Why a candidate was rejected. [`Rejection::as_str`] keys the run-report
/// counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Present in the exclude-list.
    Excluded,
    /// Absent from a non-empty include-list.
    NotIncluded,
    /// Already in the accepted sequence (`--norepeat`).
    Repeated,
    /// Rendering starts with none of the configured prefixes.
    NoPrefix,
    /// Rendering ends with none of the configured suffixes.
    NoSuffix,
    /// Rendering contains none of the configured fragments.
    NoContains,
}

impl Rejection {
    /// Stable counter key for this rejection kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::Excluded => "exclude",
            Rejection::NotIncluded => "include",
            Rejection::Repeated => "norepeat",
            Rejection::NoPrefix => "prefix",
            Rejection::NoSuffix => "suffix",
            Rejection::NoContains => "contains",
        }
    }
}

/// Borrowed view of the filter-relevant parts of a run configuration.
#[derive(Debug, Clone, Copy)]
pub struct FilterSet<'a> {
    pub exclude: &'a [f64],
    pub include: &'a [f64],
    pub norepeat: bool,
    pub prefix: &'a [String],
    pub suffix: &'a [String],
    pub contains: &'a [String],
}

impl<'a> FilterSet<'a> {
    pub fn from_config(config: &'a RunConfig) -> FilterSet<'a> {
        FilterSet {
            exclude: &config.exclude,
            include: &config.include,
            norepeat: config.norepeat,
            prefix: &config.prefix,
            suffix: &config.suffix,
            contains: &config.contains,
        }
    }

    /// Evaluates one candidate against the whole chain.
    ///
    /// `rendered` must be the fixed-point rendering of `value` at the
    /// output precision; the string filters match against it, never
    /// against the binary value. `accepted` is the sequence accepted so
    /// far, consulted by `norepeat`.
    pub fn evaluate(&self, value: f64, rendered: &str, accepted: &[f64]) -> Option<Rejection> {
        if self.exclude.contains(&value) {
            return Some(Rejection::Excluded);
        }
        if !self.include.is_empty() && !self.include.contains(&value) {
            return Some(Rejection::NotIncluded);
        }
        if self.norepeat && accepted.contains(&value) {
            return Some(Rejection::Repeated);
        }
        if !self.prefix.is_empty()
            && !self.prefix.iter().any(|entry| rendered.starts_with(entry.as_str()))
        {
            return Some(Rejection::NoPrefix);
        }
        if !self.suffix.is_empty()
            && !self.suffix.iter().any(|entry| rendered.ends_with(entry.as_str()))
        {
            return Some(Rejection::NoSuffix);
        }
        if !self.contains.is_empty()
            && !self.contains.iter().any(|entry| rendered.contains(entry.as_str()))
        {
            return Some(Rejection::NoContains);
        }
        None
    }
}
