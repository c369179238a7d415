use rollcast_core::{FilterSet, Rejection, RollOptions, RunConfig, format_fixed};

fn config(options: RollOptions) -> RunConfig {
    RunConfig::resolve(options).expect("test options resolve")
}

fn evaluate(config: &RunConfig, value: f64, accepted: &[f64]) -> Option<Rejection> {
    let rendered = format_fixed(value, config.precision);
    FilterSet::from_config(config).evaluate(value, &rendered, accepted)
}

#[test]
fn no_filters_accept_everything() {
    let config = config(RollOptions::default());
    assert_eq!(evaluate(&config, 0.25, &[]), None);
}

#[test]
fn excluded_value_is_rejected() {
    let config = config(RollOptions {
        exclude: Some(vec![0.5]),
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.5, &[]), Some(Rejection::Excluded));
    assert_eq!(evaluate(&config, 0.25, &[]), None);
}

#[test]
fn exclude_wins_over_include() {
    let config = config(RollOptions {
        exclude: Some(vec![0.5]),
        include: Some(vec![0.5]),
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.5, &[]), Some(Rejection::Excluded));
}

#[test]
fn include_list_rejects_values_outside_it() {
    let config = config(RollOptions {
        include: Some(vec![1.0, 2.0]),
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 1.0, &[]), None);
    assert_eq!(evaluate(&config, 1.5, &[]), Some(Rejection::NotIncluded));
}

#[test]
fn norepeat_rejects_values_already_accepted() {
    let config = config(RollOptions {
        norepeat: true,
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.25, &[]), None);
    assert_eq!(evaluate(&config, 0.25, &[0.25]), Some(Rejection::Repeated));
    assert_eq!(evaluate(&config, 0.75, &[0.25]), None);
}

#[test]
fn prefix_matches_the_rendered_value() {
    let config = config(RollOptions {
        prefix: vec!["0.5".to_string()],
        precision: 2,
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.53, &[]), None);
    assert_eq!(evaluate(&config, 0.42, &[]), Some(Rejection::NoPrefix));
}

#[test]
fn any_prefix_entry_is_enough() {
    let config = config(RollOptions {
        prefix: vec!["0.4".to_string(), "0.5".to_string()],
        precision: 2,
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.42, &[]), None);
    assert_eq!(evaluate(&config, 0.53, &[]), None);
    assert_eq!(evaluate(&config, 0.61, &[]), Some(Rejection::NoPrefix));
}

#[test]
fn string_filters_see_the_output_precision() {
    // At precision 0 the value 0.999 renders as "1", so a prefix of "1"
    // matches even though the binary value starts with 0.
    let config = config(RollOptions {
        prefix: vec!["1".to_string()],
        precision: 0,
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.999, &[]), None);
}

#[test]
fn suffix_matches_the_rendered_value() {
    let config = config(RollOptions {
        suffix: vec!["25".to_string()],
        precision: 2,
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.25, &[]), None);
    assert_eq!(evaluate(&config, 3.25, &[]), None);
    assert_eq!(evaluate(&config, 0.24, &[]), Some(Rejection::NoSuffix));
}

#[test]
fn contains_matches_anywhere_in_the_rendering() {
    let config = config(RollOptions {
        contains: vec!["9".to_string()],
        precision: 3,
        ..RollOptions::default()
    });
    assert_eq!(evaluate(&config, 0.392, &[]), None);
    assert_eq!(evaluate(&config, 0.111, &[]), Some(Rejection::NoContains));
}

#[test]
fn chain_order_reports_the_first_rejection() {
    let config = config(RollOptions {
        include: Some(vec![7.0]),
        norepeat: true,
        prefix: vec!["9".to_string()],
        ..RollOptions::default()
    });
    // 0.5 fails include, norepeat, and prefix; include is reported.
    assert_eq!(evaluate(&config, 0.5, &[0.5]), Some(Rejection::NotIncluded));
}

#[test]
fn saturated_norepeat_domain_rejects_every_candidate() {
    // Floored values over [0, 1] can only ever be 0 or 1. Once both are
    // accepted, norepeat rejects every further candidate; in forced mode
    // this is the documented non-terminating configuration.
    let config = config(RollOptions {
        floor: true,
        norepeat: true,
        ..RollOptions::default()
    });
    let accepted = [0.0, 1.0];
    for raw in [0.0f64, 0.2, 0.5, 0.7, 0.999, 1.0] {
        let value = raw.floor();
        assert_eq!(evaluate(&config, value, &accepted), Some(Rejection::Repeated));
    }
}

#[test]
fn rejection_counter_keys_are_stable() {
    assert_eq!(Rejection::Excluded.as_str(), "exclude");
    assert_eq!(Rejection::NotIncluded.as_str(), "include");
    assert_eq!(Rejection::Repeated.as_str(), "norepeat");
    assert_eq!(Rejection::NoPrefix.as_str(), "prefix");
    assert_eq!(Rejection::NoSuffix.as_str(), "suffix");
    assert_eq!(Rejection::NoContains.as_str(), "contains");
}
