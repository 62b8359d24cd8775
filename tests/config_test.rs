use cipherforge::config::{Config, ModelParams, SearchParams};
use cipherforge::optimizer::{InitStrategy, SearchOptions};
use cipherforge::CipherError;
use clap::Parser;
use rstest::rstest;
use std::time::Duration;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.search.iterations, 10_000);
    assert_eq!(cfg.search.chains, 1);
    assert_eq!(cfg.search.seed, None);
    assert_eq!(cfg.search.init, InitStrategy::Identity);
    assert_eq!(cfg.search.temperature, 1.0);
    assert_eq!(cfg.search.patience, 0);
    assert_eq!(cfg.search.report_interval, 1_000);
    assert_eq!(cfg.search.max_time, None);
    assert_eq!(cfg.model.smoothing, 1.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_clap_defaults_match_default_impl() {
    let cli = TestCli::try_parse_from(["test"]).unwrap();
    let def = Config::default();
    assert_eq!(cli.config.search.iterations, def.search.iterations);
    assert_eq!(cli.config.search.chains, def.search.chains);
    assert_eq!(cli.config.search.init, def.search.init);
    assert_eq!(cli.config.search.temperature, def.search.temperature);
    assert_eq!(cli.config.search.report_interval, def.search.report_interval);
    assert_eq!(cli.config.model.smoothing, def.model.smoothing);
}

#[test]
fn test_clap_overrides() {
    let cli = TestCli::try_parse_from([
        "test",
        "--iterations",
        "500",
        "--init",
        "random",
        "-S",
        "7",
        "--chains",
        "3",
        "--temperature",
        "0.5",
        "--patience",
        "4",
        "-T",
        "30",
        "--smoothing",
        "0.25",
    ])
    .unwrap();

    let cfg = cli.config;
    assert_eq!(cfg.search.iterations, 500);
    assert_eq!(cfg.search.init, InitStrategy::Random);
    assert_eq!(cfg.search.seed, Some(7));
    assert_eq!(cfg.search.chains, 3);
    assert_eq!(cfg.search.temperature, 0.5);
    assert_eq!(cfg.search.patience, 4);
    assert_eq!(cfg.search.max_time, Some(30));
    assert_eq!(cfg.model.smoothing, 0.25);

    let opts = SearchOptions::from(&cfg);
    assert_eq!(opts.iterations, 500);
    assert_eq!(opts.max_time, Some(Duration::from_secs(30)));
}

#[test]
fn test_unknown_init_rejected() {
    assert!(TestCli::try_parse_from(["test", "--init", "annealed"]).is_err());
}

#[rstest]
#[case::zero_iterations(SearchParams { iterations: 0, ..Default::default() })]
#[case::zero_chains(SearchParams { chains: 0, ..Default::default() })]
#[case::zero_interval(SearchParams { report_interval: 0, ..Default::default() })]
#[case::zero_temperature(SearchParams { temperature: 0.0, ..Default::default() })]
#[case::negative_temperature(SearchParams { temperature: -1.0, ..Default::default() })]
#[case::nan_temperature(SearchParams { temperature: f64::NAN, ..Default::default() })]
fn test_invalid_search_params(#[case] search: SearchParams) {
    let cfg = Config {
        search,
        model: ModelParams::default(),
    };
    assert!(matches!(cfg.validate(), Err(CipherError::Config(_))));
}

#[rstest]
#[case(0.0)]
#[case(-0.5)]
#[case(f64::INFINITY)]
fn test_invalid_smoothing(#[case] smoothing: f64) {
    let params = ModelParams { smoothing };
    assert!(matches!(params.validate(), Err(CipherError::Config(_))));
}

