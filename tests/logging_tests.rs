#![cfg(feature = "std")]

use log::LevelFilter;
use tileslide::{init_logging, parse_level, short_target};

#[test]
fn crate_prefix_is_dropped_from_targets() {
    assert_eq!(short_target("tileslide::game"), "game");
    assert_eq!(short_target("tileslide::snapshot::json"), "snapshot::json");
    assert_eq!(short_target("tileslide"), "tileslide");
    assert_eq!(short_target("sim"), "sim");
    // A different crate that merely shares the prefix is left alone.
    assert_eq!(short_target("tileslide_gui::view"), "tileslide_gui::view");
}

#[test]
fn level_names_parse_loosely() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" WARN\n"), Some(LevelFilter::Warn));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("verbose"), None);
    assert_eq!(parse_level(""), None);
}

#[test]
fn init_twice_is_harmless() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
