use super::*;

#[test]
fn default_level_is_warn() {
    assert_eq!(level_for(0, false), Level::WARN);
}

#[test]
fn verbose_flags_raise_level() {
    assert_eq!(level_for(1, false), Level::INFO);
    assert_eq!(level_for(2, false), Level::DEBUG);
    assert_eq!(level_for(5, false), Level::TRACE);
}

#[test]
fn quiet_wins_over_verbose() {
    assert_eq!(level_for(3, true), Level::ERROR);
}

#[test]
fn init_twice_does_not_panic() {
    init(0, false);
    init(2, false);
}
