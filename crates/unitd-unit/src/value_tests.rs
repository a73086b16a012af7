use crate::value::{FileMode, Signal, Timespan, UnitRef, ValueError};

#[test]
fn timespan_parses_unit_sequences() {
    let span: Timespan = "5min 20s".parse().unwrap();
    assert_eq!(span, Timespan::from_secs(320));

    let span: Timespan = "1h30min".parse().unwrap();
    assert_eq!(span, Timespan::from_secs(90 * 60));

    let span: Timespan = "250ms".parse().unwrap();
    assert_eq!(span.as_micros(), 250_000);
}

#[test]
fn timespan_bare_number_is_seconds() {
    let span: Timespan = "30".parse().unwrap();
    assert_eq!(span, Timespan::from_secs(30));
}

#[test]
fn timespan_display_is_largest_first() {
    assert_eq!(Timespan::from_secs(320).to_string(), "5min 20s");
    assert_eq!(Timespan::from_secs(8 * 24 * 3600).to_string(), "1w 1d");
    assert_eq!(Timespan::from_micros(1_500).to_string(), "1ms 500us");
    assert_eq!(Timespan::ZERO.to_string(), "0");
    assert_eq!(Timespan::INFINITY.to_string(), "infinity");
}

#[test]
fn timespan_display_parses_back() {
    for text in ["2d 3h", "45s", "1w 2min 5ms"] {
        let span: Timespan = text.parse().unwrap();
        assert_eq!(span.to_string(), text);
    }
    assert_eq!("infinity".parse::<Timespan>().unwrap(), Timespan::INFINITY);
}

#[test]
fn timespan_rejects_garbage() {
    let err = "5 fortnights".parse::<Timespan>().unwrap_err();
    assert_eq!(
        err,
        ValueError::Timespan {
            input: "5 fortnights".into(),
            reason: "unknown unit",
        }
    );
    assert!("".parse::<Timespan>().is_err());
    assert!("min".parse::<Timespan>().is_err());
}

#[test]
fn file_mode_is_octal() {
    let mode: FileMode = "644".parse().unwrap();
    assert_eq!(mode.bits(), 0o644);
    assert_eq!(mode.to_string(), "0644");

    let mode: FileMode = "0027".parse().unwrap();
    assert_eq!(mode.to_string(), "0027");
}

#[test]
fn file_mode_rejects_out_of_range() {
    assert!("0888".parse::<FileMode>().is_err());
    assert!("17777".parse::<FileMode>().is_err());
    assert!("".parse::<FileMode>().is_err());
    assert_eq!(FileMode::new(0o10000), None);
}

#[test]
fn signal_accepts_names_and_numbers() {
    assert_eq!("SIGTERM".parse::<Signal>().unwrap(), Signal::TERM);
    assert_eq!("KILL".parse::<Signal>().unwrap(), Signal::KILL);
    assert_eq!("1".parse::<Signal>().unwrap(), Signal::HUP);
    assert_eq!(Signal::TERM.to_string(), "SIGTERM");
    assert_eq!(Signal::from_number(10).and_then(Signal::name), Some("USR1"));
}

#[test]
fn signal_rejects_unknown() {
    assert_eq!(
        "SIGNOPE".parse::<Signal>(),
        Err(ValueError::Signal("SIGNOPE".into()))
    );
    assert!("0".parse::<Signal>().is_err());
    assert!("64".parse::<Signal>().is_err());
    assert!(Signal::default().is_zero());
    assert_eq!(Signal::default().name(), None);
}

#[test]
fn unit_ref_validates_suffix() {
    let unit: UnitRef = "network-online.target".parse().unwrap();
    assert_eq!(unit.suffix(), Some("target"));
    assert_eq!(unit.to_string(), "network-online.target");

    let unit: UnitRef = "getty@tty1.service".parse().unwrap();
    assert_eq!(unit.suffix(), Some("service"));
}

#[test]
fn unit_ref_rejects_malformed_names() {
    let reason = |s: &str| match s.parse::<UnitRef>() {
        Err(ValueError::UnitName { reason, .. }) => reason,
        other => panic!("expected unit name error, got {other:?}"),
    };

    assert_eq!(reason(""), "empty");
    assert_eq!(reason("no suffix"), "contains whitespace or '/'");
    assert_eq!(reason("/etc/x.service"), "contains whitespace or '/'");
    assert_eq!(reason("backup"), "missing unit type suffix");
    assert_eq!(reason(".service"), "empty unit prefix");
    assert_eq!(reason("backup.conf"), "unknown unit type suffix");
}
