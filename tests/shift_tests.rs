// tests/shift_tests.rs
use caesar_tool::{CoreError, Shift};

#[test]
fn new_accepts_only_one_through_twenty_five() {
    assert_eq!(Shift::new(1).unwrap(), Shift::MIN);
    assert_eq!(Shift::new(25).unwrap(), Shift::MAX);
    for bad in [0, 26, -3, i64::MAX] {
        assert!(matches!(Shift::new(bad), Err(CoreError::ShiftOutOfRange(v)) if v == bad));
    }
}

#[test]
fn clamped_saturates() {
    assert_eq!(Shift::clamped(-40), Shift::MIN);
    assert_eq!(Shift::clamped(0), Shift::MIN);
    assert_eq!(Shift::clamped(12).get(), 12);
    assert_eq!(Shift::clamped(99), Shift::MAX);
}

#[test]
fn parses_trimmed_integers() {
    assert_eq!(" 7 ".parse::<Shift>().unwrap().get(), 7);
    assert!(matches!("seven".parse::<Shift>(), Err(CoreError::InvalidShift(_))));
    assert!(matches!("3.5".parse::<Shift>(), Err(CoreError::InvalidShift(_))));
    assert!(matches!("30".parse::<Shift>(), Err(CoreError::ShiftOutOfRange(30))));
}

#[test]
fn resolve_input_follows_text_box_rules() {
    let current = Shift::new(10).unwrap();
    assert_eq!(Shift::resolve_input(current, "4").get(), 4);
    assert_eq!(Shift::resolve_input(current, ""), Shift::DEFAULT);
    assert_eq!(Shift::resolve_input(current, "0"), current);
    assert_eq!(Shift::resolve_input(current, "26"), current);
    assert_eq!(Shift::resolve_input(current, "abc"), current);
    assert_eq!(Shift::resolve_input(current, "-"), current);
}

#[test]
fn resolve_input_takes_leading_integer() {
    let current = Shift::new(10).unwrap();
    assert_eq!(Shift::resolve_input(current, "7.5").get(), 7);
    assert_eq!(Shift::resolve_input(current, "12abc").get(), 12);
    assert_eq!(Shift::resolve_input(current, "1e1").get(), 1);
    assert_eq!(Shift::resolve_input(current, " 4").get(), 4);
    assert_eq!(Shift::resolve_input(current, "30.2"), current);
    assert_eq!(Shift::resolve_input(current, "-3"), current);
    assert_eq!(Shift::resolve_input(current, "e5"), current);
    assert_eq!(Shift::resolve_input(current, " "), current);
}

#[test]
fn default_is_three() {
    assert_eq!(Shift::default().get(), 3);
    assert_eq!(Shift::DEFAULT.to_string(), "3");
}

#[test]
fn inverse_undoes_encryption() {
    for v in 1..=25 {
        let shift = Shift::new(v).unwrap();
        let cipher = caesar_tool::encrypt("Round Trip", shift.into());
        assert_eq!(
            caesar_tool::encrypt(&cipher, shift.inverse().into()),
            "Round Trip"
        );
    }
}
