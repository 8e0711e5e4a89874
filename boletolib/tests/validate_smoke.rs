use boletolib::{inspect, validate, BoletoKind, CodeType};

#[test]
fn validate_known_codes() {
    assert!(validate("00190000090333717600600639372176398960000008000"));
    assert!(validate("34191990600000005001092664672997197273480000"));
    assert!(!validate("74891.11611 00172.302267 05522.671006 3 69050000017500"));
    assert!(validate("74891.11612 00172.302267 05522.671006 3 69050000017500"));
}

#[test]
fn unparseable_code_is_invalid() {
    assert!(!validate("2325435435"));
    assert!(!validate(""));
    assert!(!validate("not a code"));
}

#[test]
fn inspect_credit_card_line() {
    let i = inspect("73990.00004 00001.223320 90126.130344 4 00000000000000");
    assert!(i.valid);
    assert_eq!(i.code_type, CodeType::DigitableLine);
    assert_eq!(i.kind, BoletoKind::CreditCard);
    assert!(i.error.is_none());
}
