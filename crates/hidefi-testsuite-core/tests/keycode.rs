use hidefi_keycode::{entries, lookup, EfiKey, EfiScanCode, UsageCode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn is_reserved(code: u8) -> bool {
    matches!(code, 0x74..=0x86 | 0x8C..=0xDF | 0xE8..=0xFF)
}

#[test]
fn table_has_129_entries_in_ascending_order() {
    let codes: Vec<u8> = entries().map(|entry| entry.usage.as_u8()).collect();

    assert_eq!(codes.len(), 129);
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn letters_are_named_by_their_uppercase_glyph() {
    for (code, letter) in (0x04..=0x1D).zip('A'..='Z') {
        let entry = lookup(UsageCode::from_u8(code)).unwrap();

        assert_eq!(entry.name, letter.to_string());
        assert!(entry.efi_key.is_some());
        assert_eq!(entry.scan_code, None);
    }
}

#[test]
fn enter_and_escape() {
    let enter = lookup(UsageCode::KEY_ENTER).unwrap();
    assert_eq!(enter.name, "Enter");
    assert_eq!(enter.efi_key, Some(EfiKey::Enter));
    assert_eq!(enter.scan_code, None);

    let escape = lookup(UsageCode::KEY_ESCAPE).unwrap();
    assert_eq!(escape.efi_key, Some(EfiKey::Esc));
    assert_eq!(escape.scan_code, Some(EfiScanCode::SCAN_ESC));
    assert_eq!(escape.scan_code.unwrap().as_u16(), 0x17);
}

#[test]
fn f1_to_f10_scan_codes_are_consecutive() {
    let scan_codes: Vec<u16> = (0x3A..=0x43)
        .map(|code| lookup(UsageCode::from_u8(code)).unwrap().scan_code.unwrap().as_u16())
        .collect();

    assert_eq!(scan_codes, (0x0B..=0x14).collect::<Vec<u16>>());
}

#[rstest]
#[case(UsageCode::KEY_F11, EfiKey::F11)]
#[case(UsageCode::KEY_F12, EfiKey::F12)]
fn f11_and_f12_have_no_scan_code(#[case] usage: UsageCode, #[case] efi_key: EfiKey) {
    let entry = lookup(usage).unwrap();

    assert_eq!(entry.efi_key, Some(efi_key));
    assert_eq!(entry.scan_code, None);
}

#[rstest]
#[case(UsageCode::KEYPAD_7, EfiScanCode::SCAN_HOME)]
#[case(UsageCode::KEYPAD_8, EfiScanCode::SCAN_UP)]
#[case(UsageCode::KEYPAD_1, EfiScanCode::SCAN_END)]
#[case(UsageCode::KEYPAD_0, EfiScanCode::SCAN_INSERT)]
#[case(UsageCode::KEYPAD_DOT, EfiScanCode::SCAN_DELETE)]
fn keypad_digits_double_as_navigation(#[case] usage: UsageCode, #[case] scan_code: EfiScanCode) {
    assert_eq!(lookup(usage).unwrap().scan_code, Some(scan_code));
}

#[test]
fn keypad_5_has_no_scan_code() {
    let entry = lookup(UsageCode::KEYPAD_5).unwrap();

    assert_eq!(entry.efi_key, Some(EfiKey::Five));
    assert_eq!(entry.scan_code, None);
}

#[rstest]
#[case(0x00, "Reserved")]
#[case(0x01, "ErrorRollOver")]
#[case(0x02, "POSTFail")]
#[case(0x03, "ErrorUndefined")]
#[case(0x66, "Power")]
#[case(0x67, "Numpad =")]
#[case(0x68, "F13")]
#[case(0x73, "F24")]
fn entries_without_firmware_mapping(#[case] code: u8, #[case] name: &str) {
    let entry = lookup(UsageCode::from_u8(code)).unwrap();

    assert_eq!(entry.name, name);
    assert!(!entry.has_firmware_mapping());
}

#[rstest]
#[case(0x74)]
#[case(0x7A)]
#[case(0x86)]
#[case(0x8C)]
#[case(0xDF)]
#[case(0xE8)]
#[case(0xFF)]
fn reserved_ranges_are_absent(#[case] code: u8) {
    assert_eq!(lookup(UsageCode::from_u8(code)), None);
}

#[rstest]
#[case(UsageCode::KEY_ENTER, UsageCode::KEYPAD_ENTER, EfiKey::Enter)]
#[case(UsageCode::KEY_BACKSLASH, UsageCode::KEY_INTERNATIONAL3, EfiKey::D13)]
#[case(UsageCode::KEY_NON_US_BACKSLASH, UsageCode::KEY_INTERNATIONAL1, EfiKey::B0)]
fn distinct_codes_may_share_a_firmware_key(#[case] a: UsageCode, #[case] b: UsageCode, #[case] efi_key: EfiKey) {
    assert_eq!(lookup(a).unwrap().efi_key, Some(efi_key));
    assert_eq!(lookup(b).unwrap().efi_key, Some(efi_key));
}

#[test]
fn modifiers() {
    let expected = [
        (UsageCode::KEY_LEFT_CTRL, EfiKey::LCtrl),
        (UsageCode::KEY_LEFT_SHIFT, EfiKey::LShift),
        (UsageCode::KEY_LEFT_ALT, EfiKey::A0),
        (UsageCode::KEY_LEFT_GUI, EfiKey::A1),
        (UsageCode::KEY_RIGHT_CTRL, EfiKey::RCtrl),
        (UsageCode::KEY_RIGHT_SHIFT, EfiKey::RShift),
        (UsageCode::KEY_RIGHT_ALT, EfiKey::A3),
        (UsageCode::KEY_RIGHT_GUI, EfiKey::A4),
    ];

    for (usage, efi_key) in expected {
        assert_eq!(lookup(usage).unwrap().efi_key, Some(efi_key), "{usage}");
    }
}

#[test]
fn international_names_carry_their_legend() {
    assert_eq!(
        lookup(UsageCode::KEY_INTERNATIONAL3).unwrap().name,
        "International3 (\u{a5} |)"
    );
    assert_eq!(
        lookup(UsageCode::KEY_INTERNATIONAL4).unwrap().name,
        "International4 (\u{5909}\u{63db})"
    );
}

#[rstest]
#[case("0x28", 0x28)]
#[case("0X2c", 0x2C)]
#[case("40", 40)]
#[case(" 255 ", 255)]
#[case("0x00", 0)]
fn parse_usage_code(#[case] input: &str, #[case] expected: u8) {
    assert_eq!(input.parse::<UsageCode>().unwrap(), UsageCode::from_u8(expected));
}

#[rstest]
#[case("")]
#[case("256")]
#[case("0x100")]
#[case("0x")]
#[case("enter")]
#[case("-1")]
fn parse_usage_code_error(#[case] input: &str) {
    let error = input.parse::<UsageCode>().unwrap_err();

    assert!(error.to_string().starts_with("invalid usage code"));
    assert!(core::error::Error::source(&error).is_some());
}

#[test]
fn usage_code_display() {
    assert_eq!(UsageCode::KEY_A.to_string(), "0x04");
    assert_eq!(UsageCode::KEY_RIGHT_GUI.to_string(), "0xE7");
}

#[test]
fn efi_key_display() {
    assert_eq!(EfiKey::SpaceBar.to_string(), "EfiKeySpaceBar");
    assert_eq!(EfiKey::D13.to_string(), "EfiKeyD13");
    assert_eq!(EfiKey::LCtrl.as_str(), "EfiKeyLCtrl");
}

#[test]
fn efi_key_names_are_unique() {
    let mut names: Vec<&str> = EfiKey::ALL.iter().map(|key| key.as_str()).collect();
    let total = names.len();

    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), total);
    assert!(names.iter().all(|name| name.starts_with("EfiKey")));
}

#[test]
fn left_alt_position_is_listed_but_unused_by_the_table() {
    assert!(EfiKey::ALL.contains(&EfiKey::LAlt));
    assert!(entries().all(|entry| entry.efi_key != Some(EfiKey::LAlt)));
    assert_eq!(lookup(UsageCode::KEY_LEFT_ALT).unwrap().efi_key, Some(EfiKey::A0));
}

#[test]
fn scan_code_display() {
    assert_eq!(EfiScanCode::SCAN_ESC.to_string(), "SCAN_ESC (0x17)");
    assert_eq!(EfiScanCode::SCAN_F1.to_string(), "SCAN_F1 (0x0B)");
    assert_eq!(EfiScanCode::SCAN_PAGE_DOWN.name(), Some("SCAN_PAGE_DOWN"));
    assert_eq!(EfiScanCode::from_u16(0x48).name(), None);
    assert_eq!(EfiScanCode::from_u16(0x48).to_string(), "0x0048");
}

proptest! {
    #[test]
    fn lookup_matches_reserved_ranges(code in any::<u8>()) {
        let usage = UsageCode::from_u8(code);

        let entry = lookup(usage);

        prop_assert_eq!(entry.is_none(), is_reserved(code));
        if let Some(entry) = entry {
            prop_assert_eq!(entry.usage, usage);
        }
    }

    #[test]
    fn usage_code_display_parses_back(code in any::<u8>()) {
        let usage = UsageCode::from_u8(code);
        prop_assert_eq!(usage.to_string().parse::<UsageCode>().unwrap(), usage);
    }
}
