use hidefi_keycode::UsageCode;
use hidefi_layout::{
    get_layout, Footprint, KeyShape, LayoutId, Row, Slot, FUNCTION_ROW, NAV_CLUSTER, NUMBER_ROW, NUMPAD, SPACE_ROW,
};
use hidefi_testsuite_core::{all_layouts, has_key, main_key};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(LayoutId::Ansi, "US ANSI", 103)]
#[case(LayoutId::Iso, "European ISO", 104)]
#[case(LayoutId::Jis, "Japanese JIS", 109)]
fn layout_catalog(#[case] id: LayoutId, #[case] name: &str, #[case] placements: usize) {
    let layout = get_layout(id);

    assert_eq!(layout.id, id);
    assert_eq!(layout.name, name);
    assert_eq!(layout.placements().count(), placements);
}

#[test]
fn every_layout_shares_nav_cluster_and_numpad() {
    for layout in all_layouts() {
        assert!(core::ptr::eq(layout.nav, NAV_CLUSTER.as_slice()), "{}", layout.id);
        assert!(core::ptr::eq(layout.numpad, NUMPAD.as_slice()), "{}", layout.id);
        assert!(core::ptr::eq(layout.main[0], &FUNCTION_ROW), "{}", layout.id);
    }
}

#[rstest]
#[case(LayoutId::Ansi)]
#[case(LayoutId::Iso)]
fn ansi_and_iso_share_number_and_space_rows(#[case] id: LayoutId) {
    let layout = get_layout(id);

    assert!(core::ptr::eq(layout.main[1], &NUMBER_ROW));
    assert!(core::ptr::eq(layout.main[5], &SPACE_ROW));
}

#[test]
fn jis_has_its_own_number_and_space_rows() {
    let jis = get_layout(LayoutId::Jis);

    assert!(!core::ptr::eq(jis.main[1], &NUMBER_ROW));
    assert!(!core::ptr::eq(jis.main[5], &SPACE_ROW));
    assert_eq!(jis.main.len(), 6);
}

#[test]
fn shared_sub_layouts_render_identically() {
    let ansi = get_layout(LayoutId::Ansi);
    let jis = get_layout(LayoutId::Jis);

    assert_eq!(ansi.nav_keys().collect::<Vec<_>>(), jis.nav_keys().collect::<Vec<_>>());
    assert_eq!(ansi.numpad, jis.numpad);
}

#[test]
fn ansi_enter() {
    let enter = main_key(LayoutId::Ansi, UsageCode::KEY_ENTER).unwrap();

    assert_eq!(enter.width(), Footprint::U2_25);
    assert_eq!(enter.shape, KeyShape::Regular);
    assert!(enter.is_modifier());
}

#[test]
fn iso_enter() {
    let enter = main_key(LayoutId::Iso, UsageCode::KEY_ENTER).unwrap();

    assert_eq!(enter.width(), Footprint::U1_25);
    assert!(enter.is_iso_enter());
    assert!(!enter.is_jis_enter());
    assert!(enter.is_modifier());
}

#[test]
fn jis_enter() {
    let enter = main_key(LayoutId::Jis, UsageCode::KEY_ENTER).unwrap();

    assert_eq!(enter.width(), Footprint::U1_25);
    assert!(enter.is_jis_enter());
    assert!(!enter.is_iso_enter());
}

#[test]
fn enter_appears_once_in_main_block_and_keypad_enter_on_keypad() {
    for layout in all_layouts() {
        assert_eq!(layout.find(UsageCode::KEY_ENTER).count(), 1, "{}", layout.id);
        assert_eq!(layout.find(UsageCode::KEYPAD_ENTER).count(), 1, "{}", layout.id);
        assert!(layout.numpad.iter().any(|key| key.usage == UsageCode::KEYPAD_ENTER));
    }
}

#[rstest]
#[case(LayoutId::Ansi, Footprint::U2_25, Footprint::U2_75)]
#[case(LayoutId::Iso, Footprint::U1_25, Footprint::U2_75)]
#[case(LayoutId::Jis, Footprint::U2_25, Footprint::U1_75)]
fn shift_widths(#[case] id: LayoutId, #[case] left: Footprint, #[case] right: Footprint) {
    assert_eq!(main_key(id, UsageCode::KEY_LEFT_SHIFT).unwrap().width(), left);
    assert_eq!(main_key(id, UsageCode::KEY_RIGHT_SHIFT).unwrap().width(), right);
}

#[rstest]
#[case(UsageCode::KEY_NON_US_BACKSLASH, false, true, false)]
#[case(UsageCode::KEY_NON_US_HASH, false, true, true)]
#[case(UsageCode::KEY_BACKSLASH, true, false, false)]
#[case(UsageCode::KEY_INTERNATIONAL1, false, false, true)]
#[case(UsageCode::KEY_INTERNATIONAL2, false, false, true)]
#[case(UsageCode::KEY_INTERNATIONAL3, false, false, true)]
#[case(UsageCode::KEY_INTERNATIONAL4, false, false, true)]
#[case(UsageCode::KEY_INTERNATIONAL5, false, false, true)]
#[case(UsageCode::KEY_RIGHT_GUI, false, false, true)]
fn layout_specific_keys(#[case] usage: UsageCode, #[case] ansi: bool, #[case] iso: bool, #[case] jis: bool) {
    assert_eq!(has_key(LayoutId::Ansi, usage), ansi);
    assert_eq!(has_key(LayoutId::Iso, usage), iso);
    assert_eq!(has_key(LayoutId::Jis, usage), jis);
}

#[test]
fn jis_legends() {
    let jis = get_layout(LayoutId::Jis);
    let label = |usage| jis.find(usage).next().unwrap().label;

    assert_eq!(label(UsageCode::KEY_GRAVE), "\u{534a}/\u{5168}");
    assert_eq!(label(UsageCode::KEY_INTERNATIONAL3), "\u{a5}");
    assert_eq!(label(UsageCode::KEY_INTERNATIONAL2), "\u{304b}\u{306a}");
    assert_eq!(label(UsageCode::KEY_BACKSPACE), "BS");
}

#[test]
fn ansi_main_rows_are_fifteen_units_wide() {
    for row in get_layout(LayoutId::Ansi).main {
        assert_eq!(row.width(), 60);
    }
}

#[test]
fn numpad_shapes() {
    assert_eq!(NUMPAD.len(), 17);
    assert_eq!(NUMPAD.iter().filter(|key| key.is_wide()).count(), 1);
    assert_eq!(NUMPAD.iter().filter(|key| key.is_tall()).count(), 2);

    let zero = NUMPAD.iter().find(|key| key.usage == UsageCode::KEYPAD_0).unwrap();
    assert_eq!(zero.width(), Footprint::U2);
    assert_eq!(zero.height(), Footprint::U1);

    let plus = NUMPAD.iter().find(|key| key.usage == UsageCode::KEYPAD_PLUS).unwrap();
    assert_eq!(plus.width(), Footprint::U1);
    assert_eq!(plus.height(), Footprint::U2);
}

#[test]
fn nav_cluster_gaps() {
    let gaps: Vec<&Row> = NAV_CLUSTER.iter().filter(|row| row.is_gap()).collect();

    assert_eq!(gaps, [&Row::Gap(None), &Row::Gap(Some(Footprint::U2))]);
    assert_eq!(get_layout(LayoutId::Iso).nav_keys().count(), 13);
}

#[test]
fn spacers_resolve_to_no_key() {
    let spacer = Slot::Spacer(Footprint::U1_25);

    assert_eq!(spacer.as_key(), None);
    assert_eq!(spacer.footprint(), Footprint::U1_25);

    let spacers = FUNCTION_ROW
        .sections()
        .iter()
        .flat_map(|section| section.iter())
        .filter(|slot| slot.as_key().is_none())
        .count();
    assert_eq!(spacers, 3);
    assert_eq!(FUNCTION_ROW.keys().count(), 13);
}

#[rstest]
#[case("ansi", LayoutId::Ansi)]
#[case("iso", LayoutId::Iso)]
#[case("jis", LayoutId::Jis)]
fn parse_layout_id(#[case] input: &str, #[case] expected: LayoutId) {
    assert_eq!(input.parse::<LayoutId>().unwrap(), expected);
    assert_eq!(expected.to_string(), input);
}

#[rstest]
#[case("ANSI")]
#[case("Jis")]
#[case(" iso")]
#[case("")]
fn parse_layout_id_is_exact(#[case] input: &str) {
    let error = input.parse::<LayoutId>().unwrap_err();

    assert_eq!(error.id, input);
}

#[test]
fn parse_unknown_layout_id() {
    let error = "dvorak".parse::<LayoutId>().unwrap_err();

    assert_eq!(error.id, "dvorak");
    assert_eq!(error.to_string(), "unknown layout `dvorak` (expected one of: ansi, iso, jis)");
}

#[rstest]
#[case(Footprint::U1, "1u")]
#[case(Footprint::U1_25, "1.25u")]
#[case(Footprint::U2_75, "2.75u")]
#[case(Footprint::U7_5, "7.5u")]
fn footprint_display(#[case] footprint: Footprint, #[case] expected: &str) {
    assert_eq!(footprint.to_string(), expected);
}

#[test]
fn footprint_units() {
    assert!((Footprint::U2_25.as_units() - 2.25).abs() < f32::EPSILON);
    assert_eq!(Footprint::from_quarters(6), Footprint::U1_5);
}
