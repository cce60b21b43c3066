//! 결과 표시 형식 테스트.
use chiller_cop_toolbox::chiller::{DiagnosticInput, EquipmentProfile, ProductType};
use chiller_cop_toolbox::display::{format_num, io_ratio_exceeds, render_summary};

#[test]
fn format_num_groups_thousands_and_trims_fraction() {
    assert_eq!(format_num(279_300.0), "279,300");
    assert_eq!(format_num(930_800.0), "930,800");
    assert_eq!(format_num(1234.5), "1,234.5");
    assert_eq!(format_num(0.12345), "0.12");
    assert_eq!(format_num(999.999), "1,000");
    assert_eq!(format_num(-1_234_567.891), "-1,234,567.89");
    assert_eq!(format_num(0.0), "0");
    assert_eq!(format_num(-0.001), "0");
    assert_eq!(format_num(f64::NAN), "-");
}

#[test]
fn summary_shows_heating_only_for_direct_fired() {
    let input = DiagnosticInput::sample();
    let text = render_summary(&input, &input.evaluate(), 120.0);
    assert!(text.contains("보정 COP: 0.27"));
    assert!(text.contains("성능 상태: 보통"));
    assert!(text.contains("난방 효율: 9.3%"));
    assert!(text.contains("증발열량: 279,300 kcal/h (92 USRT)"));
    assert!(text.contains("Nm3/h"));

    let mut turbo = input.clone();
    turbo.general.profile = EquipmentProfile::new(ProductType::Turbo);
    let text = render_summary(&turbo, &turbo.evaluate(), 120.0);
    assert!(!text.contains("난방 효율"));
    assert!(text.contains("kW"));
}

#[test]
fn io_ratio_warning_uses_threshold() {
    let input = DiagnosticInput::sample();
    let result = input.evaluate();
    assert!(io_ratio_exceeds(&result, 120.0));
    assert!(!io_ratio_exceeds(&result, 400.0));
    assert!(render_summary(&input, &result, 120.0).contains("[경고: 120% 초과"));
    assert!(!render_summary(&input, &result, 400.0).contains("경고"));
}

#[test]
fn summary_sections_are_separated_by_blank_lines() {
    let input = DiagnosticInput::sample();
    let text = render_summary(&input, &input.evaluate(), 120.0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"== 분석 결과 =="));
    assert!(lines.last().is_some_and(|l| l.starts_with("유량비 (냉각수): ")));
    assert!(!text.ends_with('\n'));
    for header in ["-- 사양 --", "-- 측정 --", "-- 상세 --"] {
        let at = lines.iter().position(|l| *l == header).expect(header);
        assert_eq!(lines[at - 1], "");
    }
}
