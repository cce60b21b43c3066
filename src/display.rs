use crate::chiller::{DiagnosticInput, DiagnosticResult, ProductType};

/// 천 단위 구분 기호를 넣고 소수점 이하는 최대 2자리(뒤쪽 0 제거)로 표시한다.
pub fn format_num(value: f64) -> String {
    if !value.is_finite() {
        return "-".into();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// 입출열비 경고 여부.
pub fn io_ratio_exceeds(result: &DiagnosticResult, threshold_pct: f64) -> bool {
    result.io_ratio_pct > threshold_pct
}

/// 진단 결과 요약을 사람이 읽는 여러 줄 문자열로 만든다.
pub fn render_summary(
    input: &DiagnosticInput,
    result: &DiagnosticResult,
    io_ratio_warning_pct: f64,
) -> String {
    let unit = result.unit_input_heat.symbol();
    let status = result.status();
    let mut lines = vec![
        "== 분석 결과 ==".to_string(),
        format!(
            "보정 COP: {:.2}  (COP {:.2}, 보정계수 {:.4})",
            result.correction_cop, result.current_cop, result.correction_factor
        ),
        format!(
            "성능 상태: {}  (성능 저하율 {:.1}%)",
            status.label(),
            result.performance_drop_pct
        ),
        format!("COP 산출식: {}", result.cop_branch.description()),
        String::new(),
        "-- 사양 --".to_string(),
        format!(
            "제품구분: {}  능력 {} USRT, 입열량 {} {unit}",
            input.general.profile.product_type,
            format_num(input.spec.cooling_capacity),
            format_num(input.spec.cooling_input)
        ),
        format!("정격 COP: {:.2}", result.spec_cop),
    ];
    if input.general.profile.product_type == ProductType::DirectFired {
        lines.push(format!(
            "난방 효율: {:.1}%  (능력 {} kcal/h, 입열량 {} Nm3/h)",
            result.heating_efficiency * 100.0,
            format_num(input.spec.heating_capacity),
            format_num(input.spec.heating_input)
        ));
    }

    let io_note = if io_ratio_exceeds(result, io_ratio_warning_pct) {
        format!("  [경고: {io_ratio_warning_pct:.0}% 초과, 측정값 확인 필요]")
    } else {
        String::new()
    };
    lines.extend([
        String::new(),
        "-- 측정 --".to_string(),
        format!(
            "증발열량: {} kcal/h ({} USRT)",
            format_num(result.measured_evap_heat),
            result.measured_usrt.round()
        ),
        format!("입열량: {} kcal/h", format_num(result.measured_input_heat)),
        format!("응축열량: {} kcal/h", format_num(result.measured_condenser_heat)),
        String::new(),
        "-- 상세 --".to_string(),
        format!("부하율: {:.1}%", result.load_ratio_pct),
        format!("입출열비: {:.1}%{io_note}", result.io_ratio_pct),
        format!("유량비 (냉수): {:.1}%", result.flow_ratio_cold_pct),
        format!("유량비 (냉각수): {:.1}%", result.flow_ratio_cooling_pct),
    ]);
    lines.join("\n")
}
