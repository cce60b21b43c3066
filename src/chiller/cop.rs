//! 정격 사양과 현장 측정값으로 현재 COP, 온도 보정 COP, 성능 저하율 및
//! 부하율·입출열비·유량비를 계산한다.
//!
//! 계산은 입력만으로 결정되며 실패하지 않는다. 분모가 0이거나 결과가
//! 유한하지 않은 항목은 오류 대신 0으로 둔다.

use serde::{Deserialize, Serialize};

use super::equipment::{
    EquipmentProfile, InputHeatUnit, ProductType, GAS_KCAL_PER_NM3, KCAL_PER_USRT,
    WATER_KG_PER_M3,
};
use super::input::{CorrectionConfig, CorrectionRef, MeasuredFlag, Measurement, Specification};
use super::status::PerformanceStatus;

/// 현재 COP를 산출한 식. 측정 플래그 조합으로 결정된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopBranch {
    /// 냉수 유량·입열량 모두 측정: 증발열량 / 입열량
    BothMeasured,
    /// 냉수 유량만 측정: 증발열량 / (응축열량 - 증발열량)
    EvaporatorBalance,
    /// 입열량만 측정: (응축열량 - 입열량) / 입열량
    CondenserBalance,
    /// 둘 다 미측정: 추정 불가
    Unavailable,
}

impl CopBranch {
    pub fn select(cold_water_flow: MeasuredFlag, input_heat: MeasuredFlag) -> Self {
        match (cold_water_flow, input_heat) {
            (MeasuredFlag::Measured, MeasuredFlag::Measured) => CopBranch::BothMeasured,
            (MeasuredFlag::Measured, MeasuredFlag::NotMeasured) => CopBranch::EvaporatorBalance,
            (MeasuredFlag::NotMeasured, MeasuredFlag::Measured) => CopBranch::CondenserBalance,
            (MeasuredFlag::NotMeasured, MeasuredFlag::NotMeasured) => CopBranch::Unavailable,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CopBranch::BothMeasured => "증발열량 / 입열량",
            CopBranch::EvaporatorBalance => "증발열량 / (응축열량 - 증발열량)",
            CopBranch::CondenserBalance => "(응축열량 - 입열량) / 입열량",
            CopBranch::Unavailable => "산출 불가 (냉수 유량·입열량 미측정)",
        }
    }
}

/// 진단 계산 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    /// 정격/측정 입열량 단위
    pub unit_input_heat: InputHeatUnit,
    /// 정격 COP
    pub spec_cop: f64,
    /// 직화식 난방 효율(0~1). 직화식이 아니면 0
    pub heating_efficiency: f64,
    /// 증발열량(kcal/h)
    pub measured_evap_heat: f64,
    /// 증발열량 환산 냉동톤(USRT)
    pub measured_usrt: f64,
    /// 측정 입열량(kcal/h)
    pub measured_input_heat: f64,
    /// 응축열량(kcal/h)
    pub measured_condenser_heat: f64,
    /// 현재 COP 산출식
    pub cop_branch: CopBranch,
    /// 현재 COP
    pub current_cop: f64,
    /// 온도 보정 계수
    pub correction_factor: f64,
    /// 보정 COP
    pub correction_cop: f64,
    /// 성능 저하율(%)
    pub performance_drop_pct: f64,
    /// 부하율(%)
    pub load_ratio_pct: f64,
    /// 입출열비(%)
    pub io_ratio_pct: f64,
    /// 냉수 유량비(%)
    pub flow_ratio_cold_pct: f64,
    /// 냉각수 유량비(%)
    pub flow_ratio_cooling_pct: f64,
}

impl DiagnosticResult {
    pub fn status(&self) -> PerformanceStatus {
        PerformanceStatus::classify(self.performance_drop_pct)
    }
}

/// 분모가 0이거나 몫이 유한하지 않으면 0.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// 체적유량과 온도차로 열량(kcal/h)을 구한다.
fn water_heat(flow_m3_per_h: f64, delta_t: f64) -> f64 {
    finite_or_zero(flow_m3_per_h * WATER_KG_PER_M3 * delta_t)
}

/// 진단 지표를 계산한다.
pub fn evaluate(
    profile: &EquipmentProfile,
    spec: &Specification,
    measurement: &Measurement,
    config: &CorrectionConfig,
) -> DiagnosticResult {
    let product = profile.product_type;
    let unit_input_heat = product.input_heat_unit();
    let heat_equivalent = product.heat_equivalent_kcal();
    let m = measurement;

    let spec_cop = ratio(
        spec.cooling_capacity * KCAL_PER_USRT,
        spec.cooling_input * heat_equivalent,
    );
    let heating_efficiency = match product {
        ProductType::DirectFired => {
            ratio(spec.heating_capacity, spec.heating_input * GAS_KCAL_PER_NM3)
        }
        ProductType::Turbo
        | ProductType::Screw
        | ProductType::Isc
        | ProductType::MidTempWater
        | ProductType::Steam => 0.0,
    };

    let measured_evap_heat = water_heat(m.evap_flow, m.evap_inlet - m.evap_outlet);
    let measured_usrt = measured_evap_heat / KCAL_PER_USRT;
    let measured_input_heat = finite_or_zero(m.fuel_consumption * heat_equivalent);
    let measured_condenser_heat =
        water_heat(m.condenser_flow, m.condenser_outlet - m.condenser_inlet);

    let cop_branch = CopBranch::select(m.cold_water_flow_measured, m.input_heat_measured);
    let current_cop = match cop_branch {
        CopBranch::BothMeasured => ratio(measured_evap_heat, measured_input_heat),
        CopBranch::EvaporatorBalance => {
            let heat_diff = measured_condenser_heat - measured_evap_heat;
            // 열수지가 0 이하이면 COP를 정의하지 않는다.
            if heat_diff > 0.0 {
                ratio(measured_evap_heat, heat_diff)
            } else {
                0.0
            }
        }
        CopBranch::CondenserBalance => ratio(
            measured_condenser_heat - measured_input_heat,
            measured_input_heat,
        ),
        CopBranch::Unavailable => 0.0,
    };
    tracing::trace!(?cop_branch, current_cop, "current COP");

    let coeff = product.correction_coefficient();
    let cooling_measured_temp = match config.correction_ref {
        CorrectionRef::CondenserOutlet => m.condenser_outlet,
        CorrectionRef::CondenserInlet => m.condenser_inlet,
    };
    let correction_factor = finite_or_zero(
        1.0 + ((config.target_cold_outlet - m.evap_outlet) * coeff
            + (cooling_measured_temp - config.target_cooling_ref_temp) * coeff),
    );
    let correction_cop = finite_or_zero(current_cop * correction_factor);

    let performance_drop_pct = ratio(spec_cop - correction_cop, spec_cop) * 100.0;
    let load_ratio_pct = ratio(
        measured_evap_heat,
        spec.cooling_capacity * KCAL_PER_USRT,
    ) * 100.0;
    let io_ratio_pct = ratio(
        measured_evap_heat + measured_input_heat,
        measured_condenser_heat,
    ) * 100.0;
    let flow_ratio_cold_pct = ratio(m.evap_flow, spec.cold_water_flow) * 100.0;
    let flow_ratio_cooling_pct = ratio(m.condenser_flow, spec.cooling_water_flow) * 100.0;

    DiagnosticResult {
        unit_input_heat,
        spec_cop,
        heating_efficiency,
        measured_evap_heat,
        measured_usrt,
        measured_input_heat,
        measured_condenser_heat,
        cop_branch,
        current_cop,
        correction_factor,
        correction_cop,
        performance_drop_pct: finite_or_zero(performance_drop_pct),
        load_ratio_pct: finite_or_zero(load_ratio_pct),
        io_ratio_pct: finite_or_zero(io_ratio_pct),
        flow_ratio_cold_pct: finite_or_zero(flow_ratio_cold_pct),
        flow_ratio_cooling_pct: finite_or_zero(flow_ratio_cooling_pct),
    }
}
