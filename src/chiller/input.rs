use serde::{Deserialize, Serialize};

use super::cop::{self, DiagnosticResult};
use super::equipment::{EquipmentProfile, ProductType};

/// 현장 일반 현황. 계산에는 제품 구분만 쓰이고 나머지는 기록용이다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralInfo {
    /// 현장명
    pub site_name: String,
    /// 진단일자(자유 형식, 보통 YYYY-MM-DD)
    pub diagnosis_date: String,
    /// 제품 구분
    #[serde(flatten)]
    pub profile: EquipmentProfile,
    /// 제조사
    pub manufacturer: String,
    /// 제조년월
    pub manufacturing_year: String,
}

/// 명판(정격) 사양. 0은 "입력되지 않음"을 뜻한다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Specification {
    /// 냉방 능력(USRT)
    pub cooling_capacity: f64,
    /// 냉방 입열량. 단위는 제품 구분에 따라 kW, Nm3/h, Mcal
    pub cooling_input: f64,
    /// 정격 냉수 유량(CMH)
    pub cold_water_flow: f64,
    /// 난방 능력(kcal/h)
    pub heating_capacity: f64,
    /// 난방 입열량(Nm3/h)
    pub heating_input: f64,
    /// 온수 유량(CMH)
    pub heating_water_flow: f64,
    /// 정격 냉각수 유량(CMH)
    pub cooling_water_flow: f64,
}

/// 측정 여부 플래그. 기록 양식의 `O`/`X`로 직렬화한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasuredFlag {
    #[default]
    #[serde(rename = "O", alias = "Measured")]
    Measured,
    #[serde(rename = "X", alias = "NotMeasured")]
    NotMeasured,
}

impl MeasuredFlag {
    pub fn label(&self) -> &'static str {
        match self {
            MeasuredFlag::Measured => "측정",
            MeasuredFlag::NotMeasured => "미측정",
        }
    }
}

impl From<bool> for MeasuredFlag {
    fn from(measured: bool) -> Self {
        if measured {
            MeasuredFlag::Measured
        } else {
            MeasuredFlag::NotMeasured
        }
    }
}

/// 현장 측정값. 온도는 °C, 유량은 CMH.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurement {
    /// 냉수 유량 측정 여부
    pub cold_water_flow_measured: MeasuredFlag,
    /// 입열량 측정 여부
    pub input_heat_measured: MeasuredFlag,
    /// 증발기 냉수 유량
    pub evap_flow: f64,
    /// 냉수 입구 온도
    pub evap_inlet: f64,
    /// 냉수 출구 온도
    pub evap_outlet: f64,
    /// 소비전력(kW) 또는 연료 소비량
    pub fuel_consumption: f64,
    /// 응축기 냉각수 유량
    pub condenser_flow: f64,
    /// 냉각수 입구 온도
    pub condenser_inlet: f64,
    /// 냉각수 출구 온도
    pub condenser_outlet: f64,
}

/// 보정에 사용할 냉각수 측정 온도 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CorrectionRef {
    #[default]
    #[serde(rename = "냉각수 출구", alias = "CondenserOutlet")]
    CondenserOutlet,
    #[serde(rename = "냉각수 입구", alias = "CondenserInlet")]
    CondenserInlet,
}

impl CorrectionRef {
    pub fn label(&self) -> &'static str {
        match self {
            CorrectionRef::CondenserOutlet => "냉각수 출구",
            CorrectionRef::CondenserInlet => "냉각수 입구",
        }
    }
}

/// 보정 기준 온도.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorrectionConfig {
    /// 보정 기준 냉수 출구 온도(°C)
    pub target_cold_outlet: f64,
    /// 보정 기준 냉각수 온도(°C)
    pub target_cooling_ref_temp: f64,
    /// 보정 기준 냉각수 위치
    pub correction_ref: CorrectionRef,
}

/// 진단 입력 전체. 입력이 바뀌면 부분 수정 대신 새 값을 만들어 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticInput {
    pub general: GeneralInfo,
    pub spec: Specification,
    pub measurement: Measurement,
    pub config: CorrectionConfig,
}

impl DiagnosticInput {
    /// 초기화 상태. 모든 수치 0, 터보, 두 플래그 모두 측정, 냉각수 출구 기준.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 직화식 냉온수기 현장 측정 예시.
    pub fn sample() -> Self {
        Self {
            general: GeneralInfo {
                site_name: "서울 마포 센터".into(),
                diagnosis_date: "2024-05-20".into(),
                profile: EquipmentProfile::new(ProductType::DirectFired),
                manufacturer: "범양".into(),
                manufacturing_year: "2001".into(),
            },
            spec: Specification {
                cooling_capacity: 120.0,
                cooling_input: 106.0,
                cold_water_flow: 74.0,
                heating_capacity: 120_000.0,
                heating_input: 124.0,
                heating_water_flow: 0.0,
                cooling_water_flow: 92.0,
            },
            measurement: Measurement {
                cold_water_flow_measured: MeasuredFlag::Measured,
                input_heat_measured: MeasuredFlag::Measured,
                evap_flow: 57.0,
                evap_inlet: 13.9,
                evap_outlet: 9.0,
                fuel_consumption: 89.5,
                condenser_flow: 127.0,
                condenser_inlet: 30.1,
                condenser_outlet: 32.9,
            },
            config: CorrectionConfig {
                target_cold_outlet: 7.0,
                target_cooling_ref_temp: 37.0,
                correction_ref: CorrectionRef::CondenserOutlet,
            },
        }
    }

    pub fn profile(&self) -> &EquipmentProfile {
        &self.general.profile
    }

    pub fn evaluate(&self) -> DiagnosticResult {
        cop::evaluate(&self.general.profile, &self.spec, &self.measurement, &self.config)
    }
}
