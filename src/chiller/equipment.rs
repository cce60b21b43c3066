use serde::{Deserialize, Serialize};

/// 1 USRT를 kcal/h로 환산하는 계수.
pub const KCAL_PER_USRT: f64 = 3024.0;

/// 체적유량(m³/h)을 질량 기준 열량 계산에 쓰기 위한 물 환산 계수(kg/m³).
pub const WATER_KG_PER_M3: f64 = 1000.0;

/// 직화식 난방 효율 계산에 쓰는 가스 발열량(kcal/Nm³).
pub const GAS_KCAL_PER_NM3: f64 = 10_400.0;

/// 냉동기 제품 구분. 직렬화 라벨은 현장 기록 양식(한글)을 그대로 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "터보", alias = "Turbo")]
    Turbo,
    #[serde(rename = "스크류", alias = "Screw")]
    Screw,
    #[serde(rename = "ISC", alias = "Isc")]
    Isc,
    #[serde(rename = "직화식", alias = "DirectFired")]
    DirectFired,
    #[serde(rename = "중온수", alias = "MidTempWater")]
    MidTempWater,
    #[serde(rename = "스팀", alias = "Steam")]
    Steam,
}

impl ProductType {
    /// 선택 메뉴 순서대로 나열한 전체 제품 구분.
    pub const ALL: [ProductType; 6] = [
        ProductType::Turbo,
        ProductType::Screw,
        ProductType::Isc,
        ProductType::DirectFired,
        ProductType::MidTempWater,
        ProductType::Steam,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Turbo => "터보",
            ProductType::Screw => "스크류",
            ProductType::Isc => "ISC",
            ProductType::DirectFired => "직화식",
            ProductType::MidTempWater => "중온수",
            ProductType::Steam => "스팀",
        }
    }

    /// 전동기 구동(터보/스크류/ISC) 여부. 나머지는 연료·열원 구동이다.
    pub fn is_electrically_driven(&self) -> bool {
        match self {
            ProductType::Turbo | ProductType::Screw | ProductType::Isc => true,
            ProductType::DirectFired | ProductType::MidTempWater | ProductType::Steam => false,
        }
    }

    /// 입열량 단위.
    pub fn input_heat_unit(&self) -> InputHeatUnit {
        match self {
            ProductType::Turbo | ProductType::Screw | ProductType::Isc => InputHeatUnit::Kilowatt,
            ProductType::DirectFired => InputHeatUnit::GasVolume,
            ProductType::MidTempWater | ProductType::Steam => InputHeatUnit::HeatQuantity,
        }
    }

    /// 입열량 1단위당 열량 환산 계수(kcal).
    pub fn heat_equivalent_kcal(&self) -> f64 {
        self.input_heat_unit().kcal_per_unit()
    }

    /// 온도 보정 계수(1/°C). 전동기 구동 0.025, 그 외 0.015.
    pub fn correction_coefficient(&self) -> f64 {
        if self.is_electrically_driven() {
            0.025
        } else {
            0.015
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 정격/측정 입열량의 단위. 직렬화 값은 화면에 쓰는 단위 기호와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputHeatUnit {
    /// 소비전력 kW
    #[serde(rename = "kW", alias = "Kilowatt")]
    Kilowatt,
    /// 가스 소비량 Nm³/h
    #[serde(rename = "Nm3/h", alias = "GasVolume")]
    GasVolume,
    /// 열량 Mcal
    #[serde(rename = "Mcal", alias = "HeatQuantity")]
    HeatQuantity,
}

impl InputHeatUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            InputHeatUnit::Kilowatt => "kW",
            InputHeatUnit::GasVolume => "Nm3/h",
            InputHeatUnit::HeatQuantity => "Mcal",
        }
    }

    pub fn kcal_per_unit(&self) -> f64 {
        match self {
            InputHeatUnit::Kilowatt => 860.0,
            InputHeatUnit::GasVolume => GAS_KCAL_PER_NM3,
            InputHeatUnit::HeatQuantity => 1000.0,
        }
    }
}

/// 진단 대상 장비의 분류. 한 번의 진단 동안 바뀌지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EquipmentProfile {
    pub product_type: ProductType,
}

impl EquipmentProfile {
    pub fn new(product_type: ProductType) -> Self {
        Self { product_type }
    }

    pub fn is_electrically_driven(&self) -> bool {
        self.product_type.is_electrically_driven()
    }
}

impl Default for EquipmentProfile {
    fn default() -> Self {
        Self::new(ProductType::Turbo)
    }
}
