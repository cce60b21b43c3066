//! 냉동기(칠러) 성능 진단 계산 모듈 모음.
//! 장비 구분/환산 상수, 입력 레코드, COP 계산, 상태 구분으로 구성한다.

pub mod cop;
pub mod equipment;
pub mod input;
pub mod status;

pub use cop::{evaluate, CopBranch, DiagnosticResult};
pub use equipment::{EquipmentProfile, InputHeatUnit, ProductType};
pub use input::{
    CorrectionConfig, CorrectionRef, DiagnosticInput, GeneralInfo, MeasuredFlag, Measurement,
    Specification,
};
pub use status::PerformanceStatus;
