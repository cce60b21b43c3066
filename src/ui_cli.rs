use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::chiller::{
    CorrectionConfig, CorrectionRef, DiagnosticInput, DiagnosticResult, EquipmentProfile,
    GeneralInfo, MeasuredFlag, Measurement, ProductType, Specification,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    General,
    Spec,
    Measurement,
    Correction,
    Results,
    Save,
    Load,
    Reset,
    Exit,
}

/// 상단 요약(보정 COP, 상태, 저하율)을 표시한다.
pub fn print_header(result: &DiagnosticResult) {
    println!(
        "\n[보정 COP {:.2} | COP {:.2} | {} | 성능 저하율 {:.1}%]",
        result.correction_cop,
        result.current_cop,
        result.status().label(),
        result.performance_drop_pct
    );
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(reader: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    println!("\n=== Chiller COP Toolbox ===");
    println!("1) 일반 현황");
    println!("2) 사양 (Spec)");
    println!("3) 측정 데이터 입력");
    println!("4) 보정 기준");
    println!("5) 상세 분석 결과");
    println!("6) 저장하기");
    println!("7) 파일 불러오기");
    println!("8) 초기화");
    println!("0) 종료");
    loop {
        let sel = read_line(reader, "메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::General),
            "2" => return Ok(MenuChoice::Spec),
            "3" => return Ok(MenuChoice::Measurement),
            "4" => return Ok(MenuChoice::Correction),
            "5" => return Ok(MenuChoice::Results),
            "6" => return Ok(MenuChoice::Save),
            "7" => return Ok(MenuChoice::Load),
            "8" => return Ok(MenuChoice::Reset),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 일반 현황을 입력받아 새 값을 돌려준다. 엔터만 누르면 기존 값을 유지한다.
pub fn edit_general(
    reader: &mut impl BufRead,
    current: &GeneralInfo,
) -> Result<GeneralInfo, AppError> {
    println!("\n-- 일반 현황 --");
    let site_name = read_text_or(reader, "현장명", &current.site_name)?;
    let diagnosis_date = read_text_or(reader, "진단일자", &current.diagnosis_date)?;
    let product_type = read_product_type(reader, current.profile.product_type)?;
    let manufacturer = read_text_or(reader, "제조사", &current.manufacturer)?;
    let manufacturing_year =
        read_text_or(reader, "제조년월", &current.manufacturing_year)?;
    Ok(GeneralInfo {
        site_name,
        diagnosis_date,
        profile: EquipmentProfile::new(product_type),
        manufacturer,
        manufacturing_year,
    })
}

/// 정격 사양을 입력받는다. 난방 사양은 직화식일 때만 묻는다.
pub fn edit_spec(
    reader: &mut impl BufRead,
    current: &Specification,
    product: ProductType,
) -> Result<Specification, AppError> {
    println!("\n-- 사양 (Spec) --");
    let unit = product.input_heat_unit().symbol();
    let cooling_capacity = read_f64_or(reader, "능력 (USRT)", current.cooling_capacity)?;
    let cooling_input =
        read_f64_or(reader, &format!("입열량 ({unit})"), current.cooling_input)?;
    let cold_water_flow = read_f64_or(reader, "냉수 유량 (CMH)", current.cold_water_flow)?;
    let (heating_capacity, heating_input, heating_water_flow) =
        if product == ProductType::DirectFired {
            (
                read_f64_or(reader, "난방 능력 (kcal/h)", current.heating_capacity)?,
                read_f64_or(reader, "난방 입열량 (Nm3/h)", current.heating_input)?,
                read_f64_or(reader, "온수 유량 (CMH)", current.heating_water_flow)?,
            )
        } else {
            (
                current.heating_capacity,
                current.heating_input,
                current.heating_water_flow,
            )
        };
    let cooling_water_flow =
        read_f64_or(reader, "냉각수 유량 (CMH)", current.cooling_water_flow)?;
    Ok(Specification {
        cooling_capacity,
        cooling_input,
        cold_water_flow,
        heating_capacity,
        heating_input,
        heating_water_flow,
        cooling_water_flow,
    })
}

/// 측정 데이터를 입력받는다.
pub fn edit_measurement(
    reader: &mut impl BufRead,
    current: &Measurement,
    product: ProductType,
) -> Result<Measurement, AppError> {
    println!("\n-- 측정 데이터 입력 --");
    let cold_water_flow_measured =
        read_flag(reader, "냉수 유량 측정", current.cold_water_flow_measured)?;
    let input_heat_measured =
        read_flag(reader, "입열량 측정", current.input_heat_measured)?;
    println!("[증발기(Eva.)]");
    let evap_flow = read_f64_or(reader, "냉수 유량 (CMH)", current.evap_flow)?;
    let evap_inlet = read_f64_or(reader, "냉수 입구 (°C)", current.evap_inlet)?;
    let evap_outlet = read_f64_or(reader, "냉수 출구 (°C)", current.evap_outlet)?;
    println!("[에너지 소비량]");
    let consumption_label = if product.is_electrically_driven() {
        "소비전력 (kW)".to_string()
    } else {
        format!("연료소비량 ({})", product.input_heat_unit().symbol())
    };
    let fuel_consumption =
        read_f64_or(reader, &consumption_label, current.fuel_consumption)?;
    println!("[응축기(Cond.)]");
    let condenser_flow = read_f64_or(reader, "냉각수 유량 (CMH)", current.condenser_flow)?;
    let condenser_inlet = read_f64_or(reader, "입구 온도 (°C)", current.condenser_inlet)?;
    let condenser_outlet = read_f64_or(reader, "출구 온도 (°C)", current.condenser_outlet)?;
    Ok(Measurement {
        cold_water_flow_measured,
        input_heat_measured,
        evap_flow,
        evap_inlet,
        evap_outlet,
        fuel_consumption,
        condenser_flow,
        condenser_inlet,
        condenser_outlet,
    })
}

/// 보정 기준을 입력받는다.
pub fn edit_correction(
    reader: &mut impl BufRead,
    current: &CorrectionConfig,
) -> Result<CorrectionConfig, AppError> {
    println!("\n-- 보정 기준 --");
    let target_cold_outlet =
        read_f64_or(reader, "보정 기준 냉수 출구 (°C)", current.target_cold_outlet)?;
    println!(
        "보정 기준 냉각수 위치: 1=출구 2=입구 (현재: {})",
        current.correction_ref.label()
    );
    let sel = read_line(reader, "선택(엔터=유지): ")?;
    let correction_ref = match sel.trim() {
        "1" => CorrectionRef::CondenserOutlet,
        "2" => CorrectionRef::CondenserInlet,
        _ => current.correction_ref,
    };
    let target_cooling_ref_temp = read_f64_or(
        reader,
        "보정 기준 냉각수 온도 (°C)",
        current.target_cooling_ref_temp,
    )?;
    Ok(CorrectionConfig {
        target_cold_outlet,
        target_cooling_ref_temp,
        correction_ref,
    })
}

/// 새 입력 레코드를 구성한다. 편집 결과는 항상 통째로 교체한다.
pub fn rebuild(
    reader: &mut impl BufRead,
    input: &DiagnosticInput,
    choice: MenuChoice,
) -> Result<DiagnosticInput, AppError> {
    let product = input.general.profile.product_type;
    let next = match choice {
        MenuChoice::General => DiagnosticInput {
            general: edit_general(reader, &input.general)?,
            ..input.clone()
        },
        MenuChoice::Spec => DiagnosticInput {
            spec: edit_spec(reader, &input.spec, product)?,
            ..input.clone()
        },
        MenuChoice::Measurement => DiagnosticInput {
            measurement: edit_measurement(reader, &input.measurement, product)?,
            ..input.clone()
        },
        MenuChoice::Correction => DiagnosticInput {
            config: edit_correction(reader, &input.config)?,
            ..input.clone()
        },
        _ => input.clone(),
    };
    Ok(next)
}

pub fn read_path(reader: &mut impl BufRead, prompt: &str) -> Result<PathBuf, AppError> {
    let s = read_line(reader, prompt)?;
    Ok(PathBuf::from(s.trim()))
}

/// 예/아니오 확인. `y`로 시작하면 참.
pub fn confirm(reader: &mut impl BufRead, prompt: &str) -> Result<bool, AppError> {
    let s = read_line(reader, &format!("{prompt} (y/N): "))?;
    Ok(s.trim().to_lowercase().starts_with('y'))
}

fn read_line(reader: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_text_or(
    reader: &mut impl BufRead,
    label: &str,
    current: &str,
) -> Result<String, AppError> {
    let s = read_line(reader, &format!("{label} [{current}]: "))?;
    let s = s.trim();
    Ok(if s.is_empty() {
        current.to_string()
    } else {
        s.to_string()
    })
}

fn read_f64_or(reader: &mut impl BufRead, label: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(reader, &format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_flag(
    reader: &mut impl BufRead,
    label: &str,
    current: MeasuredFlag,
) -> Result<MeasuredFlag, AppError> {
    let s = read_line(reader, &format!("{label} 1=측정 2=미측정 [{}]: ", current.label()))?;
    Ok(match s.trim() {
        "1" => MeasuredFlag::Measured,
        "2" => MeasuredFlag::NotMeasured,
        _ => current,
    })
}

fn read_product_type(
    reader: &mut impl BufRead,
    current: ProductType,
) -> Result<ProductType, AppError> {
    let options: Vec<String> = ProductType::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}={}", i + 1, p.label()))
        .collect();
    println!("제품구분: {}", options.join(" "));
    let sel = read_line(reader, &format!("선택 [{}]: ", current.label()))?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ProductType::ALL.get(i).copied());
    Ok(picked.unwrap_or(current))
}
