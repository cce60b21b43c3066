//! 임의 입력에 대한 진단 엔진 성질 검사.
use chiller_cop_toolbox::chiller::{
    evaluate, CopBranch, CorrectionConfig, CorrectionRef, DiagnosticResult, EquipmentProfile,
    MeasuredFlag, Measurement, ProductType, Specification,
};
use proptest::prelude::*;

fn value() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => -1.0e6..1.0e6f64,
        1 => Just(0.0),
        1 => -50.0..50.0f64,
    ]
}

fn product() -> impl Strategy<Value = ProductType> {
    prop::sample::select(ProductType::ALL.to_vec())
}

fn flag() -> impl Strategy<Value = MeasuredFlag> {
    any::<bool>().prop_map(MeasuredFlag::from)
}

fn correction_ref() -> impl Strategy<Value = CorrectionRef> {
    prop_oneof![
        Just(CorrectionRef::CondenserOutlet),
        Just(CorrectionRef::CondenserInlet)
    ]
}

prop_compose! {
    fn specification()(
        v in prop::collection::vec(value(), 7)
    ) -> Specification {
        Specification {
            cooling_capacity: v[0],
            cooling_input: v[1],
            cold_water_flow: v[2],
            heating_capacity: v[3],
            heating_input: v[4],
            heating_water_flow: v[5],
            cooling_water_flow: v[6],
        }
    }
}

prop_compose! {
    fn measurement()(
        cold in flag(),
        heat in flag(),
        v in prop::collection::vec(value(), 7)
    ) -> Measurement {
        Measurement {
            cold_water_flow_measured: cold,
            input_heat_measured: heat,
            evap_flow: v[0],
            evap_inlet: v[1],
            evap_outlet: v[2],
            fuel_consumption: v[3],
            condenser_flow: v[4],
            condenser_inlet: v[5],
            condenser_outlet: v[6],
        }
    }
}

prop_compose! {
    fn correction()(
        cold in value(),
        cooling in value(),
        reference in correction_ref()
    ) -> CorrectionConfig {
        CorrectionConfig {
            target_cold_outlet: cold,
            target_cooling_ref_temp: cooling,
            correction_ref: reference,
        }
    }
}

fn numeric_fields(r: &DiagnosticResult) -> [f64; 14] {
    [
        r.spec_cop,
        r.heating_efficiency,
        r.measured_evap_heat,
        r.measured_usrt,
        r.measured_input_heat,
        r.measured_condenser_heat,
        r.current_cop,
        r.correction_factor,
        r.correction_cop,
        r.performance_drop_pct,
        r.load_ratio_pct,
        r.io_ratio_pct,
        r.flow_ratio_cold_pct,
        r.flow_ratio_cooling_pct,
    ]
}

proptest! {
    #[test]
    fn every_field_is_finite(
        p in product(),
        s in specification(),
        m in measurement(),
        c in correction()
    ) {
        let res = evaluate(&EquipmentProfile::new(p), &s, &m, &c);
        for v in numeric_fields(&res) {
            prop_assert!(v.is_finite(), "non-finite field in {res:?}");
        }
    }

    #[test]
    fn evaluation_is_deterministic(
        p in product(),
        s in specification(),
        m in measurement(),
        c in correction()
    ) {
        let profile = EquipmentProfile::new(p);
        let a = evaluate(&profile, &s, &m, &c);
        let b = evaluate(&profile, &s, &m, &c);
        let bits_a: Vec<u64> = numeric_fields(&a).iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = numeric_fields(&b).iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(bits_a, bits_b);
        prop_assert_eq!(a.cop_branch, b.cop_branch);
    }

    #[test]
    fn branch_follows_flags(
        p in product(),
        s in specification(),
        m in measurement(),
        c in correction()
    ) {
        let res = evaluate(&EquipmentProfile::new(p), &s, &m, &c);
        prop_assert_eq!(
            res.cop_branch,
            CopBranch::select(m.cold_water_flow_measured, m.input_heat_measured)
        );
        match res.cop_branch {
            CopBranch::Unavailable => {
                prop_assert_eq!(res.current_cop, 0.0);
            }
            CopBranch::EvaporatorBalance
                if res.measured_condenser_heat <= res.measured_evap_heat =>
            {
                prop_assert_eq!(res.current_cop, 0.0);
            }
            _ => {}
        }
    }

    #[test]
    fn zero_rated_values_zero_their_ratios(
        p in product(),
        s in specification(),
        m in measurement(),
        c in correction()
    ) {
        let spec = Specification {
            cooling_input: 0.0,
            cold_water_flow: 0.0,
            cooling_water_flow: 0.0,
            ..s
        };
        let res = evaluate(&EquipmentProfile::new(p), &spec, &m, &c);
        prop_assert_eq!(res.spec_cop, 0.0);
        prop_assert_eq!(res.performance_drop_pct, 0.0);
        prop_assert_eq!(res.flow_ratio_cold_pct, 0.0);
        prop_assert_eq!(res.flow_ratio_cooling_pct, 0.0);
    }
}
