//! Integration tests for sf-hydraulics through its public API.

use sf_core::SfError;
use sf_core::numeric::{Tolerances, nearly_equal};
use sf_hydraulics::{
    HydraulicsError, SprinklerType, allowable_head_loss, application_intensity, efficiency,
    head_loss_hazen_williams, jet_throw_radius, jet_throw_radius_by_name,
    lateral_within_allowance, sprinkler_discharge,
};

#[test]
fn discharge_closed_form() {
    let (a, c, h) = (3.1e-5, 0.92, 28.0);
    let q = sprinkler_discharge(a, c, h).unwrap();
    assert_eq!(q, 4.4272 * a * c * h.sqrt());
}

#[test]
fn throw_radius_fixed_and_rotary_differ() {
    for (d, h) in [(3.0, 20.0), (5.5, 35.0), (8.0, 10.0)] {
        let fixed = jet_throw_radius(d, h, SprinklerType::Fixed).unwrap();
        let rotary = jet_throw_radius(d, h, SprinklerType::Rotary).unwrap();
        assert_ne!(fixed, rotary, "d = {d}, h = {h}");
    }
}

#[test]
fn unknown_sprinkler_name_is_invalid_argument() {
    let err = jet_throw_radius_by_name(4.0, 25.0, "micro").unwrap_err();
    let HydraulicsError::InvalidArgument { function, reason } = err;
    assert_eq!(function, "jet_throw_radius");
    assert!(reason.contains("micro"));
}

#[test]
fn intensity_and_efficiency_reference_values() {
    assert_eq!(application_intensity(10.0, 5.0, 4.0).unwrap(), 1800.0);
    assert_eq!(efficiency(20.0, 25.0).unwrap(), 80.0);
}

#[test]
fn hazen_williams_reference_value() {
    let hf = head_loss_hazen_williams(0.01, 0.1, 130.0, 100.0).unwrap();
    let expected = 10.67 * 0.1_f64.powf(-4.87) * (0.01_f64 / 130.0).powf(1.852) * 100.0;
    let tol = Tolerances::relative(1e-9);
    assert!(nearly_equal(hf, expected, tol));
}

#[test]
fn allowable_head_loss_reference_value() {
    assert_eq!(allowable_head_loss(30.0).unwrap(), 6.0);
}

#[test]
fn boundaries_are_errors_not_infinities() {
    assert!(head_loss_hazen_williams(0.01, 0.0, 130.0, 100.0).is_err());
    assert!(efficiency(20.0, 0.0).is_err());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = head_loss_hazen_williams(0.0123, 0.05, 140.0, 72.0).unwrap();
    let b = head_loss_hazen_williams(0.0123, 0.05, 140.0, 72.0).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());

    let a = jet_throw_radius(4.5, 30.0, SprinklerType::Fixed).unwrap();
    let b = jet_throw_radius(4.5, 30.0, SprinklerType::Fixed).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn lateral_design_check() {
    // 50 m of 50 mm PE at 1.5 L/s against a 25 mca service pressure
    let hf = head_loss_hazen_williams(0.0015, 0.05, 140.0, 50.0).unwrap();
    assert!(lateral_within_allowance(hf, 25.0).unwrap(), "hf = {hf}");

    // the same flow through 20 mm pipe blows the budget
    let hf = head_loss_hazen_williams(0.0015, 0.02, 140.0, 50.0).unwrap();
    assert!(!lateral_within_allowance(hf, 25.0).unwrap(), "hf = {hf}");
}

#[test]
fn errors_convert_into_core_error() {
    fn run() -> Result<f64, SfError> {
        Ok(efficiency(20.0, 0.0)?)
    }
    let err = run().unwrap_err();
    assert!(matches!(err, SfError::InvalidArg { .. }));
    assert!(err.to_string().contains("efficiency"));
}

#[test]
fn formulas_are_thread_safe() {
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            std::thread::spawn(move || {
                head_loss_hazen_williams(0.001 * i as f64, 0.1, 130.0, 100.0).unwrap()
            })
        })
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[1] > w[0]));
}
