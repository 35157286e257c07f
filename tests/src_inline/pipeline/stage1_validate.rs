use super::*;

fn probs(pairs: &[(&str, f64)]) -> ProbabilityMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_label_space_order() {
    let policy = TriagePolicy::chest_v1();
    let input = probs(&[("Mass", 0.4), ("Atelectasis", 0.1)]);
    let out = validate_probabilities(&input, &policy).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].category, "Atelectasis");
    assert_eq!(out[0].index, 0);
    assert_eq!(out[1].category, "Mass");
    assert_eq!(out[1].index, 16);
    assert_eq!(out[1].probability, 0.4);
}

#[test]
fn test_empty_input_is_not_an_error() {
    let policy = TriagePolicy::chest_v1();
    let out = validate_probabilities(&ProbabilityMap::new(), &policy).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_rejects_non_finite() {
    let policy = TriagePolicy::chest_v1();
    let err = validate_probabilities(&probs(&[("Edema", f64::NAN)]), &policy).unwrap_err();
    assert_eq!(
        err,
        InputValidationError::NonFinite {
            category: "Edema".to_string()
        }
    );
    assert!(validate_probabilities(&probs(&[("Edema", f64::INFINITY)]), &policy).is_err());
}

#[test]
fn test_rejects_out_of_range() {
    let policy = TriagePolicy::chest_v1();
    for bad in [-0.1, 1.2] {
        let err = validate_probabilities(&probs(&[("Edema", bad)]), &policy).unwrap_err();
        assert!(matches!(err, InputValidationError::OutOfRange { .. }));
    }
    assert!(validate_probabilities(&probs(&[("Edema", 0.0), ("Mass", 1.0)]), &policy).is_ok());
}

#[test]
fn test_categories_outside_label_space_are_skipped() {
    let policy = TriagePolicy::chest_v1();
    let input = probs(&[("Enlarged Cardiomediastinum", 0.4), ("Edema", 0.2)]);
    let out = validate_probabilities(&input, &policy).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].category, "Edema");
    assert_eq!(out[0].index, 4);

    let only_unknown = probs(&[("Dragon", 0.5)]);
    assert!(validate_probabilities(&only_unknown, &policy).unwrap().is_empty());
}

#[test]
fn test_unknown_category_values_still_checked() {
    let policy = TriagePolicy::chest_v1();
    let err = validate_probabilities(&probs(&[("Dragon", 1.5)]), &policy).unwrap_err();
    assert!(matches!(err, InputValidationError::OutOfRange { .. }));
    assert!(validate_probabilities(&probs(&[("Dragon", f64::NAN)]), &policy).is_err());
}
