use pretty_assertions::assert_eq;
use tm_core::{ArgSet, MatchError};
use tm_variable::{
    build_from_text, build_variable, make_variable, scenarios, Error, Precision, Shape, Unit,
    Values, Variances,
};

fn dump(variable: &tm_variable::Variable) -> String {
    variable.to_string()
}

#[test]
fn shape_and_unit_only() {
    let variable = make_variable!(f64; Shape::new(vec![1]), Unit(1));
    assert_eq!(variable.unit(), Unit(1));
    assert_eq!(variable.shape(), &[1]);
    assert!(variable.values_as::<f64>().unwrap().is_empty());
    assert!(!variable.has_variances());
    assert_eq!(
        dump(&variable),
        "Unit: 1\nShape: [1,  ]\nHolder: [  ]\nNo variances\n\n"
    );
}

#[test]
fn values_supplied_variances_omitted() {
    let variable = make_variable!(f64;
        Shape::new(vec![1, 23]),
        Values::<f64>::new(vec![1.0, 4.0, 5.0]),
        Unit(1),
    );
    assert_eq!(variable.unit(), Unit(1));
    assert_eq!(variable.shape(), &[1, 23]);
    assert_eq!(variable.values_as::<f64>().unwrap().as_slice(), &[1.0, 4.0, 5.0]);
    assert!(variable.variances().is_none());
    assert_eq!(
        dump(&variable),
        "Unit: 1\nShape: [1, 23,  ]\nHolder: [ 1, 4, 5,  ]\nNo variances\n\n"
    );
}

#[test]
fn variances_supplied_values_omitted() {
    let variable = make_variable!(f64;
        Shape::new(vec![1, 2, 3]),
        Variances::<f64>::new(vec![6.0, 7.0, 8.0]),
        Unit(23),
    );
    assert!(variable.values_as::<f64>().unwrap().is_empty());
    assert_eq!(
        variable.variances_as::<f64>().unwrap().as_slice(),
        &[6.0, 7.0, 8.0]
    );
    assert_eq!(
        dump(&variable),
        "Unit: 23\nShape: [1, 2, 3,  ]\nHolder: [  ]\nHolder: [ 6, 7, 8,  ]\n\n"
    );
}

#[test]
fn no_arguments_gives_all_defaults() {
    let variable = make_variable!(f32);
    assert_eq!(variable.unit(), Unit::default());
    assert!(variable.shape().is_empty());
    assert!(variable.values_as::<f32>().unwrap().is_empty());
    assert!(!variable.has_variances());
}

#[test]
fn permuted_arguments_produce_identical_dumps() {
    let a = make_variable!(f64;
        Unit(5),
        Shape::new(vec![2]),
        Values::<f64>::new(vec![0.5]),
        Variances::<f64>::new(vec![0.25]),
    );
    let b = make_variable!(f64;
        Variances::<f64>::new(vec![0.25]),
        Values::<f64>::new(vec![0.5]),
        Shape::new(vec![2]),
        Unit(5),
    );
    assert_eq!(dump(&a), dump(&b));
}

#[test]
fn demonstration_scenarios_dump_in_order() {
    let output: String = scenarios().iter().map(|s| s.run().to_string()).collect();
    let expected = [
        "Unit: 1\nShape: [1,  ]\nHolder: [  ]\nNo variances\n\n",
        "Unit: 0\nShape: [1,  ]\nHolder: [  ]\nNo variances\n\n",
        "Unit: 1\nShape: [1, 23,  ]\nHolder: [ 1, 4, 5,  ]\nNo variances\n\n",
        "Unit: 0\nShape: [1,  ]\nHolder: [  ]\nNo variances\n\n",
        "Unit: 23\nShape: [1, 2, 3,  ]\nHolder: [  ]\nHolder: [ 6, 7, 8,  ]\n\n",
        "Unit: 0\nShape: [ ]\nHolder: [  ]\nNo variances\n\n",
        "Unit: 0\nShape: [ ]\nHolder: [ 1, 2, 3,  ]\nNo variances\n\n",
        "Unit: 3\nShape: [ ]\nHolder: [  ]\nNo variances\n\n",
        "Unit: 1\nShape: [ ]\nHolder: [ 1, 4, 5,  ]\nNo variances\n\n",
    ]
    .concat();
    assert_eq!(scenarios().len(), 9);
    assert_eq!(output, expected);
}

#[test]
fn runtime_build_matches_macro_build() {
    let args = ArgSet::new()
        .with(Unit(1))
        .with(Values::<f64>::new(vec![1.0, 4.0, 5.0]))
        .with(Shape::new(vec![1, 23]));
    let runtime = build_variable(args, Precision::F64).unwrap();
    let fixed = make_variable!(f64;
        Shape::new(vec![1, 23]),
        Values::<f64>::new(vec![1.0, 4.0, 5.0]),
        Unit(1),
    );
    assert_eq!(dump(&runtime), dump(&fixed));
}

#[test]
fn text_arguments_build_a_variable() {
    let variable = build_from_text(&["variances=6,7,8", "unit=23", "shape=1,2,3"], Precision::F32)
        .unwrap();
    assert_eq!(variable.element_type(), "f32");
    assert_eq!(
        variable.variances_as::<f32>().unwrap().as_slice(),
        &[6.0, 7.0, 8.0]
    );
}

#[test]
fn empty_variances_from_text_are_absent() {
    let variable = build_from_text(&["variances="], Precision::F64).unwrap();
    assert!(!variable.has_variances());
}

#[test]
fn duplicate_text_argument_is_rejected() {
    let err = build_from_text(&["unit=1", "shape=2", "unit=3"], Precision::F64).unwrap_err();
    match err {
        Error::Match(MatchError::Duplicate {
            field,
            first,
            second,
            ..
        }) => {
            assert_eq!(field, "unit");
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("expected duplicate, got {:?}", other),
    }
}

#[test]
fn mismatched_precision_is_unrecognized() {
    let err = build_from_text(&["unit=1", "values:f32=1,2"], Precision::F64).unwrap_err();
    match err {
        Error::Match(MatchError::Unrecognized {
            position,
            type_name,
            ..
        }) => {
            assert_eq!(position, 1);
            assert!(type_name.contains("Values<f32>"), "{}", type_name);
        }
        other => panic!("expected unrecognized, got {:?}", other),
    }
}
