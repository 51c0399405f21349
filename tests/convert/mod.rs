use outcome_rail::convert::*;
use outcome_rail::{EmptyErrorList, Error, ErrorVec, Outcome};

#[test]
fn single_error_converts_to_failure() {
    let out: Outcome<i32> = Error::with_code("denied", "AUTH").into();
    assert!(out.is_failure());
    assert_eq!(out.errors(), [Error::with_code("denied", "AUTH")]);
}

#[test]
fn error_lists_convert_when_non_empty() {
    let out = Outcome::<()>::try_from(vec![Error::new("a"), Error::new("b")]).unwrap();
    assert_eq!(out.error_count(), 2);

    let small: ErrorVec<Error> = ErrorVec::from_vec(vec![Error::new("c")]);
    let out = Outcome::<()>::try_from(small).unwrap();
    assert_eq!(out.errors()[0].message(), "c");
}

#[test]
fn empty_error_lists_are_rejected() {
    assert_eq!(Outcome::<()>::try_from(Vec::<Error>::new()), Err(EmptyErrorList));
    assert_eq!(Outcome::<()>::try_from(ErrorVec::<Error>::new()), Err(EmptyErrorList));
}

#[test]
fn result_to_outcome_preserves_state() {
    let ok: Result<i32, &str> = Ok(3);
    assert_eq!(result_to_outcome(ok), Outcome::success(3));

    let err: Result<i32, Error> = Err(Error::with_code("fail", "F"));
    let out = result_to_outcome(err);
    assert_eq!(out.errors(), [Error::with_code("fail", "F")]);
}

#[test]
fn std_result_to_outcome_captures_messages() {
    let parsed = std_result_to_outcome("7".parse::<u8>());
    assert_eq!(parsed.value(), Some(&7));

    let source = "seven".parse::<u8>().unwrap_err();
    let failed = std_result_to_outcome::<u8, _>(Err(source.clone()));
    assert_eq!(failed.errors(), [Error::new(source.to_string())]);
}

#[test]
fn outcome_to_result_round_trip() {
    assert_eq!(outcome_to_result(Outcome::success("v")), Ok(Some("v")));

    let errors = outcome_to_result(Outcome::<()>::warn("w")).unwrap_err();
    assert_eq!(errors.as_slice(), [Error::new("w")]);

    let back: Outcome<i32> = Err::<i32, _>("x").into();
    assert!(back.is_failure());
}
