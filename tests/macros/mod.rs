use outcome_rail::{rail_error, rail_fail, Error, Outcome};

#[test]
fn rail_error_formats_without_code() {
    let id = 42;
    let err = rail_error!("user {} not found", id);
    assert_eq!(err, Error::new("user 42 not found"));
}

#[test]
fn rail_error_accepts_code() {
    let err = rail_error!(code = "NOT_FOUND", "user {id} not found", id = 7);
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.message(), "user 7 not found");
}

#[test]
fn rail_error_code_can_be_an_expression() {
    let code = String::from("DYN");
    let err = rail_error!(code = code.clone(), "static message");
    assert_eq!(err.code(), code);
}

#[test]
fn rail_fail_builds_failed_outcome() {
    let out: Outcome<u8> = rail_fail!(code = "LIMIT", "{} > {}", 12, 10);
    assert!(out.is_failure());
    assert_eq!(out.errors(), [Error::with_code("12 > 10", "LIMIT")]);

    let plain: Outcome<()> = rail_fail!("no code");
    assert_eq!(plain.errors()[0].code(), "");
}
