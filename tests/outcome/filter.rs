use outcome_rail::{filter_failed, filter_successful, partition, Error, Outcome};

fn batch() -> Vec<Outcome<u32>> {
    vec![
        Outcome::success(1),
        Outcome::fail("bad", "E1"),
        Outcome::success_empty(),
        Outcome::warn("w"),
        Outcome::success(5),
    ]
}

#[test]
fn filter_successful_keeps_order() {
    let ok = filter_successful(batch());
    assert_eq!(ok, vec![Outcome::success(1), Outcome::success_empty(), Outcome::success(5)]);
}

#[test]
fn filter_failed_keeps_order() {
    let failed = filter_failed(batch());
    let messages: Vec<_> = failed.iter().map(|o| o.errors()[0].message()).collect();
    assert_eq!(messages, ["bad", "w"]);
}

#[test]
fn filtering_by_reference_leaves_input_untouched() {
    let input = batch();
    let ok: Vec<&Outcome<u32>> = filter_successful(&input);
    let failed: Vec<&Outcome<u32>> = filter_failed(input.iter());
    assert_eq!(ok.len() + failed.len(), input.len());
    assert_eq!(input, batch());
}

#[test]
fn partition_matches_both_filters() {
    let (ok, failed) = partition(batch());
    assert_eq!(ok, filter_successful(batch()));
    assert_eq!(failed, filter_failed(batch()));
}

#[test]
fn filters_on_empty_input_are_empty() {
    let empty: Vec<Outcome<u8>> = Vec::new();
    assert!(filter_successful(empty.clone()).is_empty());
    assert!(filter_failed(empty).is_empty());
}

#[test]
fn filter_observes_in_place_mutation() {
    let mut input = batch();
    input[0].add_error(Error::new("late"));
    input[1].clear_errors();
    assert_eq!(filter_failed(&input).len(), 2);
    assert!(filter_successful(&input)[0].errors().is_empty());
}
