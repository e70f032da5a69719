use eitherway::convert::{
    either_to_option, either_to_result, lefts, option_to_either, result_to_either, rights,
};
use eitherway::{Either, OptionExt, ResultExt};

#[test]
fn option_fold_runs_exactly_one_branch() {
    assert_eq!(Some(3).fold(|| 0, |n| n * 10), 30);
    assert_eq!(None::<i32>.fold(|| -1, |n| n * 10), -1);
}

#[test]
fn option_fold_matches_either_fold_argument_order() {
    let from_option = Some("x").fold(|| "none", |v| v);
    let from_either = Either::<(), &str>::right("x").fold(|_| "none", |v| v);
    assert_eq!(from_option, from_either);
}

#[test]
fn option_into_either_promotes_absence_to_a_typed_failure() {
    let present: Either<&str, i32> = Some(1).into_either(|| "missing");
    assert_eq!(present, Either::right(1));

    let absent: Either<&str, i32> = None.into_either(|| "missing");
    assert_eq!(absent, Either::left("missing"));
}

#[test]
fn result_into_either_enters_the_algebra() {
    let ok: Either<&str, i32> = Ok(1).into_either();
    assert_eq!(ok, Either::right(1));

    let err: Either<&str, i32> = Err("boom").into_either();
    assert_eq!(err, Either::left("boom"));
}

#[test]
fn conversion_functions_round_trip() {
    let e = result_to_either(Ok::<_, &str>(5));
    assert_eq!(either_to_result(e), Ok(5));

    let e = option_to_either(Some(5), || "missing");
    assert_eq!(either_to_option(e), Some(5));

    let e: Either<&str, i32> = option_to_either(None, || "missing");
    assert_eq!(either_to_option(e), None);
}

#[test]
fn option_to_either_builds_the_left_lazily() {
    let mut built = false;
    let _ = option_to_either(Some(1), || {
        built = true;
        "missing"
    });
    assert!(!built);
}

#[test]
fn lefts_and_rights_partition_a_batch() {
    let batch = vec![
        Either::<&str, i32>::right(1),
        Either::left("a"),
        Either::right(2),
        Either::left("b"),
    ];

    assert_eq!(lefts(batch.clone()), vec!["a", "b"]);
    assert_eq!(rights(batch), vec![1, 2]);
}
