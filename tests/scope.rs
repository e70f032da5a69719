use core::cell::Cell;

use eitherway::scope::run;
use eitherway::Either;

#[test]
fn body_value_is_wrapped_as_right_when_nothing_fails() {
    let result: Either<&str, i32> = run(|s| {
        let a = s.bind(Either::right(40))?;
        let b = s.bind(Either::right(2))?;
        Ok(a + b)
    });
    assert_eq!(result, Either::right(42));
}

#[test]
fn first_left_wins_and_later_steps_never_execute() {
    let steps = Cell::new(0);

    let result: Either<&str, i32> = run(|s| {
        steps.set(steps.get() + 1);
        let a = s.bind(Either::right(1))?;

        steps.set(steps.get() + 1);
        let b: i32 = s.bind(Either::left("second step failed"))?;

        steps.set(steps.get() + 1);
        let c = s.bind(Either::right(3))?;

        Ok(a + b + c)
    });

    assert_eq!(result, Either::left("second step failed"));
    assert_eq!(steps.get(), 2, "the third step must not run");
}

#[test]
fn ensure_passes_and_fails_by_condition() {
    let ok: Either<&str, ()> = run(|s| s.ensure(1 < 2, || "broken"));
    assert_eq!(ok, Either::right(()));

    let failed: Either<&str, ()> = run(|s| s.ensure(2 < 1, || "broken"));
    assert_eq!(failed, Either::left("broken"));
}

#[test]
fn ensure_or_else_is_lazy() {
    let evaluated = Cell::new(false);

    let result: Either<&str, i32> = run(|s| {
        s.ensure(true, || {
            evaluated.set(true);
            "never built"
        })?;
        Ok(1)
    });

    assert_eq!(result, Either::right(1));
    assert!(!evaluated.get());
}

#[test]
fn ensure_some_unwraps_or_short_circuits() {
    let found: Either<&str, i32> = run(|s| {
        let n = s.ensure_some(Some(5), || "absent")?;
        Ok(n * 2)
    });
    assert_eq!(found, Either::right(10));

    let absent: Either<&str, i32> = run(|s| {
        let n = s.ensure_some(None::<i32>, || "absent")?;
        Ok(n * 2)
    });
    assert_eq!(absent, Either::left("absent"));
}

#[test]
fn bind_result_accepts_collaborator_results() {
    let result: Either<String, i32> = run(|s| {
        let n = s.bind_result("21".parse::<i32>().map_err(|e| e.to_string()))?;
        Ok(n * 2)
    });
    assert_eq!(result, Either::right(42));
}

#[test]
fn scopes_are_independent_across_invocations() {
    let first: Either<&str, i32> = run(|s| s.bind(Either::left("first scope")));
    let second: Either<&str, i32> = run(|s| s.bind(Either::right(2)));

    assert_eq!(first, Either::left("first scope"));
    assert_eq!(second, Either::right(2));
}

#[test]
fn scope_composes_with_combinators_on_its_result() {
    let result: Either<&str, i32> = run(|s| {
        let n = s.bind(Either::right(10))?;
        Ok(n)
    });

    let rendered = result
        .map(|n| n * 10)
        .fold(|e| format!("error: {e}"), |n| format!("value: {n}"));
    assert_eq!(rendered, "value: 100");
}
