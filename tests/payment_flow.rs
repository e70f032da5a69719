//! End-to-end flow: a lookup collaborator produces `Either` values and a
//! presentation collaborator exhaustively folds them into an output.

use eitherway::scope::run;
use eitherway::Either;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PaymentId(u64);

#[derive(Debug, Clone, PartialEq)]
struct Payment {
    id: PaymentId,
    amount_cents: i64,
}

#[derive(Debug, PartialEq)]
enum PaymentError {
    NotFound(PaymentId),
    InvalidAmount(i64),
}

/// Lookup collaborator: the algebra never assumes how this value was produced.
fn find(id: PaymentId) -> Either<PaymentError, Payment> {
    match id.0 {
        1 => Either::right(Payment {
            id,
            amount_cents: 12_50,
        }),
        2 => Either::right(Payment {
            id,
            amount_cents: -1,
        }),
        _ => Either::left(PaymentError::NotFound(id)),
    }
}

/// Presentation collaborator: one exhaustive fold decides the output.
///
/// Every `PaymentError` variant must be named here; adding a variant breaks
/// this match at compile time, which is the point.
fn render(result: Either<PaymentError, Payment>) -> (u16, String) {
    result.fold(
        |error| match error {
            PaymentError::NotFound(id) => (404, format!("payment {} not found", id.0)),
            PaymentError::InvalidAmount(cents) => (422, format!("invalid amount: {cents}")),
        },
        |payment| (200, format!("payment {} ok", payment.id.0)),
    )
}

fn validated_find(id: PaymentId) -> Either<PaymentError, Payment> {
    run(|s| {
        let payment = s.bind(find(id))?;
        s.ensure(payment.amount_cents > 0, || {
            PaymentError::InvalidAmount(payment.amount_cents)
        })?;
        Ok(payment)
    })
}

#[test]
fn existing_payment_renders_success() {
    let (status, body) = render(find(PaymentId(1)));
    assert_eq!(status, 200);
    assert_eq!(body, "payment 1 ok");
}

#[test]
fn missing_payment_renders_not_found() {
    assert_eq!(
        find(PaymentId(99)),
        Either::left(PaymentError::NotFound(PaymentId(99)))
    );

    let (status, body) = render(find(PaymentId(99)));
    assert_eq!(status, 404);
    assert_eq!(body, "payment 99 not found");
}

#[test]
fn validation_demotes_a_bad_amount() {
    let (status, body) = render(validated_find(PaymentId(2)));
    assert_eq!(status, 422);
    assert_eq!(body, "invalid amount: -1");
}

#[test]
fn chained_lookup_short_circuits_on_the_first_failure() {
    let summary = run(|s| {
        let first = s.bind(validated_find(PaymentId(1)))?;
        let second = s.bind(validated_find(PaymentId(99)))?;
        Ok(first.amount_cents + second.amount_cents)
    });

    assert_eq!(
        summary,
        Either::left(PaymentError::NotFound(PaymentId(99)))
    );
}
