#![cfg(feature = "serde")]

use eitherway::Either;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Payment {
    id: u64,
    amount_cents: i64,
}

#[test]
fn either_round_trips_through_serde_json() {
    let right: Either<String, Payment> = Either::right(Payment {
        id: 1,
        amount_cents: 12_50,
    });
    let serialized = serde_json::to_string(&right).unwrap();
    let deserialized: Either<String, Payment> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(right, deserialized);

    let left: Either<String, Payment> = Either::left("not found".to_owned());
    let serialized = serde_json::to_string(&left).unwrap();
    let deserialized: Either<String, Payment> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(left, deserialized);
}
