//! Behavioural tests for filtering collision collections.

use collisions_core::{
    Collision, CollisionFilter, Collisions, Field, FieldValue, RawRow, UnknownFieldError,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

fn collision(crash_id: i64, state: &str, year: i64) -> Collision {
    let mut row: RawRow = Field::ALL
        .iter()
        .map(|field| (field.name().to_owned(), FieldValue::Missing))
        .collect();
    row.insert("crash_id".into(), FieldValue::Integer(crash_id));
    row.insert("state".into(), FieldValue::from(state));
    row.insert("year".into(), FieldValue::Integer(year));
    Collision::parse(row).expect("complete row")
}

#[fixture]
fn collisions() -> RefCell<Collisions> {
    RefCell::new(Collisions::new())
}

#[fixture]
fn outcome() -> RefCell<Option<Result<Collisions, UnknownFieldError>>> {
    RefCell::new(None)
}

fn filtered(outcome: &RefCell<Option<Result<Collisions, UnknownFieldError>>>) -> Vec<FieldValue> {
    outcome
        .borrow()
        .as_ref()
        .expect("filter was applied")
        .as_ref()
        .expect("filter succeeded")
        .iter()
        .map(|collision| collision.crash_id().clone())
        .collect()
}

#[given("collisions from VIC in 2020, VIC in 2021 and NSW in 2020")]
fn three_collisions(#[from(collisions)] collisions: &RefCell<Collisions>) {
    let mut collisions = collisions.borrow_mut();
    collisions.push(collision(1, "VIC", 2020));
    collisions.push(collision(2, "VIC", 2021));
    collisions.push(collision(3, "NSW", 2020));
}

#[when("I filter on state VIC and year 2020")]
fn filter_state_and_year(
    #[from(collisions)] collisions: &RefCell<Collisions>,
    #[from(outcome)] outcome: &RefCell<Option<Result<Collisions, UnknownFieldError>>>,
) {
    let filter = CollisionFilter::new()
        .with(Field::State, "VIC")
        .with(Field::Year, 2020);
    outcome.replace(Some(Ok(collisions.borrow().filter(&filter))));
}

#[when("I filter without constraints")]
fn filter_without_constraints(
    #[from(collisions)] collisions: &RefCell<Collisions>,
    #[from(outcome)] outcome: &RefCell<Option<Result<Collisions, UnknownFieldError>>>,
) {
    outcome.replace(Some(Ok(collisions.borrow().filter(&CollisionFilter::new()))));
}

#[when("I filter on the attribute colour")]
fn filter_unknown(
    #[from(collisions)] collisions: &RefCell<Collisions>,
    #[from(outcome)] outcome: &RefCell<Option<Result<Collisions, UnknownFieldError>>>,
) {
    let result = collisions
        .borrow()
        .filter_by_name([("colour", FieldValue::from("red"))]);
    outcome.replace(Some(result));
}

#[then("only the first collision remains")]
fn only_first(#[from(outcome)] outcome: &RefCell<Option<Result<Collisions, UnknownFieldError>>>) {
    assert_eq!(filtered(outcome), vec![FieldValue::Integer(1)]);
}

#[then("every collision remains in order")]
fn every_collision(
    #[from(outcome)] outcome: &RefCell<Option<Result<Collisions, UnknownFieldError>>>,
) {
    assert_eq!(
        filtered(outcome),
        vec![
            FieldValue::Integer(1),
            FieldValue::Integer(2),
            FieldValue::Integer(3)
        ]
    );
}

#[then("the filter is rejected for colour")]
fn rejected(#[from(outcome)] outcome: &RefCell<Option<Result<Collisions, UnknownFieldError>>>) {
    let borrowed = outcome.borrow();
    let err = borrowed
        .as_ref()
        .expect("filter was applied")
        .as_ref()
        .expect_err("unknown attribute should fail");
    assert_eq!(err.name, "colour");
}

#[scenario(path = "tests/features/filter_collisions.feature", index = 0)]
fn state_and_year(
    collisions: RefCell<Collisions>,
    outcome: RefCell<Option<Result<Collisions, UnknownFieldError>>>,
) {
    let _ = (collisions, outcome);
}

#[scenario(path = "tests/features/filter_collisions.feature", index = 1)]
fn no_constraints(
    collisions: RefCell<Collisions>,
    outcome: RefCell<Option<Result<Collisions, UnknownFieldError>>>,
) {
    let _ = (collisions, outcome);
}

#[scenario(path = "tests/features/filter_collisions.feature", index = 2)]
fn unknown_attribute(
    collisions: RefCell<Collisions>,
    outcome: RefCell<Option<Result<Collisions, UnknownFieldError>>>,
) {
    let _ = (collisions, outcome);
}
