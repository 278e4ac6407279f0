use super::*;
use pretty_assertions::assert_eq;
use std::cell::Cell;

#[test]
fn test_first_accepting_arm_wins() {
    let result = pattern_match(
        &5,
        (
            (|x: &i32| *x >= 0, |_: &i32| "a"),
            (|x: &i32| *x > 0, |_: &i32| "b"),
        ),
    );
    assert_eq!(result, Ok("a"));
}

#[test]
fn test_later_arm_when_earlier_rejects() {
    let result = pattern_match(
        &0,
        (
            (|x: &i32| *x > 0, |_: &i32| "positive"),
            (|x: &i32| *x >= 0, |_: &i32| "nonneg"),
        ),
    );
    assert_eq!(result, Ok("nonneg"));
}

#[test]
fn test_action_receives_subject() {
    let result = pattern_match(
        "hello",
        (
            (|s: &str| s.is_empty(), |_: &str| 0),
            (always, |s: &str| s.len()),
        ),
    );
    assert_eq!(result, Ok(5));
}

#[test]
fn test_no_match_reports_arm_count() {
    let result = pattern_match(
        &-1,
        (
            (|x: &i32| *x > 0, |_: &i32| ()),
            (|x: &i32| *x == 0, |_: &i32| ()),
        ),
    );
    assert_eq!(result, Err(MatchError::NoMatch { arms: 2 }));
}

#[test]
fn test_no_match_display() {
    let err = MatchError::NoMatch { arms: 3 };
    assert_eq!(
        err.to_string(),
        "no predicate accepted the subject (3 arms evaluated)"
    );
}

#[test]
fn test_arm_count_is_static() {
    type Pred = fn(&u8) -> bool;
    type Act = fn(&u8) -> u8;
    assert_eq!(<((Pred, Act),) as CaseList<u8>>::ARMS, 1);
    assert_eq!(<((Pred, Act), (Pred, Act), (Pred, Act)) as CaseList<u8>>::ARMS, 3);
}

#[test]
fn test_unit_actions() {
    let hits = Cell::new(0);
    let result = pattern_match(
        &1u8,
        (
            (|x: &u8| *x == 0, |_: &u8| hits.set(hits.get() + 10)),
            (always, |_: &u8| hits.set(hits.get() + 1)),
        ),
    );
    assert_eq!(result, Ok(()));
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_short_circuit_skips_later_predicates() {
    let evaluated = [Cell::new(0), Cell::new(0), Cell::new(0)];
    let result = pattern_match(
        &7,
        (
            (
                |x: &i32| {
                    evaluated[0].set(evaluated[0].get() + 1);
                    *x < 0
                },
                |_: &i32| 0,
            ),
            (
                |x: &i32| {
                    evaluated[1].set(evaluated[1].get() + 1);
                    *x > 0
                },
                |_: &i32| 1,
            ),
            (
                |_: &i32| {
                    evaluated[2].set(evaluated[2].get() + 1);
                    true
                },
                |_: &i32| 2,
            ),
        ),
    );
    assert_eq!(result, Ok(1));
    assert_eq!(evaluated[0].get(), 1);
    assert_eq!(evaluated[1].get(), 1);
    assert_eq!(evaluated[2].get(), 0);
}

#[test]
fn test_rejected_predicates_do_not_fire_actions() {
    let actions = [Cell::new(0), Cell::new(0), Cell::new(0)];
    let result = pattern_match(
        &"c",
        (
            (|s: &&str| *s == "a", |_: &&str| actions[0].set(actions[0].get() + 1)),
            (|s: &&str| *s == "b", |_: &&str| actions[1].set(actions[1].get() + 1)),
            (|s: &&str| *s == "c", |_: &&str| actions[2].set(actions[2].get() + 1)),
        ),
    );
    assert_eq!(result, Ok(()));
    assert_eq!(
        [actions[0].get(), actions[1].get(), actions[2].get()],
        [0, 0, 1]
    );
}

#[test]
fn test_repeated_match_is_deterministic() {
    let calls = Cell::new(0);
    let run = || {
        pattern_match(
            &42,
            (
                (|x: &i32| *x % 2 == 1, |_: &i32| "odd"),
                (
                    |x: &i32| *x % 2 == 0,
                    |_: &i32| {
                        calls.set(calls.get() + 1);
                        "even"
                    },
                ),
            ),
        )
    };
    assert_eq!(run(), Ok("even"));
    assert_eq!(run(), Ok("even"));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_twelve_arms() {
    let result = pattern_match(
        &11,
        (
            (|x: &i32| *x == 0, |_: &i32| 0),
            (|x: &i32| *x == 1, |_: &i32| 1),
            (|x: &i32| *x == 2, |_: &i32| 2),
            (|x: &i32| *x == 3, |_: &i32| 3),
            (|x: &i32| *x == 4, |_: &i32| 4),
            (|x: &i32| *x == 5, |_: &i32| 5),
            (|x: &i32| *x == 6, |_: &i32| 6),
            (|x: &i32| *x == 7, |_: &i32| 7),
            (|x: &i32| *x == 8, |_: &i32| 8),
            (|x: &i32| *x == 9, |_: &i32| 9),
            (|x: &i32| *x == 10, |_: &i32| 10),
            (always, |_: &i32| 99),
        ),
    );
    assert_eq!(result, Ok(99));
}

#[test]
fn test_matcher_builder() {
    let matcher = Matcher::new(&3i32)
        .when(|x| *x > 5, |_| "big")
        .when(|x| *x > 1, |_| "medium")
        .when(|x| *x > 0, |_| "small");
    assert_eq!(matcher.arms(), 3);
    assert_eq!(matcher.matched_arm(), Some(1));
    assert_eq!(matcher.finish(), Ok("medium"));
}

#[test]
fn test_matcher_skips_predicates_after_match() {
    let late = Cell::new(false);
    let result = Matcher::new(&1)
        .when(|x| *x == 1, |_| 'x')
        .when(
            |_| {
                late.set(true);
                true
            },
            |_| 'y',
        )
        .finish();
    assert_eq!(result, Ok('x'));
    assert!(!late.get());
}

#[test]
fn test_matcher_finish_without_match() {
    let result = Matcher::new(&0u32).when(|x| *x > 0, |_| ()).finish();
    assert_eq!(result, Err(MatchError::NoMatch { arms: 1 }));
}

#[test]
fn test_matcher_otherwise() {
    let fallback = Matcher::new(&-4i32)
        .when(|x| *x > 0, |x| *x * 2)
        .otherwise(|x| -*x);
    assert_eq!(fallback, 4);

    let matched = Matcher::new(&4i32)
        .when(|x| *x > 0, |x| *x * 2)
        .otherwise(|x| -*x);
    assert_eq!(matched, 8);
}

#[test]
fn test_macro_infers_closure_types() {
    let label = crate::pattern_match!(vec![1, 2, 3];
        |v| v.is_empty() => |_| String::from("empty"),
        |v| v.len() > 2 => |v| format!("long:{}", v[0]),
        always => |_| String::from("short"),
    );
    assert_eq!(label, Ok(String::from("long:1")));
}

#[test]
fn test_macro_no_match() {
    let label = crate::pattern_match!(10u8; |x| *x < 5 => |_| 1);
    assert_eq!(label, Err(MatchError::NoMatch { arms: 1 }));
}
