use super::*;
use pretty_assertions::assert_eq;
use std::cell::Cell;

crate::constant_tags! {
    /// Three-valued count used to exercise dispatch.
    pub enum Count as count { One, Two, Three }
}

crate::constant_tags! {
    pub(crate) enum Parity as parity { Even, Odd }
}

crate::constant_tags! {
    enum Direction as direction {
        /// Towards the front.
        Forward,
        Backward,
    }
}

#[test]
fn test_constant_tags_values() {
    assert_eq!(count::One::VALUE, Count::One);
    assert_eq!(count::Two::VALUE, Count::Two);
    assert_eq!(count::Three::VALUE, Count::Three);
    assert_eq!(count::Two.value(), Count::Two);
    assert_eq!(Count::ALL, &[Count::One, Count::Two, Count::Three]);
    assert_eq!(Direction::ALL.len(), 2);
}

#[test]
fn test_tags_are_zero_sized() {
    assert_eq!(std::mem::size_of::<count::One>(), 0);
    assert_eq!(std::mem::size_of::<ConstUsize<7>>(), 0);
}

#[test]
fn test_match_constant_selects_each_enumerator() {
    let one = crate::match_constant!(count::One;
        count::One => Count::One,
        count::Two => Count::Two,
        count::Three => Count::Three,
    );
    let two = crate::match_constant!(count::Two;
        count::One => Count::One,
        count::Two => Count::Two,
        count::Three => Count::Three,
    );
    let three = crate::match_constant!(count::Three;
        count::One => Count::One,
        count::Two => Count::Two,
        count::Three => Count::Three,
    );
    assert_eq!([one, two, three], [Count::One, Count::Two, Count::Three]);
}

#[test]
fn test_branch_order_does_not_matter() {
    let picked = crate::match_constant!(count::Two;
        count::Three => "three",
        count::Two => "two",
        count::One => "one",
    );
    assert_eq!(picked, "two");
}

#[test]
fn test_only_selected_branch_runs() {
    let runs = [Cell::new(0), Cell::new(0), Cell::new(0)];
    crate::match_constant!(count::Three;
        count::One => runs[0].set(runs[0].get() + 1),
        count::Two => runs[1].set(runs[1].get() + 1),
        count::Three => runs[2].set(runs[2].get() + 1),
    );
    assert_eq!(
        [runs[0].get(), runs[1].get(), runs[2].get()],
        [0, 0, 1]
    );
}

#[test]
fn test_arm_body_receives_tag() {
    let branches = Branches::new(
        Arm::<count::One, _>::new(|tag: count::One| (tag.value(), 1)),
        Branches::new(Arm::<count::Two, _>::new(|tag: count::Two| (tag.value(), 2)), Nil),
    );
    let picked = match_constant::<count::Two, _, _>(branches);
    assert_eq!(picked, (Count::Two, 2));
}

#[test]
fn test_const_generic_constants() {
    let size = crate::match_constant!(ConstUsize<4>;
        ConstUsize<2> => "pair",
        ConstUsize<4> => "quad",
    );
    assert_eq!(size, "quad");

    let flag = crate::match_constant!(ConstBool<false>;
        ConstBool<true> => 1,
        ConstBool<false> => 0,
    );
    assert_eq!(flag, 0);

    assert_eq!(ConstI64::<-3>::VALUE, -3);
    let signed = crate::match_constant!(ConstI64<-3>;
        ConstI64<3> => "positive",
        ConstI64<-3> => "negative",
    );
    assert_eq!(signed, "negative");
}

#[test]
fn test_single_branch() {
    let only = crate::match_constant!(direction::Backward; direction::Backward => Direction::Backward);
    assert_eq!(only, Direction::Backward);
    assert_eq!(direction::Forward::VALUE, Direction::Forward);
}

#[test]
fn test_branch_can_move_captured_value() {
    let owned = String::from("moved");
    let picked = crate::match_constant!(count::One;
        count::One => owned,
        count::Two => String::new(),
    );
    assert_eq!(picked, "moved");
}

#[test]
fn test_private_enum_tags_dispatch() {
    let picked = crate::match_constant!(direction::Forward;
        direction::Forward => Direction::Forward,
        direction::Backward => Direction::Backward,
    );
    assert_eq!(picked, Direction::Forward);
    assert_eq!(direction::Backward.value(), Direction::Backward);
    assert_eq!(Direction::ALL, &[Direction::Forward, Direction::Backward]);
}

#[test]
fn test_crate_visible_enum_tags() {
    assert_eq!(parity::Odd::VALUE, Parity::Odd);
    let picked = crate::match_constant!(parity::Even;
        parity::Even => 0u8,
        parity::Odd => 1u8,
    );
    assert_eq!(picked, 0);
    assert_eq!(std::mem::size_of::<parity::Even>(), 0);
}
