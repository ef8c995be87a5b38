use swizzle_vec::{Bool, Half, Vector};

#[test_log::test]
fn test_equality_uses_all_bits_set_for_true() {
    let v = Vector::<i32, 2>::from_array([1, 2]);
    let w = Vector::<i32, 2>::from_array([1, 3]);
    let eq = v.lanes_eq(w);
    assert_eq!(eq[0], -1);
    assert_eq!(eq[0] as u32, u32::MAX);
    assert_eq!(eq[1], 0);
}

#[test_log::test]
fn test_single_lane_truth_is_sign_inverted() {
    let v = Vector::<i32, 1>::splat(1);
    let w = Vector::<i32, 1>::splat(1);
    assert_eq!(v.lanes_eq(w).value(), 1);
    assert_eq!(v.lanes_ne(w).value(), 0);
}

#[test_log::test]
fn test_relational_result_type_follows_element_size() {
    let bytes = Vector::<u8, 4>::from_array([1, 2, 3, 4]);
    let r: Vector<i8, 4> = bytes.lanes_gt(2u8);
    assert_eq!(r.to_array(), [0, 0, -1, -1]);

    let doubles = Vector::<f64, 2>::from_array([1.0, f64::NAN]);
    let r: Vector<i64, 2> = doubles.lanes_le(1.0f64);
    assert_eq!(r.to_array(), [-1, 0]);

    let halves = Vector::<Half, 2>::from_array([Half::ONE, Half::NEG_ONE]);
    let r: Vector<i16, 2> = halves.lanes_lt(Half::ZERO);
    assert_eq!(r.to_array(), [0, -1]);
}

#[test_log::test]
fn test_every_comparison() {
    let v = Vector::<i16, 3>::from_array([1, 2, 3]);
    let w = Vector::<i16, 3>::from_array([2, 2, 2]);
    assert_eq!(v.lanes_eq(w).to_array(), [0, -1, 0]);
    assert_eq!(v.lanes_ne(w).to_array(), [-1, 0, -1]);
    assert_eq!(v.lanes_gt(w).to_array(), [0, 0, -1]);
    assert_eq!(v.lanes_lt(w).to_array(), [-1, 0, 0]);
    assert_eq!(v.lanes_ge(w).to_array(), [0, -1, -1]);
    assert_eq!(v.lanes_le(w).to_array(), [-1, -1, 0]);
}

#[test_log::test]
fn test_logical_operators() {
    let v = Vector::<u32, 4>::from_array([0, 1, 0, 7]);
    let w = Vector::<u32, 4>::from_array([0, 0, 5, 9]);
    assert_eq!(v.lanes_and(w).to_array(), [0, 0, 0, -1]);
    assert_eq!(v.lanes_or(w).to_array(), [0, -1, -1, -1]);
    assert_eq!(v.logical_not().to_array(), [-1, 0, -1, 0]);
    assert_eq!(v.lanes_or(0u32).to_array(), [0, -1, 0, -1]);
}

#[test_log::test]
fn test_single_lane_logical_not() {
    assert_eq!(Vector::<f32, 1>::splat(0.0).logical_not().value(), 1);
    assert_eq!(Vector::<f32, 1>::splat(2.0).logical_not().value(), 0);
}

#[test_log::test]
fn test_bool_lanes_compare_and_combine() {
    let v = Vector::<Bool, 2>::from_array([Bool::TRUE, Bool::FALSE]);
    let w = Vector::<Bool, 2>::from_array([Bool::TRUE, Bool::TRUE]);
    assert_eq!(v.lanes_eq(w).to_array(), [-1, 0]);
    assert_eq!((v & w).to_array(), [Bool::TRUE, Bool::FALSE]);
    assert_eq!((v ^ w).to_array(), [Bool::FALSE, Bool::TRUE]);
    assert_eq!((Bool::TRUE | v).to_array(), [Bool::TRUE; 2]);
}

#[test_log::test]
fn test_comparison_against_view() {
    let v = Vector::<i32, 4>::from_array([4, 3, 2, 1]);
    let r = v.lo().lanes_eq(v.swizzle([3, 2]).expr() + 1i32);
    assert_eq!(r.to_array(), [0, -1]);
}

#[test_log::test]
fn test_non_canonical_bool_lanes_are_true() {
    let raw = Vector::<u8, 4>::from_array([2, 0, 0x80, 1]);
    let v: Vector<Bool, 4> = raw.as_vec();
    assert_eq!(v.logical_not().to_array(), [0, -1, 0, 0]);
    assert_eq!((v & Bool::TRUE).to_array(), [Bool::TRUE, Bool::FALSE, Bool::TRUE, Bool::TRUE]);
}
