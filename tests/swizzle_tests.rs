use swizzle_vec::{BinOp, RoundingMode, VecError, Vector};

#[test_log::test]
fn test_view_reads_as_vector() {
    let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
    let view: Vector<i32, 2> = v.swizzle([3, 1]).into();
    assert_eq!(view.to_array(), [4, 2]);
}

#[test_log::test]
fn test_assign_writes_through_indices() {
    let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
    v.swizzle_mut([3, 1]).assign(Vector::<i32, 2>::from_array([9, 8]));
    assert_eq!(v.to_array(), [1, 8, 3, 9]);
}

#[test_log::test]
fn test_scalar_assign_to_repeated_index() {
    let mut v = Vector::<i32, 4>::from_array([5, 6, 7, 8]);
    v.swizzle_mut([0, 0]).assign(9i32);
    assert_eq!(v.to_array(), [9, 6, 7, 8]);
}

#[test_log::test]
fn test_later_duplicate_index_wins() {
    let mut v = Vector::<i32, 4>::from_array([5, 6, 7, 8]);
    v.swizzle_mut([0, 2, 0]).assign([1, 2, 3]);
    assert_eq!(v.to_array(), [3, 6, 2, 8]);
}

#[test_log::test]
fn test_view_can_exceed_owner_lanes_by_repetition() {
    let v = Vector::<u8, 2>::from_array([1, 2]);
    let wide = v.swizzle([0, 1, 0, 1, 1, 0, 0, 1]).to_vector();
    assert_eq!(wide.to_array(), [1, 2, 1, 2, 2, 1, 1, 2]);
}

#[test_log::test]
#[should_panic(expected = "out of range")]
fn test_out_of_range_swizzle_panics() {
    let v = Vector::<f32, 3>::splat(0.0);
    let _ = v.swizzle([0, 3]);
}

#[test_log::test]
fn test_try_swizzle_reports_bad_index() {
    let mut v = Vector::<f32, 3>::splat(0.0);
    assert_eq!(
        v.try_swizzle_mut([1, 4]).err(),
        Some(VecError::IndexOutOfRange { index: 4, lanes: 3 })
    );
}

#[test_log::test]
fn test_expression_is_lazy_until_materialized() {
    let a = Vector::<i32, 4>::from_array([10, 20, 30, 40]);
    let b = Vector::<i32, 4>::from_array([1, 0, 3, 0]);

    // Lane 1 of the divisor is zero; only lanes 0 and 2 are ever read.
    let expr = a.swizzle([0, 2]) / b.swizzle([0, 2]) + 1i32;
    assert_eq!(expr.op(), Some(BinOp::Add));
    assert_eq!(expr.to_vector().to_array(), [11, 11]);
}

#[test_log::test]
fn test_expression_assigned_into_other_vector() {
    let src = Vector::<f32, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
    let mut dst = Vector::<f32, 4>::splat(0.0);
    dst.swizzle_mut([1, 3]).assign(src.swizzle([0, 1]) * src.swizzle([2, 3]));
    assert_eq!(dst.to_array(), [0.0, 3.0, 0.0, 8.0]);
}

#[test_log::test]
fn test_same_owner_needs_materialization() {
    let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
    let sum: Vector<i32, 2> = (v.lo() + v.hi()).into();
    v.lo_mut().assign(sum);
    assert_eq!(v.to_array(), [4, 6, 3, 4]);
}

#[test_log::test]
fn test_vector_operator_with_view_operand() {
    let v = Vector::<u32, 4>::from_array([1, 2, 3, 4]);
    let w = Vector::<u32, 2>::splat(10) + v.swizzle([3, 0]);
    assert_eq!(w.to_array(), [14, 11]);
}

#[test_log::test]
fn test_compound_assign_through_view() {
    let mut v = Vector::<i16, 4>::from_array([1, 2, 3, 4]);
    let mut view = v.swizzle_mut([1, 3]);
    view *= 10i16;
    view -= Vector::<i16, 2>::from_array([5, 1]);
    view <<= 1i16;
    assert_eq!(v.to_array(), [1, 30, 3, 78]);
}

#[test_log::test]
fn test_increment_through_view() {
    let mut v = Vector::<f64, 3>::from_array([0.5, 1.5, 2.5]);
    let mut view = v.swizzle_mut([2]);
    assert_eq!(view.post_increment().value(), 2.5);
    assert_eq!(view.increment().value(), 4.5);
    assert_eq!(view.decrement().value(), 3.5);
    assert_eq!(v.to_array(), [0.5, 1.5, 3.5]);
}

#[test_log::test]
fn test_named_accessors() {
    let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
    assert_eq!(v.w().value(), 4);
    assert_eq!(v.zyx().to_vector().to_array(), [3, 2, 1]);
    assert_eq!(v.odd().to_vector().to_array(), [2, 4]);
    v.xy_mut().assign([7, 8]);
    v.s3_mut().assign(0i32);
    assert_eq!(v.rgba().to_vector().to_array(), [7, 8, 3, 0]);
}

#[test_log::test]
fn test_view_conversion_materializes_first() -> anyhow::Result<()> {
    let v = Vector::<f32, 4>::from_array([0.5, 1.5, 2.5, -2.7]);
    let rounded = v.swizzle([1, 2]).convert::<i32>(RoundingMode::NearestEven)?;
    assert_eq!(rounded.to_array(), [2, 2]);
    let truncated = v.w().convert::<i8>(RoundingMode::TowardZero)?;
    assert_eq!(truncated.value(), -2);
    Ok(())
}

#[test_log::test]
fn test_view_reinterpretation() {
    let v = Vector::<u16, 4>::from_array([0x3C00, 0, 0, 0]);
    let bits: Vector<u8, 2> = v.x().as_vec();
    assert_eq!(u16::from_ne_bytes(bits.to_array()), 0x3C00);
}

#[test_log::test]
fn test_unary_on_views() {
    let v = Vector::<i32, 2>::from_array([3, 0]);
    assert_eq!((-v.yx()).to_array(), [0, -3]);
    assert_eq!((!v.x()).value(), !3);
    assert_eq!(v.yx().logical_not().to_array(), [-1, 0]);
}
