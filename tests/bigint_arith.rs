use mpi_core::BigInt;

fn bi(s: &str) -> BigInt {
    BigInt::read_string(10, s).unwrap()
}

#[test]
fn add_mpi_mixed_signs() {
    let a = bi("-5");
    let b = bi("8");
    let mut r = BigInt::zero();
    r.add_mpi(&a, &b).unwrap();
    assert_eq!(r, bi("3"));
}

#[test]
fn add_mpi_result_zero_is_canonical_positive() {
    let a = bi("5");
    let b = bi("-5");
    let mut r = BigInt::zero();
    r.add_mpi(&a, &b).unwrap();
    assert!(r.is_zero());
    assert_eq!(r.sign(), 1);
}

#[test]
fn sub_abs_rejects_negative_result() {
    let a = bi("3");
    let b = bi("5");
    let mut r = BigInt::zero();
    assert!(r.sub_abs(&a, &b).is_err());
}

#[test]
fn add_mpi_aliased_with_self_is_correct() {
    let mut acc = bi("10");
    let prior = acc.clone();
    acc.add_mpi(&prior, &bi("5")).unwrap();
    assert_eq!(acc, bi("15"));
}

#[test]
fn cmp_signed_orders_by_sign_then_magnitude() {
    assert!(bi("-5") < bi("3"));
    assert!(bi("-10") < bi("-3"));
    assert!(bi("10") > bi("3"));
    assert_eq!(bi("7"), bi("7"));
}

#[test]
fn bit_get_set_round_trip() {
    let mut v = BigInt::zero();
    v.set_bit(130, 1).unwrap();
    assert_eq!(v.get_bit(130), 1);
    assert_eq!(v.get_bit(129), 0);
    v.set_bit(130, 0).unwrap();
    assert_eq!(v.get_bit(130), 0);
}

#[test]
fn lsb_of_zero_is_documented_zero() {
    assert_eq!(BigInt::zero().lsb(), 0);
}

#[test]
fn msb_of_zero_is_zero() {
    assert_eq!(BigInt::zero().msb(), 0);
}

#[test]
fn lsb_msb_on_power_of_two() {
    let v = bi("1024"); // 2^10
    assert_eq!(v.lsb(), 10);
    assert_eq!(v.msb(), 11);
}

#[test]
fn shift_left_then_right_round_trip() {
    let mut v = bi("123456789012345");
    let original = v.clone();
    v.shift_l(77).unwrap();
    v.shift_r(77).unwrap();
    assert_eq!(v, original);
}

#[test]
fn shift_right_past_width_collapses_to_zero() {
    let mut v = bi("255");
    v.shift_r(1000).unwrap();
    assert!(v.is_zero());
}

#[test]
fn cond_assign_selects_by_condition() {
    let mut x = bi("1");
    let y = bi("99");

    x.cond_assign(&y, 0).unwrap();
    assert_eq!(x, bi("1"));

    x.cond_assign(&y, 1).unwrap();
    assert_eq!(x, bi("99"));
}

#[test]
fn cond_swap_swaps_only_when_set() {
    let mut a = bi("1");
    let mut b = bi("2");

    a.cond_swap(&mut b, 0).unwrap();
    assert_eq!(a, bi("1"));
    assert_eq!(b, bi("2"));

    a.cond_swap(&mut b, 1).unwrap();
    assert_eq!(a, bi("2"));
    assert_eq!(b, bi("1"));
}
