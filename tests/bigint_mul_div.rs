use mpi_core::{BigInt, BigIntError};

fn bi(s: &str) -> BigInt {
    BigInt::read_string(10, s).unwrap()
}

#[test]
fn div_mpi_negative_dividend_truncates_toward_zero() {
    let a = bi("-17");
    let b = bi("5");
    let (q, r) = BigInt::div_mpi(&a, &b).unwrap();
    assert_eq!(q.to_radix_string(10).unwrap(), "-3");
    assert_eq!(r.to_radix_string(10).unwrap(), "-2");

    // q*b + r == a
    let mut check = BigInt::zero();
    check.mul_mpi(&q, &b).unwrap();
    let mut sum = BigInt::zero();
    sum.add_mpi(&check, &r).unwrap();
    assert_eq!(sum, a);
}

#[test]
fn mod_mpi_canonicalizes_into_nonnegative_range() {
    let a = bi("-17");
    let b = bi("5");
    let r = BigInt::mod_mpi(&a, &b).unwrap();
    assert_eq!(r.to_radix_string(10).unwrap(), "3");
}

#[test]
fn div_mpi_rejects_zero_divisor() {
    let a = bi("10");
    let err = BigInt::div_mpi(&a, &BigInt::zero()).unwrap_err();
    assert_eq!(err, BigIntError::DivisionByZero);
}

#[test]
fn mod_mpi_rejects_negative_divisor() {
    let a = bi("10");
    let b = bi("-3");
    let err = BigInt::mod_mpi(&a, &b).unwrap_err();
    assert_eq!(err, BigIntError::NegativeValue);
}

#[test]
fn mul_mpi_large_values() {
    let a = bi("340282366920938463463374607431768211456"); // 2^128
    let b = bi("2");
    let mut r = BigInt::zero();
    r.mul_mpi(&a, &b).unwrap();
    assert_eq!(
        r.to_radix_string(10).unwrap(),
        "680564733841876926926749214863536422912"
    );
}

#[test]
fn mod_int_small_divisor() {
    let a = bi("-17");
    let r = BigInt::mod_int(&a, 5).unwrap();
    assert_eq!(r, 3);
}

#[test]
fn mod_int_matches_mod_mpi_for_positive_values() {
    let a = bi("123456789");
    let b: i64 = 97;
    let via_mpi = BigInt::mod_mpi(&a, &BigInt::from_i64(b)).unwrap();
    let via_int = BigInt::mod_int(&a, b).unwrap();
    assert_eq!(via_mpi.to_radix_string(10).unwrap(), via_int.to_string());
}

#[test]
fn mod_int_rejects_nonpositive_divisor() {
    let a = bi("10");
    assert!(BigInt::mod_int(&a, 0).is_err());
    assert!(BigInt::mod_int(&a, -5).is_err());
}

#[test]
fn div_int_accepts_negative_divisor() {
    let a = bi("17");
    let (q, r) = BigInt::div_int(&a, -5).unwrap();
    assert_eq!(q.to_radix_string(10).unwrap(), "-3");
    assert_eq!(r.to_radix_string(10).unwrap(), "2");
}
