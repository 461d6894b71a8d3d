use mpi_core::{BigInt, BigIntError};

fn bi(s: &str) -> BigInt {
    BigInt::read_string(10, s).unwrap()
}

#[test]
fn gcd_basic() {
    let a = bi("462");
    let b = bi("1071");
    let g = BigInt::gcd(&a, &b).unwrap();
    assert_eq!(g.to_radix_string(10).unwrap(), "21");
}

#[test]
fn gcd_with_zero() {
    let a = BigInt::zero();
    let b = bi("17");
    assert_eq!(BigInt::gcd(&a, &b).unwrap(), bi("17"));
    assert_eq!(BigInt::gcd(&b, &a).unwrap(), bi("17"));
    assert_eq!(BigInt::gcd(&a, &a).unwrap(), BigInt::zero());
}

#[test]
fn gcd_coprime_is_one() {
    let a = bi("17");
    let b = bi("19");
    assert_eq!(BigInt::gcd(&a, &b).unwrap(), BigInt::from_i64(1));
}

#[test]
fn gcd_ignores_sign() {
    let mut a = bi("462");
    a.sign = -1;
    let b = bi("1071");
    let g = BigInt::gcd(&a, &b).unwrap();
    assert_eq!(g.to_radix_string(10).unwrap(), "21");
}

#[test]
fn inv_mod_basic() {
    let a = bi("3");
    let n = bi("11");
    let inv = BigInt::inv_mod(&a, &n).unwrap();
    assert_eq!(inv.to_radix_string(10).unwrap(), "4");

    // Check it really is the inverse.
    let mut prod = BigInt::zero();
    prod.mul_mpi(&a, &inv).unwrap();
    let r = BigInt::mod_mpi(&prod, &n).unwrap();
    assert_eq!(r, BigInt::from_i64(1));
}

#[test]
fn inv_mod_non_coprime_is_not_acceptable() {
    let a = bi("6");
    let n = bi("9");
    let err = BigInt::inv_mod(&a, &n).unwrap_err();
    assert_eq!(err, BigIntError::NotAcceptable);
}

#[test]
fn inv_mod_rejects_nonpositive_modulus() {
    let a = bi("3");
    assert!(BigInt::inv_mod(&a, &BigInt::zero()).is_err());

    let mut neg = bi("5");
    neg.sign = -1;
    assert!(BigInt::inv_mod(&a, &neg).is_err());
}

#[test]
fn inv_mod_result_is_canonical_range() {
    let a = bi("200");
    let n = bi("97");
    let inv = BigInt::inv_mod(&a, &n).unwrap();
    assert!(!inv.is_negative());
    assert!(inv.cmp_signed(&n) == std::cmp::Ordering::Less);
}
