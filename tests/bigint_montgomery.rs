use mpi_core::{BigInt, MontgomeryCache};

fn bi(s: &str) -> BigInt {
    BigInt::read_string(10, s).unwrap()
}

#[test]
fn exp_mod_small_values() {
    let a = bi("3");
    let e = bi("7");
    let n = bi("13");
    let mut r = BigInt::zero();
    r.exp_mod(&a, &e, &n, None).unwrap();
    assert_eq!(r.to_radix_string(10).unwrap(), "3");
}

#[test]
fn exp_mod_exponent_zero_is_one() {
    let a = bi("5");
    let e = BigInt::zero();
    let n = bi("97");
    let mut r = BigInt::zero();
    r.exp_mod(&a, &e, &n, None).unwrap();
    assert_eq!(r.to_radix_string(10).unwrap(), "1");
}

#[test]
fn exp_mod_modulus_one_is_zero() {
    let a = bi("123");
    let e = bi("456");
    let n = BigInt::from_i64(1);
    let mut r = BigInt::zero();
    r.exp_mod(&a, &e, &n, None).unwrap();
    assert!(r.is_zero());
}

#[test]
fn exp_mod_matches_schoolbook_for_moderate_exponent() {
    let a = bi("12345");
    let e = bi("987");
    let n = bi("10000000019"); // prime, odd modulus

    let mut r = BigInt::zero();
    r.exp_mod(&a, &e, &n, None).unwrap();

    // Cross-check by repeated squaring via plain mul_mpi/mod_mpi.
    let mut acc = BigInt::from_i64(1);
    let bits = e.msb();
    for i in (0..bits).rev() {
        let mut sq = BigInt::zero();
        sq.mul_mpi(&acc, &acc).unwrap();
        acc = BigInt::mod_mpi(&sq, &n).unwrap();
        if e.get_bit(i) == 1 {
            let mut prod = BigInt::zero();
            prod.mul_mpi(&acc, &a).unwrap();
            acc = BigInt::mod_mpi(&prod, &n).unwrap();
        }
    }

    assert_eq!(r, acc);
}

#[test]
fn exp_mod_rejects_even_modulus() {
    let a = bi("3");
    let e = bi("5");
    let n = bi("10");
    let mut r = BigInt::zero();
    assert!(r.exp_mod(&a, &e, &n, None).is_err());
}

#[test]
fn exp_mod_rejects_negative_exponent() {
    let a = bi("3");
    let mut e = bi("5");
    e.sign = -1;
    let n = bi("13");
    let mut r = BigInt::zero();
    assert!(r.exp_mod(&a, &e, &n, None).is_err());
}

#[test]
fn montgomery_cache_reused_across_calls_same_modulus() {
    let n = bi("97");
    let mut cache = MontgomeryCache::new();

    let mut r1 = BigInt::zero();
    r1.exp_mod(&bi("2"), &bi("10"), &n, Some(&mut cache)).unwrap();
    assert!(cache.rr.is_some());

    let mut r2 = BigInt::zero();
    r2.exp_mod(&bi("3"), &bi("5"), &n, Some(&mut cache)).unwrap();

    assert_eq!(r1.to_radix_string(10).unwrap(), "54");
    assert_eq!(r2.to_radix_string(10).unwrap(), "49");
}
