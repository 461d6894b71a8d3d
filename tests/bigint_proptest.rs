use mpi_core::BigInt;
use proptest::prelude::*;

fn arb_magnitude_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 1..24)
}

fn arb_signed(bytes: Vec<u8>, negative: bool) -> BigInt {
    let mut v = BigInt::from_be_bytes(&bytes);
    if negative && !v.is_zero() {
        v.sign = -1;
    }
    v
}

prop_compose! {
    fn arb_bigint()(bytes in arb_magnitude_bytes(), negative in any::<bool>()) -> BigInt {
        arb_signed(bytes, negative)
    }
}

proptest! {
    #[test]
    fn add_is_commutative(a in arb_bigint(), b in arb_bigint()) {
        let mut ab = BigInt::zero();
        ab.add_mpi(&a, &b).unwrap();
        let mut ba = BigInt::zero();
        ba.add_mpi(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn add_is_associative(a in arb_bigint(), b in arb_bigint(), c in arb_bigint()) {
        let mut ab = BigInt::zero();
        ab.add_mpi(&a, &b).unwrap();
        let mut ab_c = BigInt::zero();
        ab_c.add_mpi(&ab, &c).unwrap();

        let mut bc = BigInt::zero();
        bc.add_mpi(&b, &c).unwrap();
        let mut a_bc = BigInt::zero();
        a_bc.add_mpi(&a, &bc).unwrap();

        prop_assert_eq!(ab_c, a_bc);
    }

    #[test]
    fn mul_is_commutative(a in arb_bigint(), b in arb_bigint()) {
        let mut ab = BigInt::zero();
        ab.mul_mpi(&a, &b).unwrap();
        let mut ba = BigInt::zero();
        ba.mul_mpi(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn mul_distributes_over_add(a in arb_bigint(), b in arb_bigint(), c in arb_bigint()) {
        let mut b_plus_c = BigInt::zero();
        b_plus_c.add_mpi(&b, &c).unwrap();
        let mut lhs = BigInt::zero();
        lhs.mul_mpi(&a, &b_plus_c).unwrap();

        let mut ab = BigInt::zero();
        ab.mul_mpi(&a, &b).unwrap();
        let mut ac = BigInt::zero();
        ac.mul_mpi(&a, &c).unwrap();
        let mut rhs = BigInt::zero();
        rhs.add_mpi(&ab, &ac).unwrap();

        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn decimal_round_trip(a in arb_bigint()) {
        let s = a.to_radix_string(10).unwrap();
        let back = BigInt::read_string(10, &s).unwrap();
        prop_assert_eq!(a, back);
    }

    #[test]
    fn hex_round_trip(a in arb_bigint()) {
        let s = a.to_radix_string(16).unwrap();
        let back = BigInt::read_string(16, &s).unwrap();
        prop_assert_eq!(a, back);
    }

    #[test]
    fn be_bytes_round_trip(bytes in arb_magnitude_bytes()) {
        let v = BigInt::from_be_bytes(&bytes);
        let mut buf = vec![0u8; bytes.len() + 4];
        v.to_be_bytes(&mut buf).unwrap();
        let back = BigInt::from_be_bytes(&buf);
        prop_assert_eq!(v, back);
    }

    #[test]
    fn division_identity_holds(a in arb_bigint(), b in arb_bigint()) {
        prop_assume!(!b.is_zero());

        let (q, r) = BigInt::div_mpi(&a, &b).unwrap();

        let mut check = BigInt::zero();
        check.mul_mpi(&q, &b).unwrap();
        let mut sum = BigInt::zero();
        sum.add_mpi(&check, &r).unwrap();
        prop_assert_eq!(sum, a);

        prop_assert!(r.cmp_abs(&b) == std::cmp::Ordering::Less);
        if !r.is_zero() {
            prop_assert_eq!(r.sign(), a.sign());
        }
    }

    #[test]
    fn mod_mpi_is_always_nonnegative_and_in_range(a in arb_bigint(), b in arb_bigint()) {
        prop_assume!(!b.is_zero() && !b.is_negative());

        let r = BigInt::mod_mpi(&a, &b).unwrap();
        prop_assert!(!r.is_negative());
        prop_assert!(r.cmp_abs(&b) == std::cmp::Ordering::Less);
    }

    #[test]
    fn shift_left_right_round_trip(a in arb_bigint(), k in 0usize..200) {
        let mut v = a.clone();
        v.shift_l(k).unwrap();
        v.shift_r(k).unwrap();
        prop_assert_eq!(v, a);
    }

    #[test]
    fn shift_left_by_k_equals_mul_by_pow2(a in arb_bigint(), k in 0usize..64) {
        let mut shifted = a.clone();
        shifted.shift_l(k).unwrap();

        let mut pow2 = BigInt::from_i64(1);
        pow2.shift_l(k).unwrap();
        let mut via_mul = BigInt::zero();
        via_mul.mul_mpi(&a, &pow2).unwrap();

        prop_assert_eq!(shifted, via_mul);
    }

    #[test]
    fn cond_assign_is_identity_or_replacement(a in arb_bigint(), b in arb_bigint(), cond in any::<bool>()) {
        let mut x = a.clone();
        x.cond_assign(&b, cond as u8).unwrap();
        if cond {
            prop_assert_eq!(x, b);
        } else {
            prop_assert_eq!(x, a);
        }
    }

    #[test]
    fn gcd_divides_both_operands(a in arb_bigint(), b in arb_bigint()) {
        prop_assume!(!a.is_zero() || !b.is_zero());

        let g = BigInt::gcd(&a, &b).unwrap();
        prop_assert!(!g.is_zero());

        let (_q, ra) = BigInt::div_mpi(&a, &g).unwrap();
        let (_q, rb) = BigInt::div_mpi(&b, &g).unwrap();
        prop_assert!(ra.is_zero());
        prop_assert!(rb.is_zero());
    }
}
