#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use proptest::prelude::*;

    use crate::number::{
        error::NumberError,
        integer::{BigInteger, Sign},
    };

    fn big(text: &str) -> BigInteger {
        BigInteger::parse(text).unwrap()
    }

    fn arb_big() -> impl Strategy<Value = BigInteger> {
        (any::<bool>(), prop::collection::vec(any::<u32>(), 0..8)).prop_map(|(neg, words)| {
            let sign = if neg { Sign::Negative } else { Sign::Positive };
            BigInteger::from_parts(sign, words)
        })
    }

    fn arb_nonzero_big() -> impl Strategy<Value = BigInteger> {
        arb_big().prop_filter("non-zero divisor", |b| !b.is_zero())
    }

    //--------------------------------------------------------------------------------------//
    //                                   Construction                                       //
    //--------------------------------------------------------------------------------------//

    #[test]
    fn test_canonical_form() {
        let zero = BigInteger::from_parts(Sign::Negative, vec![0, 0, 0]);
        assert_eq!(zero.sign(), Sign::Zero);
        assert!(zero.words().is_empty());
        assert_eq!(zero, BigInteger::zero());

        let one = BigInteger::from_parts(Sign::Positive, vec![1, 0, 0]);
        assert_eq!(one.words(), &[1]);
        assert!(one.is_one());
    }

    #[test]
    fn test_from_native() {
        assert_eq!(BigInteger::from(0i32), BigInteger::zero());
        assert_eq!(BigInteger::from(u32::MAX).words(), &[u32::MAX]);
        assert_eq!(BigInteger::from(u64::MAX).words(), &[u32::MAX, u32::MAX]);
        assert_eq!(BigInteger::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInteger::from(i32::MIN).to_string(), "-2147483648");
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(BigInteger::from_f64(-2.7).unwrap(), BigInteger::from(-2));
        assert_eq!(BigInteger::from_f64(0.9).unwrap(), BigInteger::zero());
        assert_eq!(BigInteger::from_f64(-0.0).unwrap(), BigInteger::zero());
        assert_eq!(
            BigInteger::from_f64(1e20).unwrap().to_string(),
            "100000000000000000000"
        );
        assert_eq!(
            BigInteger::from_f64(2f64.powi(70)).unwrap(),
            BigInteger::one() << 70
        );
        assert_eq!(
            BigInteger::from_f64(-2f64.powi(200)).unwrap(),
            -(BigInteger::one() << 200)
        );
        assert!(matches!(
            BigInteger::from_f64(f64::NAN),
            Err(NumberError::Domain(_))
        ));
        assert!(matches!(
            BigInteger::from_f64(f64::NEG_INFINITY),
            Err(NumberError::Domain(_))
        ));
    }

    //--------------------------------------------------------------------------------------//
    //                                 Parse and format                                     //
    //--------------------------------------------------------------------------------------//

    #[test]
    fn test_parse() {
        assert_eq!(big("0"), BigInteger::zero());
        assert_eq!(big("-0"), BigInteger::zero());
        assert_eq!(big("000123").to_string(), "123");
        assert_eq!(big("-4294967296").words(), &[0, 1]);
        assert_eq!("42".parse::<BigInteger>().unwrap(), BigInteger::from(42));
    }

    #[test]
    fn test_parse_errors() {
        for text in ["", "-", "12a", "+5", " 1", "1 ", "--1", "1-", "0x10"] {
            assert!(
                matches!(BigInteger::parse(text), Err(NumberError::Format(_))),
                "'{}' should not parse",
                text
            );
        }
    }

    #[test]
    fn test_to_string_radix() {
        assert_eq!(BigInteger::from(255).to_string_radix(16).unwrap(), "FF");
        assert_eq!(BigInteger::from(-255).to_string_radix(16).unwrap(), "-FF");
        assert_eq!(BigInteger::from(5).to_string_radix(2).unwrap(), "101");
        assert_eq!(BigInteger::zero().to_string_radix(7).unwrap(), "0");
        assert_eq!(BigInteger::from(35).to_string_radix(36).unwrap(), "Z");
        assert_eq!(
            (BigInteger::one() << 64).to_string_radix(16).unwrap(),
            "10000000000000000"
        );
        assert!(matches!(
            BigInteger::one().to_string_radix(1),
            Err(NumberError::Domain(_))
        ));
        assert!(matches!(
            BigInteger::one().to_string_radix(37),
            Err(NumberError::Domain(_))
        ));
    }

    #[test]
    fn test_parse_radix() {
        assert_eq!(BigInteger::parse_radix("ff", 16).unwrap(), BigInteger::from(255));
        assert_eq!(BigInteger::parse_radix("-Zz", 36).unwrap(), BigInteger::from(-1295));
        assert!(matches!(
            BigInteger::parse_radix("102", 2),
            Err(NumberError::Format(_))
        ));
        assert!(matches!(
            BigInteger::parse_radix("-", 10),
            Err(NumberError::Format(_))
        ));
    }

    #[test]
    fn test_display_pads_inner_chunks() {
        assert_eq!(big("1000000000").to_string(), "1000000000");
        assert_eq!(big("-1000000000000000001").to_string(), "-1000000000000000001");
        assert_eq!(format!("{:?}", big("-12")), "BigInteger(-12)");
    }

    //--------------------------------------------------------------------------------------//
    //                                    Arithmetic                                        //
    //--------------------------------------------------------------------------------------//

    #[test]
    fn test_add_carry() {
        let res = BigInteger::from(u32::MAX) + BigInteger::one();
        assert_eq!(res.words(), &[0, 1]);
        assert_eq!(res.to_string(), "4294967296");
        assert_eq!(BigInteger::from(-5) + BigInteger::from(5), BigInteger::zero());
        assert_eq!(BigInteger::from(-5) + BigInteger::from(3), BigInteger::from(-2));
        assert_eq!(BigInteger::from(5) + BigInteger::from(-8), BigInteger::from(-3));
    }

    #[test]
    fn test_sub_borrow() {
        let res = (BigInteger::one() << 64) - BigInteger::one();
        assert_eq!(res.to_string(), "18446744073709551615");
        assert_eq!(res.words(), &[u32::MAX, u32::MAX]);
        assert_eq!(BigInteger::from(3) - BigInteger::from(10), BigInteger::from(-7));
        assert_eq!(BigInteger::from(-3) - BigInteger::from(-3), BigInteger::zero());
    }

    #[test]
    fn test_mixed_operand_forms() {
        let six = BigInteger::from(6);
        assert_eq!(&six + BigInteger::one(), BigInteger::from(7));
        assert_eq!(BigInteger::from(10) - &six, BigInteger::from(4));
        assert_eq!(six.clone() * six.clone(), BigInteger::from(36));
        assert_eq!(&six & BigInteger::from(3), BigInteger::from(2));
        assert_eq!(BigInteger::from(-1) ^ &six, BigInteger::from(-7));
    }

    #[test]
    fn test_billion_to_the_fifth() {
        let billion = BigInteger::from(1_000_000_000);
        let res = &(&(&(&billion * &billion) * &billion) * &billion) * &billion;
        let text = res.to_string();
        assert_eq!(text, "1000000000000000000000000000000000000000000000");
        assert_eq!(text.len(), 46);
    }

    #[test]
    fn test_truncating_division() {
        let seven = BigInteger::from(7);
        assert_eq!(
            BigInteger::from(-1_000_000_000).checked_rem(&seven).unwrap(),
            BigInteger::from(-6)
        );
        assert_eq!(
            BigInteger::from(1_000_000_000).checked_rem(&seven).unwrap(),
            BigInteger::from(6)
        );
        let (q, r) = BigInteger::from(-7).div_rem(&BigInteger::from(2)).unwrap();
        assert_eq!((q, r), (BigInteger::from(-3), BigInteger::from(-1)));
        let (q, r) = BigInteger::from(7).div_rem(&BigInteger::from(-2)).unwrap();
        assert_eq!((q, r), (BigInteger::from(-3), BigInteger::from(1)));
        let (q, r) = BigInteger::from(3).div_rem(&BigInteger::from(10)).unwrap();
        assert_eq!((q, r), (BigInteger::zero(), BigInteger::from(3)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            BigInteger::from(1).checked_div(&BigInteger::zero()),
            Err(NumberError::DivisionByZero)
        );
        assert_eq!(
            BigInteger::zero().div_rem(&BigInteger::zero()),
            Err(NumberError::DivisionByZero)
        );
    }

    #[test]
    fn test_multi_word_division() {
        let a = big("10000000000000000000000000000000000000000");
        let b = big("100000000000000000007");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&(&q * &b) + &r, a);
        assert!(r < b && !r.is_negative());
        assert_eq!(q.to_string(), "99999999999999999993");

        // Divisor with an unnormalized top word and an add-back step
        let a = big("340282366920938463463374607431768211455");
        let b = big("18446744073709551617");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_string(), "18446744073709551615");
        assert_eq!(r, BigInteger::zero());
    }

    #[test]
    fn test_pow() {
        assert_eq!(
            BigInteger::from(2).pow(100).unwrap().to_string(),
            "1267650600228229401496703205376"
        );
        assert_eq!(BigInteger::from(-3).pow(3).unwrap(), BigInteger::from(-27));
        assert_eq!(BigInteger::zero().pow(0).unwrap(), BigInteger::one());
        assert!(matches!(
            BigInteger::from(2).pow(-1),
            Err(NumberError::Domain(_))
        ));
    }

    #[test]
    fn test_pow_unit_bases() {
        assert_eq!(BigInteger::one().pow(i64::MAX).unwrap(), BigInteger::one());
        assert_eq!(BigInteger::from(-1).pow(i64::MAX).unwrap(), BigInteger::from(-1));
        assert_eq!(BigInteger::from(-1).pow_u64(1 << 63), BigInteger::one());
        assert_eq!(BigInteger::zero().pow_u64(u64::MAX), BigInteger::zero());
    }

    #[test]
    fn test_gcd_lcm() {
        let g = BigInteger::from(-12).gcd(&BigInteger::from(18));
        assert_eq!(g, BigInteger::from(6));
        assert_eq!(BigInteger::zero().gcd(&BigInteger::zero()), BigInteger::zero());
        assert_eq!(BigInteger::zero().gcd(&BigInteger::from(-5)), BigInteger::from(5));
        assert_eq!(BigInteger::from(4).lcm(&BigInteger::from(6)), BigInteger::from(12));
        assert_eq!(BigInteger::from(-4).lcm(&BigInteger::from(6)), BigInteger::from(12));
        assert_eq!(BigInteger::zero().lcm(&BigInteger::from(5)), BigInteger::zero());
    }

    #[test]
    fn test_predicates() {
        assert!(BigInteger::from(-4).is_even());
        assert!(BigInteger::zero().is_even());
        assert!(BigInteger::from(7).is_odd());
        assert_eq!(BigInteger::from(-9).signum(), BigInteger::from(-1));
        assert_eq!(BigInteger::from(-9).abs(), BigInteger::from(9));
        assert_eq!(BigInteger::from(255).bits(), 8);
        assert_eq!((BigInteger::one() << 64).bits(), 65);
    }

    //--------------------------------------------------------------------------------------//
    //                                     Bitwise                                          //
    //--------------------------------------------------------------------------------------//

    #[test]
    fn test_bitwise_twos_complement() {
        let n = |v: i64| BigInteger::from(v);
        assert_eq!(!n(0), n(-1));
        assert_eq!(!n(-1), n(0));
        assert_eq!(n(-1) & n(255), n(255));
        assert_eq!(n(-256) | n(255), n(-1));
        assert_eq!(n(12) ^ n(-1), n(-13));
        assert_eq!(n(-6) & n(-4), n(-8));
        assert_eq!(n(-6) | n(-4), n(-2));
        assert_eq!(n(-6) ^ n(-4), n(6));
    }

    #[test]
    fn test_bitwise_multi_word() {
        let x = -(BigInteger::one() << 64);
        // ...1111 0000...0000 (64 zeros)
        assert_eq!(&x & &BigInteger::from(u64::MAX), BigInteger::zero());
        assert_eq!(&x | &BigInteger::from(u64::MAX), BigInteger::from(-1));
        assert_eq!(!&x, (BigInteger::one() << 64) - BigInteger::one());
    }

    #[test]
    fn test_shifts() {
        assert_eq!(BigInteger::from(-1) >> 10, BigInteger::from(-1));
        assert_eq!(BigInteger::from(-5) >> 1, BigInteger::from(-3));
        assert_eq!(BigInteger::from(5) >> 1, BigInteger::from(2));
        assert_eq!(BigInteger::from(5) >> 100, BigInteger::zero());
        assert_eq!(BigInteger::from(-5) >> 100, BigInteger::from(-1));
        assert_eq!(BigInteger::from(-3) << 2, BigInteger::from(-12));
        assert_eq!(BigInteger::one() << 0, BigInteger::one());
        assert_eq!((BigInteger::one() << 100).to_string(), "1267650600228229401496703205376");
    }

    //--------------------------------------------------------------------------------------//
    //                              Comparison and conversion                               //
    //--------------------------------------------------------------------------------------//

    #[test]
    fn test_ordering() {
        let mut values = vec![big("5"), big("-100000000000000000000"), big("0"), big("-3"), big("100000000000000000000")];
        values.sort();
        let sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, ["-100000000000000000000", "-3", "0", "5", "100000000000000000000"]);
    }

    #[test]
    fn test_compare_native() {
        let above = BigInteger::from(u64::MAX) + BigInteger::one();
        assert!(above > u64::MAX);
        assert!(-&above < i64::MIN);
        assert!(BigInteger::from(-5) < 0i32);
        assert!(BigInteger::zero() == 0u32);
        assert!(BigInteger::from(i64::MIN) == i64::MIN);
        assert!(BigInteger::from(7) > -7i64);
        assert!(BigInteger::from(u32::MAX) == u32::MAX);
    }

    #[test]
    fn test_narrowing() {
        let over = BigInteger::from(i32::MAX) + BigInteger::one();
        assert!(matches!(over.to_i32(), Err(NumberError::OutOfRange(_))));
        assert_eq!(over.to_i64().unwrap(), i32::MAX as i64 + 1);
        assert_eq!(over.to_u32().unwrap(), 1u32 << 31);
        assert_eq!(BigInteger::from(i64::MIN).to_i64().unwrap(), i64::MIN);
        assert!(matches!(BigInteger::from(-1).to_u32(), Err(NumberError::OutOfRange(_))));
        assert!(matches!(
            (BigInteger::one() << 64).to_u64(),
            Err(NumberError::OutOfRange(_))
        ));
        assert_eq!(i32::try_from(&BigInteger::from(-17)).unwrap(), -17);
    }

    #[test]
    fn test_to_f64_rounding() {
        let two_53_plus_one = (BigInteger::one() << 53) + BigInteger::one();
        assert_eq!(two_53_plus_one.to_f64(), 9007199254740992.0);
        // 2^64 + 2^11 + 1 lies just above the midpoint and rounds up
        let sticky = (BigInteger::one() << 64) + (BigInteger::one() << 11) + BigInteger::one();
        assert_eq!(sticky.to_f64(), 18446744073709555712.0);
        assert_eq!((BigInteger::one() << 1023).to_f64(), 2f64.powi(1023));
        assert_eq!(BigInteger::from(-12345).to_f64(), -12345.0);
        assert_eq!(BigInteger::from(3).to_f32(), 3.0f32);
    }

    /// Out-of-range magnitudes clamp to the largest finite double rather than becoming infinite.
    /// This departs from the usual saturate-to-infinity behaviour on purpose.
    #[test]
    fn test_to_f64_clamps_to_finite() {
        let huge = BigInteger::one() << 1024;
        assert_eq!(huge.to_f64(), f64::MAX);
        assert_eq!((-&huge).to_f64(), -f64::MAX);
        assert_eq!(((BigInteger::one() << 1024) - BigInteger::one()).to_f64(), f64::MAX);
        assert_eq!(BigInteger::from(10).pow(400).unwrap().to_f64(), f64::MAX);
        assert!(BigInteger::from(10).pow(400).unwrap().to_f64().is_finite());
    }

    //--------------------------------------------------------------------------------------//
    //                                   Properties                                         //
    //--------------------------------------------------------------------------------------//

    proptest! {
        #[test]
        fn prop_decimal_round_trip(x in arb_big()) {
            prop_assert_eq!(BigInteger::parse(&x.to_string()).unwrap(), x);
        }

        #[test]
        fn prop_radix_round_trip(x in arb_big(), radix in 2u32..=36) {
            let text = x.to_string_radix(radix).unwrap();
            prop_assert_eq!(BigInteger::parse_radix(&text, radix).unwrap(), x);
        }

        #[test]
        fn prop_add_mul_laws(a in arb_big(), b in arb_big(), c in arb_big()) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn prop_matches_num_bigint(a in arb_big(), b in arb_nonzero_big()) {
            let (x, y) = (BigInt::from(&a), BigInt::from(&b));
            prop_assert_eq!(BigInt::from(&a * &b), &x * &y);
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(BigInt::from(q), &x / &y);
            prop_assert_eq!(BigInt::from(r), &x % &y);
            prop_assert_eq!(BigInt::from(&a & &b), &x & &y);
            prop_assert_eq!(BigInt::from(&a | &b), &x | &y);
            prop_assert_eq!(BigInt::from(&a ^ &b), &x ^ &y);
            prop_assert_eq!(a.to_string(), x.to_string());
        }

        #[test]
        fn prop_not_involution(x in arb_big()) {
            prop_assert_eq!(!!x.clone(), x.clone());
            prop_assert_eq!(!&x, -&x - BigInteger::one());
        }

        #[test]
        fn prop_shift_round_trip(x in arb_big(), k in 0usize..200) {
            prop_assert_eq!(&(&x << k) >> k, x.clone());
            prop_assert_eq!(BigInt::from(&x >> k), BigInt::from(&x) >> k);
        }

        #[test]
        fn prop_compare_native(a in any::<i64>(), b in any::<i64>()) {
            let big_a = BigInteger::from(a);
            prop_assert_eq!(big_a.partial_cmp(&b), Some(a.cmp(&b)));
            prop_assert_eq!(big_a.cmp(&BigInteger::from(b)), a.cmp(&b));
            prop_assert_eq!(big_a.to_i64().unwrap(), a);
        }
    }
}
