#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::number::{
        error::NumberError,
        integer::BigInteger,
        native::{
            checked_native, ArithmeticOperations, BitSize, ComparisonOperations, NativeInteger,
            NativeOp, NumberCasting,
        },
    };

    fn big(text: &str) -> BigInteger {
        BigInteger::parse(text).unwrap()
    }

    #[test]
    fn test_checked_native() {
        assert_eq!(checked_native(NativeOp::Add, 1i32, 2), Some(3));
        assert_eq!(checked_native(NativeOp::Add, i32::MAX, 1), None);
        assert_eq!(checked_native(NativeOp::Sub, 0u32, 1), None);
        assert_eq!(checked_native(NativeOp::Mul, u64::MAX, 2), None);
        assert_eq!(checked_native(NativeOp::Mul, -4i64, 5), Some(-20));
    }

    #[test]
    fn test_stays_native() {
        let res = NativeInteger::add(&NativeInteger::Int32(1), &NativeInteger::Int32(2));
        assert_eq!(res, NativeInteger::Int32(3));
        let res = NativeInteger::mul(&NativeInteger::UInt64(3), &NativeInteger::UInt64(4));
        assert_eq!(res, NativeInteger::UInt64(12));
    }

    #[test]
    fn test_u32_max_plus_one_widens() {
        let res = NativeInteger::add(&NativeInteger::UInt32(u32::MAX), &NativeInteger::UInt32(1));
        assert_eq!(res, NativeInteger::UInt64(4294967296));
        assert_eq!(res.to_big(), BigInteger::from(u32::MAX) + BigInteger::one());
    }

    #[test]
    fn test_i32_overflow_widens() {
        let res = NativeInteger::mul(&NativeInteger::Int32(i32::MAX), &NativeInteger::Int32(i32::MAX));
        assert_eq!(res, NativeInteger::Int64(4611686014132420609));
        let res = NativeInteger::sub(&NativeInteger::Int32(i32::MIN), &NativeInteger::Int32(1));
        assert_eq!(res, NativeInteger::Int64(-2147483649));
    }

    #[test]
    fn test_u64_overflow_promotes() {
        let res = NativeInteger::add(&NativeInteger::UInt64(u64::MAX), &NativeInteger::UInt64(1));
        assert_eq!(res, NativeInteger::IntVar(big("18446744073709551616")));
        let res = NativeInteger::mul(&NativeInteger::Int64(i64::MAX), &NativeInteger::Int64(i64::MAX));
        assert_eq!(
            res,
            NativeInteger::IntVar(big("85070591730234615847396907784232501249"))
        );
    }

    #[test]
    fn test_unsigned_underflow_promotes() {
        let res = NativeInteger::sub(&NativeInteger::UInt32(3), &NativeInteger::UInt32(5));
        assert_eq!(res, NativeInteger::Int64(-2));
        assert_eq!(res.optimize(), NativeInteger::Int32(-2));
        let res = NativeInteger::sub(&NativeInteger::UInt32(0), &NativeInteger::UInt32(u32::MAX));
        assert_eq!(res, NativeInteger::Int64(-4294967295));
        // Only 64-bit operands reach the unbounded type
        let res = NativeInteger::sub(&NativeInteger::UInt64(3), &NativeInteger::UInt64(5));
        assert_eq!(res, NativeInteger::IntVar(BigInteger::from(-2)));
    }

    #[test]
    fn test_mixed_signedness() {
        let res = NativeInteger::add(&NativeInteger::Int32(-1), &NativeInteger::UInt32(u32::MAX));
        assert_eq!(res, NativeInteger::Int64(4294967294));
        let res = NativeInteger::add(&NativeInteger::Int64(-1), &NativeInteger::UInt64(u64::MAX));
        assert_eq!(res, NativeInteger::IntVar(big("18446744073709551614")));
    }

    #[test]
    fn test_div() {
        let res = NativeInteger::div(&NativeInteger::Int32(-7), &NativeInteger::Int32(2)).unwrap();
        assert_eq!(res, NativeInteger::Int32(-3));
        let res = NativeInteger::div(&NativeInteger::Int32(i32::MIN), &NativeInteger::Int32(-1)).unwrap();
        assert_eq!(res, NativeInteger::Int64(2147483648));
        let res = NativeInteger::div(&NativeInteger::Int64(i64::MIN), &NativeInteger::Int64(-1)).unwrap();
        assert_eq!(res, NativeInteger::IntVar(big("9223372036854775808")));
        assert_eq!(
            NativeInteger::div(&NativeInteger::UInt32(1), &NativeInteger::UInt32(0)),
            Err(NumberError::DivisionByZero)
        );
        assert_eq!(
            NativeInteger::div(&NativeInteger::Int64(1), &NativeInteger::IntVar(BigInteger::zero())),
            Err(NumberError::DivisionByZero)
        );
    }

    #[test]
    fn test_upcast_and_optimize() {
        assert_eq!(NativeInteger::Int32(-5).upcast(BitSize::Bit64), NativeInteger::Int64(-5));
        assert_eq!(
            NativeInteger::UInt32(5).upcast(BitSize::BitVar),
            NativeInteger::IntVar(BigInteger::from(5))
        );
        assert_eq!(NativeInteger::Int64(5).optimize(), NativeInteger::Int32(5));
        assert_eq!(NativeInteger::UInt64(u64::MAX).optimize(), NativeInteger::UInt64(u64::MAX));
        assert_eq!(
            NativeInteger::IntVar(BigInteger::from(u64::MAX)).optimize(),
            NativeInteger::UInt64(u64::MAX)
        );
        let huge = NativeInteger::IntVar(BigInteger::one() << 80);
        assert_eq!(huge.clone().optimize(), huge);
    }

    #[test]
    fn test_cmp() {
        assert_eq!(
            NativeInteger::cmp(&NativeInteger::Int32(-1), &NativeInteger::UInt64(0)),
            Ordering::Less
        );
        assert_eq!(
            NativeInteger::cmp(&NativeInteger::UInt32(7), &NativeInteger::Int64(7)),
            Ordering::Equal
        );
        assert_eq!(
            NativeInteger::cmp(&NativeInteger::IntVar(BigInteger::one() << 70), &NativeInteger::UInt64(u64::MAX)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(NativeInteger::Int32(-3).to_string(), "-3");
        assert_eq!(NativeInteger::IntVar(BigInteger::one() << 64).to_string(), "18446744073709551616");
    }

    fn arb_native() -> impl Strategy<Value = NativeInteger> {
        prop_oneof![
            any::<i32>().prop_map(NativeInteger::Int32),
            any::<u32>().prop_map(NativeInteger::UInt32),
            any::<i64>().prop_map(NativeInteger::Int64),
            any::<u64>().prop_map(NativeInteger::UInt64),
        ]
    }

    proptest! {
        #[test]
        fn prop_promotion_matches_big(a in arb_native(), b in arb_native()) {
            let (x, y) = (a.to_big(), b.to_big());
            prop_assert_eq!(NativeInteger::add(&a, &b).to_big(), &x + &y);
            prop_assert_eq!(NativeInteger::sub(&a, &b).to_big(), &x - &y);
            prop_assert_eq!(NativeInteger::mul(&a, &b).to_big(), &x * &y);
            prop_assert_eq!(NativeInteger::cmp(&a, &b), x.cmp(&y));
        }

        #[test]
        fn prop_promotion_is_order_independent(a in arb_native(), b in arb_native()) {
            prop_assert_eq!(NativeInteger::add(&a, &b), NativeInteger::add(&b, &a));
            prop_assert_eq!(NativeInteger::mul(&a, &b), NativeInteger::mul(&b, &a));
        }
    }
}
