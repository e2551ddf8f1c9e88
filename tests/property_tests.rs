use decimal_core::{Decimal, ParseResult, RoundMode, TypeDesc};

use proptest::prelude::*;
use std::cmp::Ordering;

fn pow10(n: u8) -> i128 {
    10i128.pow(n as u32)
}

fn any_type() -> impl Strategy<Value = TypeDesc> {
    (1u8..=38)
        .prop_flat_map(|p| (Just(p), 0u8..=p))
        .prop_map(|(p, s)| TypeDesc::new(p, s))
}

// A descriptor together with a value valid under it.
fn typed_value() -> impl Strategy<Value = (TypeDesc, Decimal)> {
    any_type().prop_flat_map(|t| {
        let max = pow10(t.precision()) - 1;
        (Just(t), -max..=max).prop_map(|(t, v)| (t, Decimal::checked_new(&t, v).unwrap()))
    })
}

proptest! {
    #[test]
    fn format_parse_round_trips((t, v) in typed_value()) {
        prop_assert_eq!(Decimal::parse_str(&v.format(&t), &t), ParseResult::Exact(v));
    }

    #[test]
    fn scale_up_then_down_is_identity((t, v) in typed_value(), extra in 0u8..=10) {
        prop_assume!(t.precision() + extra <= 38);
        let wider = TypeDesc::new(t.precision() + extra, t.scale() + extra);
        let up = v.scale_to(&t, &wider, RoundMode::Truncate).unwrap();
        let back = up.scale_to(&wider, &t, RoundMode::Truncate).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn add_commutes((xt, x) in typed_value(), (yt, y) in typed_value()) {
        let rt = TypeDesc::for_add(&xt, &yt);
        prop_assert_eq!(x.add(&xt, &y, &yt, &rt), y.add(&yt, &x, &xt, &rt));
    }

    #[test]
    fn add_associates((xt, x) in typed_value(), (yt, y) in typed_value(), (zt, z) in typed_value()) {
        let xy_t = TypeDesc::for_add(&xt, &yt);
        let yz_t = TypeDesc::for_add(&yt, &zt);
        let left_t = TypeDesc::for_add(&xy_t, &zt);
        let right_t = TypeDesc::for_add(&xt, &yz_t);
        let left = x
            .add(&xt, &y, &yt, &xy_t)
            .and_then(|xy| xy.add(&xy_t, &z, &zt, &left_t));
        let right = y
            .add(&yt, &z, &zt, &yz_t)
            .and_then(|yz| x.add(&xt, &yz, &yz_t, &right_t));
        if let (Ok(left), Ok(right)) = (left, right) {
            prop_assert_eq!(left.compare(&left_t, &right, &right_t), Ordering::Equal);
        }
    }

    #[test]
    fn subtracting_itself_is_zero((t, v) in typed_value()) {
        let rt = TypeDesc::for_add(&t, &t);
        let diff = v.sub(&t, &v, &t, &rt).unwrap();
        prop_assert!(diff.is_zero());
    }

    #[test]
    fn compare_matches_subtraction_sign((xt, x) in typed_value(), (yt, y) in typed_value()) {
        let rt = TypeDesc::for_add(&xt, &yt);
        if let Ok(diff) = x.sub(&xt, &y, &yt, &rt) {
            prop_assert_eq!(x.compare(&xt, &y, &yt), diff.unscaled().cmp(&0));
        }
    }

    #[test]
    fn compare_is_reflexive((t, v) in typed_value()) {
        prop_assert_eq!(v.compare(&t, &v, &t), Ordering::Equal);
    }

    #[test]
    fn multiplying_by_one_preserves_the_value((t, v) in typed_value()) {
        let one_t = TypeDesc::new(1, 0);
        let rt = TypeDesc::for_mul(&t, &one_t);
        let r = v.mul(&t, &Decimal::D4(1), &one_t, &rt).unwrap();
        prop_assert_eq!(r.unscaled(), v.unscaled());
    }

    #[test]
    fn truncating_round_never_grows_magnitude((t, v) in typed_value(), drop in 1u8..=5) {
        prop_assume!(t.scale() >= drop);
        let dst = TypeDesc::new(t.precision(), t.scale() - drop);
        let r = v.round(&t, &dst, RoundMode::Truncate).unwrap();
        prop_assert!(r.unscaled().abs() <= v.unscaled().abs());
    }
}
