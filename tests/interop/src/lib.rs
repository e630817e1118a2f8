//! Integration tests for the numerics workspace.
//! Differential checks of `numerics_bigint::BigInt` against `num-bigint`,
//! plus serialization round trips through `serde_json`.

#[cfg(test)]
mod tests {
    use numerics_bigint::{BigInt, Sign};
    use numerics_types::NumericsError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    type Reference = num_bigint::BigInt;

    const ROUNDS: usize = 300;

    fn to_reference(x: &BigInt) -> Reference {
        x.to_string().parse().unwrap()
    }

    fn random_bigint(rng: &mut StdRng, max_words: usize) -> BigInt {
        let len = rng.gen_range(0..=max_words);
        let words = (0..len)
            .map(|_| match rng.gen_range(0..6) {
                0 => 0,
                1 => u64::MAX,
                _ => rng.gen(),
            })
            .collect();
        let sign = if rng.gen_bool(0.5) { Sign::Negative } else { Sign::Positive };
        BigInt::from_words(sign, words)
    }

    fn random_pairs(seed: u64, max_words: usize) -> Vec<(BigInt, BigInt)> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..ROUNDS)
            .map(|_| (random_bigint(&mut rng, max_words), random_bigint(&mut rng, max_words)))
            .collect()
    }

    // -------------------------------------------------------
    // 1. Decimal text agrees in both directions
    // -------------------------------------------------------
    #[test]
    fn test_decimal_text_matches_reference() {
        for (x, _) in random_pairs(1, 8) {
            let reference = to_reference(&x);
            assert_eq!(reference.to_string(), x.to_string());
            assert_eq!(reference.to_str_radix(16), format!("{x:x}"));
            let parsed: BigInt = reference.to_string().parse().unwrap();
            assert_eq!(parsed, x);
        }
    }

    // -------------------------------------------------------
    // 2. Every radix agrees with the reference
    // -------------------------------------------------------
    #[test]
    fn test_all_radixes_match_reference() {
        let mut rng = StdRng::seed_from_u64(2);
        for radix in 2..=36 {
            for _ in 0..10 {
                let x = random_bigint(&mut rng, 5);
                let reference = to_reference(&x);
                assert_eq!(x.to_str_radix(radix, false), reference.to_str_radix(radix), "radix {radix}");
                let back = Reference::parse_bytes(x.to_str_radix(radix, true).as_bytes(), radix).unwrap();
                assert_eq!(back, reference, "radix {radix}");
            }
        }
    }

    // -------------------------------------------------------
    // 3. Ring operations
    // -------------------------------------------------------
    #[test]
    fn test_add_sub_mul_match_reference() {
        for (x, y) in random_pairs(3, 6) {
            let (rx, ry) = (to_reference(&x), to_reference(&y));
            assert_eq!(to_reference(&(&x + &y)), &rx + &ry, "{x} + {y}");
            assert_eq!(to_reference(&(&x - &y)), &rx - &ry, "{x} - {y}");
            assert_eq!(to_reference(&(&x * &y)), &rx * &ry, "{x} * {y}");
        }
    }

    // -------------------------------------------------------
    // 4. Truncating division and remainder
    // -------------------------------------------------------
    #[test]
    fn test_div_rem_match_reference() {
        for (x, y) in random_pairs(4, 8) {
            if y.is_zero() {
                assert_eq!(x.div_rem(&y), Err(NumericsError::DivisionByZero));
                continue;
            }
            let (rx, ry) = (to_reference(&x), to_reference(&y));
            let (q, r) = x.div_rem(&y).unwrap();
            assert_eq!(to_reference(&q), &rx / &ry, "{x} / {y}");
            assert_eq!(to_reference(&r), &rx % &ry, "{x} % {y}");
        }
    }

    #[test]
    fn test_div_by_near_normalized_divisors() {
        // Divisors whose top word sits just under or over the normalization
        // boundary exercise the quotient correction step.
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..ROUNDS {
            let x = random_bigint(&mut rng, 10);
            let top = if rng.gen_bool(0.5) { (1u64 << 63) - 1 } else { 1u64 << 63 };
            let y = BigInt::from_words(Sign::Positive, vec![rng.gen(), rng.gen(), top]);
            let (rx, ry) = (to_reference(&x), to_reference(&y));
            assert_eq!(to_reference(&(&x / &y)), &rx / &ry);
            assert_eq!(to_reference(&(&x % &y)), &rx % &ry);
        }
    }

    // -------------------------------------------------------
    // 5. Two's-complement bitwise logic and shifts
    // -------------------------------------------------------
    #[test]
    fn test_bitwise_match_reference() {
        for (x, y) in random_pairs(6, 5) {
            let (rx, ry) = (to_reference(&x), to_reference(&y));
            assert_eq!(to_reference(&(&x & &y)), &rx & &ry, "{x} & {y}");
            assert_eq!(to_reference(&(&x | &y)), &rx | &ry, "{x} | {y}");
            assert_eq!(to_reference(&(&x ^ &y)), &rx ^ &ry, "{x} ^ {y}");
            assert_eq!(to_reference(&!&x), !&rx, "!{x}");
        }
    }

    #[test]
    fn test_shifts_match_reference() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..ROUNDS {
            let x = random_bigint(&mut rng, 5);
            let n: usize = rng.gen_range(0..400);
            let rx = to_reference(&x);
            assert_eq!(to_reference(&(&x << n)), &rx << n, "{x} << {n}");
            assert_eq!(to_reference(&(&x >> n)), &rx >> n, "{x} >> {n}");
        }
    }

    #[test]
    fn test_signed_bytes_match_reference() {
        for (x, _) in random_pairs(8, 4) {
            let rx = to_reference(&x);
            assert_eq!(x.to_signed_bytes_le(), rx.to_signed_bytes_le(), "{x}");
            assert_eq!(Reference::from_signed_bytes_le(&x.to_signed_bytes_le()), rx);
        }
    }

    // -------------------------------------------------------
    // 6. Modular arithmetic
    // -------------------------------------------------------
    #[test]
    fn test_mod_pow_matches_reference() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let base = random_bigint(&mut rng, 3);
            let exp = random_bigint(&mut rng, 2).abs();
            let modulus = random_bigint(&mut rng, 3).abs();
            if modulus.is_zero() {
                assert_eq!(base.mod_pow(&exp, &modulus), Err(NumericsError::ZeroModulus));
                continue;
            }
            let expected = to_reference(&base).modpow(&to_reference(&exp), &to_reference(&modulus));
            assert_eq!(to_reference(&base.mod_pow(&exp, &modulus).unwrap()), expected);
        }
    }

    #[test]
    fn test_mod_inverse_matches_reference() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..100 {
            let value = random_bigint(&mut rng, 3);
            let modulus = random_bigint(&mut rng, 2).abs();
            if modulus.is_zero() {
                continue;
            }
            let expected = to_reference(&value).modinv(&to_reference(&modulus));
            match value.mod_inverse(&modulus) {
                Ok(inv) => assert_eq!(Some(to_reference(&inv)), expected, "{value}^-1 mod {modulus}"),
                Err(e) => {
                    assert_eq!(e, NumericsError::NoInverse);
                    assert_eq!(expected, None, "{value}^-1 mod {modulus}");
                }
            }
        }
    }

    // -------------------------------------------------------
    // 7. Native conversions
    // -------------------------------------------------------
    #[test]
    fn test_primitive_conversions_match_reference() {
        use num_traits::ToPrimitive;

        for (x, _) in random_pairs(11, 2) {
            let rx = to_reference(&x);
            assert_eq!(x.try_to::<i64>().ok(), rx.to_i64());
            assert_eq!(x.try_to::<u64>().ok(), rx.to_u64());
            assert_eq!(x.try_to::<i128>().ok(), rx.to_i128());
            assert_eq!(x.try_to::<u128>().ok(), rx.to_u128());
        }
    }

    #[test]
    fn test_to_f64_is_correctly_rounded() {
        // Rust's decimal float parser rounds correctly, so it is a reference
        // for the nearest-even conversion.
        for (x, _) in random_pairs(12, 20) {
            let expected: f64 = x.to_string().parse().unwrap();
            assert_eq!(x.to_f64(), expected, "{x}");
        }
    }

    // -------------------------------------------------------
    // 8. Serialized form
    // -------------------------------------------------------
    #[test]
    fn test_serde_json_round_trip() {
        for (x, y) in random_pairs(13, 6) {
            let json = serde_json::to_string(&(&x, &y)).unwrap();
            let (a, b): (BigInt, BigInt) = serde_json::from_str(&json).unwrap();
            assert_eq!((a, b), (x, y));
        }
    }

    #[test]
    fn test_serde_json_decimal_encoding() {
        let x: BigInt = "-1234567890123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_value(&x).unwrap();
        assert_eq!(json, serde_json::json!("-1234567890123456789012345678901234567890"));
        let back: BigInt = serde_json::from_value(json).unwrap();
        assert_eq!(back, x);
    }
}
