///
/// Miller-Rabin primality test for machine-size integers, used to check
/// the prime underlying a p-adic ring at construction time.
///
/// If `n` is prime, this always returns `true`. If `n` is composite, it
/// returns `false` except with probability at most `4^(-k)`. The witnesses
/// are drawn from an rng seeded by `n`, so the result is deterministic for
/// a fixed input.
///
pub fn is_prime(n: i64, k: usize) -> bool {
    assert!(n >= 0);
    if n == 0 || n == 1 {
        return false;
    } else if n == 2 || n == 3 {
        return true;
    } else if n % 2 == 0 {
        return false;
    }
    let n = n as u128;
    let mut rng = oorandom::Rand64::new(n);
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }
    'witness: for _ in 0..k {
        let a = rng.rand_u64() as u128 % (n - 3) + 2;
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue 'witness;
        }
        for _ in 0..(s - 1) {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    return true;
}

///
/// Computes `base^exp mod modulus` by square-and-multiply; `modulus` must
/// fit in 64 bits so that intermediate products do not overflow.
///
fn pow_mod(mut base: u128, mut exp: u128, modulus: u128) -> u128 {
    assert!(modulus <= u64::MAX as u128);
    let mut result = 1;
    base %= modulus;
    while exp > 0 {
        if exp % 2 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp /= 2;
    }
    return result;
}

fn mul_mod(lhs: u128, rhs: u128, modulus: u128) -> u128 {
    lhs * rhs % modulus
}

#[test]
fn test_is_prime() {
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 257, 65537, 1000000007];
    let composites = [0, 1, 4, 6, 8, 9, 15, 21, 25, 27, 91, 561, 41041, 825265, 1000000008];
    for p in primes {
        assert!(is_prime(p, 10), "{} is prime", p);
    }
    for n in composites {
        assert!(!is_prime(n, 10), "{} is composite", n);
    }
}

#[test]
fn test_pow_mod() {
    assert_eq!(1, pow_mod(2, 10, 1023));
    assert_eq!(445, pow_mod(4, 13, 497));
    assert_eq!(0, pow_mod(10, 5, 2));
}
