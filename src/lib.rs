//! Big Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers represented
//!   as a sign and a little-endian sequence of half-width limbs, with
//!   construction from builtin integers and decimal strings, total
//!   ordering, and the `+`, `-`, `*`, `/` operators (division truncates
//!   toward zero).
//! - [`BigIntError`]: The failure cases — a malformed decimal string or a
//!   zero divisor.

mod big_int;
mod big_int_cache;
mod error;
mod limb;

pub use big_int::BigInt;
pub use error::BigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!(&a + &b, "10900000000000".parse().unwrap());
        assert_eq!(&a - &b, "9100000000000".parse().unwrap());
        assert_eq!(&a * &b, "9000000000000000000000000".parse().unwrap());
        assert_eq!(&a / &b, BigInt::from(11));
    }
}
