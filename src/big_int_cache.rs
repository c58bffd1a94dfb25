use lazy_static::*;

use crate::limb::Limb;
use crate::BigInt;

/// Largest magnitude served out of the interned caches.
pub(crate) const MAX_CONSTANT: usize = 16;

lazy_static! {
    pub(crate) static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|val| BigInt::from_parts(false, vec![val as Limb]));
    pub(crate) static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|val| BigInt::from_parts(true, vec![val as Limb]));
    /// The decimal base, interned for the string constructor.
    pub(crate) static ref TEN: BigInt = POS_CACHE[10].clone();
}
