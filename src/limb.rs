//! Limb configuration shared by every magnitude kernel.
//!
//! A limb physically occupies a native unsigned integer but only ever holds
//! values below `2^(W/2)`, where `W` is the native width. The upper half is
//! headroom: a limb-by-limb product and any carry accumulation stay inside
//! the storage type.

/// Native storage type of one limb.
#[cfg(not(feature = "limb-32"))]
pub(crate) type Limb = u64;
/// Native storage type of one limb.
#[cfg(feature = "limb-32")]
pub(crate) type Limb = u32;

/// Number of value bits a limb actually holds.
pub(crate) const HALF_BITS: u32 = Limb::BITS / 2;

/// Mask selecting the value bits of a limb.
pub(crate) const HALF_MASK: Limb = (1 << HALF_BITS) - 1;

const _: () = assert!(HALF_BITS > 0, "Limb must be an integral type with at least 2 bits");
