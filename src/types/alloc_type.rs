//! Allocation-backed types shared by the `std` and `no_std` builds.

pub use alloc::string::String;
pub use alloc::vec::Vec;

#[doc(hidden)]
pub use alloc::format;
