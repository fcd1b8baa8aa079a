// textsan-ascii/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod charset;
pub mod filter;
pub mod hex;

pub use hex::HexError;
