//! An implementation of the [Streebog] cryptographic hash function defined
//! in GOST R 34.11-2012, behind a small incremental-digest contract.
//!
//! Both output sizes share one compression core and differ only in the
//! initialization vector and in the 256-bit variant keeping the high half
//! of the 512-bit result.
//!
//! # Usage
//!
//! The hashers implement the `digest` crate traits:
//!
//! ```rust
//! use streebog_engine::{Digest, Streebog256, Streebog512};
//! use hex_literal::hex;
//!
//! // create a hasher object, to use it do not forget to import `Digest` trait
//! let mut hasher = Streebog256::new();
//! // write input message
//! hasher.update(b"012345678901234567890123456789012345678901234567890123456789012");
//! // read hash digest (it will consume hasher)
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     9d151eefd8590b89daa6ba6cb74af927
//!     5dd051026bb149a452fd84e5e57b5500
//! ")[..]);
//!
//! // same for Streebog512
//! let mut hasher = Streebog512::new();
//! hasher.update(b"012345678901234567890123456789012345678901234567890123456789012");
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     1b54d01a4af5b9d5cc3d86d68d285462b19abc2475222f35c085122be4ba1ffa
//!     00ad30f8767b3a82384c6574f024c311e2a481332b08ef7f41797891c1646f48
//! ")[..]);
//! ```
//!
//! They are also usable through the object-safe [`DigestEngine`] contract,
//! which writes into caller-provided buffers and reports contract
//! violations as [`Error`]s:
//!
//! ```rust
//! use streebog_engine::{DigestEngine, SnapshotDigest, Streebog512};
//!
//! let mut hasher = Streebog512::default();
//! hasher.update_slice(b"prefix");
//! let mut branch = hasher.snapshot();
//!
//! let mut out = [0u8; 64];
//! assert_eq!(hasher.finalize_at(&mut out, 0), Ok(64));
//! assert!(branch.finalize_at(&mut out, 1).is_err());
//! ```
//!
//! [Streebog]: https://en.wikipedia.org/wiki/Streebog

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

mod consts;
mod engine;
mod error;
mod non_snapshot;
#[cfg(feature = "alloc")]
mod null;
mod streebog;
mod streebog256;
mod streebog512;
mod table;

pub use engine::{DigestEngine, SnapshotDigest};
pub use error::Error;
pub use non_snapshot::NonSnapshotDigest;
#[cfg(feature = "alloc")]
pub use null::NullDigest;
pub use streebog256::{Streebog256, Streebog256Core};
pub use streebog512::{Streebog512, Streebog512Core};
