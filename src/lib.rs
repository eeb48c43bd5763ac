//! TCP segment checksum verification
//!
//! Recomputes the RFC 793 / RFC 1071 Internet checksum of captured TCP
//! segments over a synthesized IPv4 pseudo-header and compares the result
//! against the checksum embedded in each segment.
//!
//! The core is pure and stateless: [`checksum`] implements the
//! one's-complement word sum, [`pseudo`] builds the 12-byte pseudo-header,
//! [`segment`] gives checked access to raw segment bytes and [`validate`]
//! ties them together into the zero/compare protocol. [`loader`] layers
//! the capture-file batch convention (`tcp_addrs_<n>.txt` /
//! `tcp_data_<n>.dat` pairs) on top and is the only module that touches
//! the filesystem.
//!
//! # Quick Start
//!
//! ```rust
//! use segcheck::{validate, Ipv4Addr};
//!
//! let src = Ipv4Addr::new(192, 168, 1, 1);
//! let dst = Ipv4Addr::new(192, 168, 1, 2);
//!
//! // A 20-byte header carrying its correct checksum at offsets 16-17.
//! let mut segment = [0u8; 20];
//! segment[16] = 0x7C;
//! segment[17] = 0x91;
//! assert_eq!(validate::verify(src, dst, &segment), Ok(true));
//!
//! // One corrupted byte flips the verdict, not the error channel.
//! segment[4] ^= 0x01;
//! assert_eq!(validate::verify(src, dst, &segment), Ok(false));
//! ```

// Core checksum engine
pub mod addr;
pub mod checksum;
pub mod error;
pub mod pseudo;
pub mod segment;
pub mod validate;

// Batch driver over capture files
pub mod loader;

pub use addr::Ipv4Addr;
pub use checksum::{calculate_checksum, fold_sum, sum_words};
pub use error::{ValidationError, ValidationResult};
pub use loader::{run, CaptureDir, LoaderError, LoaderResult, UnitOutcome};
pub use pseudo::{PseudoHeader, PROTO_TCP, PSEUDO_HEADER_LEN};
pub use segment::{TcpSegment, CHECKSUM_OFFSET, MIN_SEGMENT_LEN};
pub use validate::{segment_checksum, verify, verify_segment};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
