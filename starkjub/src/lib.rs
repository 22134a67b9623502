//#![deny(warnings)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod codec;
pub mod curve;
mod error;
pub mod parse;

pub use arithmetic::{FieldElement, Point};
pub use codec::{decompress, CompressedPoint};
pub use curve::{Curve, CurveParams, STARKJUB_SAMPLE_X, STARKJUB_SAMPLE_Y};
pub use error::CurveError;
pub use num_bigint::{BigInt, BigUint};
