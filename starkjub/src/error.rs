use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("provided coordinates ({x}, {y}) don't form a point on the curve")]
    NotOnCurve { x: BigUint, y: BigUint },
    #[error("cannot operate on points of different curves")]
    CurveMismatch,
    #[error("attempted to invert zero")]
    NoInverse,
    #[error("addition denominator is not invertible")]
    DegenerateAddition,
    #[error("scalar must be non-negative")]
    InvalidScalar,
    #[error("encoded value does not correspond to a curve point")]
    DecompressionFailure,
    #[error("invalid curve parameters: {0}")]
    InvalidCurve(&'static str),
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}
