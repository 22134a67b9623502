mod field;
pub mod modular;
mod multiply;
mod point;

pub use field::FieldElement;
pub use point::Point;
