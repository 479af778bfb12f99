//! Grid cell types

mod coordinate;

pub use coordinate::{decode_or_unknown, CellCoordinate};
