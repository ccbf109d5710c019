pub mod generator;

pub use generator::{DataGenerator, DataShape, GenerateError, ParseDataShapeError};
