pub mod dataset;

pub use dataset::{InMemoryDataset, Point, validate};
