//! Struct `Sample` represents a batch sample.  

pub mod value;
pub mod feature;
pub mod sample_struct;
pub mod example;
pub mod reader;


pub use value::{Value, ValueRef, ValueKind, Label};
pub use feature::Feature;
pub use sample_struct::{Sample, SampleRow};
pub use example::{Example, Row};
pub use reader::SampleReader;
