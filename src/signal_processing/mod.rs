pub mod biquad;
pub mod dataset;

pub use biquad::{Filter, SECTION_LEN};
pub use dataset::{DataSet, remap};
