pub mod combine;

pub use combine::{CombineAnnotationsError, CombineAnnotationsQuery, CombineAnnotationsResponse};
