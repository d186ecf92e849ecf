pub mod upload;

pub use upload::{UploadGenesCommand, UploadGenesError, UploadGenesResponse};
