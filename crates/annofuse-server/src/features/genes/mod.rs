pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{UploadGenesCommand, UploadGenesError, UploadGenesResponse};

pub use queries::{CombineAnnotationsError, CombineAnnotationsQuery, CombineAnnotationsResponse};

pub use routes::genes_routes;
