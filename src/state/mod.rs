pub mod viewport;

pub use viewport::{ViewportState, compute_fit_scale};
