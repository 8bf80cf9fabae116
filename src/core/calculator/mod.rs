pub mod net;
pub mod stats;
pub mod trend;
