mod envelope;
mod indicator;
mod network;
mod operation;
mod params;
mod threat;

pub use envelope::*;
pub use indicator::*;
pub use network::*;
pub use operation::*;
pub use params::*;
pub use threat::*;
