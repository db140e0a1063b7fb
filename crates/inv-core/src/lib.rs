pub mod analysis;
pub mod checker;
pub mod curve;
pub mod deck;
pub mod delay;
pub mod error;
pub mod netlist;
pub mod output;
pub mod params;
pub mod psf;
pub mod threshold;

pub use error::{Error, Result};
pub use inv_devices::DeviceParameters;
