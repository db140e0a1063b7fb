pub mod inverter;
pub mod mosfet;

pub use inverter::DeviceParameters;
pub use mosfet::{ModelCard, MosType, MosfetSizing};
