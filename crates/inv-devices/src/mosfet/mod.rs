//! MOSFET descriptions used by the inverter lab.
//!
//! Nothing here evaluates a transistor model. The types only describe
//! devices well enough to size them and to print them into a SPICE deck.
//!
//! ## Module Structure
//!
//! - `types`: device polarity (`MosType`) and channel sizing (`MosfetSizing`)
//! - `params`: Level-3 model cards (`ModelCard`) with the lab defaults
//!
//! ## Usage
//!
//! ```ignore
//! use inv_devices::mosfet::{ModelCard, MosType};
//!
//! let card = ModelCard::default_for(MosType::Pmos);
//! assert_eq!(
//!     card.to_spice(),
//!     ".MODEL PMOS PMOS (LEVEL=3 TOX=3.5E-9 VTO=-0.5 GAMMA=0.2 PHI=0.6)"
//! );
//! ```

pub mod params;
pub mod types;

pub use params::ModelCard;
pub use types::{MosType, MosfetSizing};
