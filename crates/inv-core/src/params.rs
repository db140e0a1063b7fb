//! Caller-side validation of inverter parameters.
//!
//! The threshold, delay and curve models assume sane input and divide by the
//! NMOS width without checking it. Front ends run [`validate`] first.
//!
//! The VTC holds one sample per 10 mV of supply, so the supply is also
//! capped at [`MAX_SUPPLY_VOLTAGE`].

use inv_devices::DeviceParameters;

use crate::error::{Error, Result};

/// Upper bound on the supply voltage [V].
pub const MAX_SUPPLY_VOLTAGE: f64 = 100.0;

pub fn validate(params: &DeviceParameters) -> Result<()> {
    check_positive("supply_voltage", params.supply_voltage)?;
    if params.supply_voltage > MAX_SUPPLY_VOLTAGE {
        return Err(Error::ParameterTooLarge {
            name: "supply_voltage",
            value: params.supply_voltage,
            max: MAX_SUPPLY_VOLTAGE,
        });
    }
    check_positive("p_width", params.p_width)?;
    check_positive("n_width", params.n_width)?;
    check_positive("channel_length", params.channel_length)?;
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}
