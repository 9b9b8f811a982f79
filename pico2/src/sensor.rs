//! Potentiometer on ADC0, read with blocking single conversions.

use embassy_rp::adc::{Adc, Blocking, Channel};
use potgraph::{AnalogSensor, SensorFault};

/// Potentiometer wiper connected to an ADC input.
pub struct PotSensor {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl PotSensor {
    pub fn new(
        adc: Adc<'static, Blocking>,
        channel: Channel<'static>,
    ) -> Self {
        Self { adc, channel }
    }
}

impl AnalogSensor for PotSensor {
    fn read(&mut self) -> Result<u16, SensorFault> {
        // A conversion error leaves nothing to plot; the sampler retries next period
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| SensorFault::Unavailable)
    }
}
