//! Display wiring for a 2.8" ILI9341 SPI module (320x240).
//!
//! Pin mapping:
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - CS: GPIO17
//! - DC: GPIO20
//! - RST: GPIO21
//!
//! The potentiometer wiper goes to GPIO26 (ADC0).

use embassy_rp::spi::Config as SpiConfig;

/// SPI clock for the ILI9341. Write cycles are specified down to 100 ns, but common
/// modules run reliably well above that.
pub const DISPLAY_SPI_FREQ_HZ: u32 = 40_000_000;

/// SPI configuration for the ILI9341 (mode 0, TX only).
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = DISPLAY_SPI_FREQ_HZ;
    config
}
