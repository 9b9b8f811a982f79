//! Potentiometer graph firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Samples a potentiometer on ADC0 every 10 ms and draws a scrolling graph of the
//! readings on a 320x240 ILI9341 display.
//!
//! # Architecture
//!
//! Two tasks of equal priority connected by a single-slot mailbox:
//! - Sampler task: reads the ADC, optionally smooths, offers the value, sleeps
//! - Display task: waits for a value, updates the history, renders and flushes a frame
//!
//! The mailbox drops new values while the previous one is unconsumed, so a slow flush
//! never delays sampling.
//!
//! # Features
//!
//! - `smoothing`: plot the 20-sample moving average instead of raw readings
//! - `demo-sensor`: plot a synthetic sweep instead of the ADC

#![no_std]
#![no_main]
// Crate-level lints (match the library for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod display;
mod ili9341;
#[cfg(not(feature = "demo-sensor"))]
mod sensor;
mod tasks;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use potgraph::config::FRAMEBUFFER_SIZE;
use potgraph::{Display, Framebuffer, Mailbox, Sampler, Stage};
use static_cell::{ConstStaticCell, StaticCell};
use {defmt_rtt as _, panic_probe as _};

use crate::display::display_spi_config;
use crate::ili9341::{Ili9341Flusher, Ili9341Panel};
use crate::tasks::{SampleMailbox, Sensor, display_task, sampler_task};

#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-potgraph"),
    embassy_rp::binary_info::rp_program_description!(c"Scrolling potentiometer graph on ILI9341"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Frame storage, zero-initialized in .bss (no stack copy of the 150 KB array).
static FRAMEBUFFER: ConstStaticCell<[u8; FRAMEBUFFER_SIZE]> = ConstStaticCell::new([0; FRAMEBUFFER_SIZE]);

/// Mailbox storage; the mailbox itself is created in `main`.
static MAILBOX: StaticCell<SampleMailbox> = StaticCell::new();

/// Processing stage selected at build time.
const fn sampling_stage() -> Stage {
    if cfg!(feature = "smoothing") {
        Stage::smoothed()
    } else {
        Stage::Raw
    }
}

#[cfg(not(feature = "demo-sensor"))]
fn build_sensor(
    adc: embassy_rp::Peri<'static, embassy_rp::peripherals::ADC>,
    pin: embassy_rp::Peri<'static, embassy_rp::peripherals::PIN_26>,
) -> Sensor {
    use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
    use embassy_rp::gpio::Pull;

    let adc = Adc::new_blocking(adc, AdcConfig::default());
    let channel = Channel::new_pin(pin, Pull::None);
    crate::sensor::PotSensor::new(adc, channel)
}

#[cfg(feature = "demo-sensor")]
fn build_sensor(
    _adc: embassy_rp::Peri<'static, embassy_rp::peripherals::ADC>,
    _pin: embassy_rp::Peri<'static, embassy_rp::peripherals::PIN_26>,
) -> Sensor {
    potgraph::DemoSignal::new()
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Potentiometer graph starting...");

    let p = embassy_rp::init(Default::default());

    let sensor = build_sensor(p.ADC, p.PIN_26);
    info!("Sensor initialized (demo: {})", cfg!(feature = "demo-sensor"));

    // Display pins: CS=17, DC=20, RST=21, CLK=18, MOSI=19
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    // Async SPI with DMA (TX-only, the display doesn't need MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());

    let mut flusher = Ili9341Flusher::new(spi, dc, cs, rst);
    flusher.init().await;
    info!("Display initialized");

    let panel = Ili9341Panel::new(Framebuffer::new(FRAMEBUFFER.take()), flusher);

    let mailbox: &'static SampleMailbox = MAILBOX.init(Mailbox::new());

    spawner.spawn(display_task(Display::new(panel), mailbox)).unwrap();
    info!("Display task spawned");

    spawner
        .spawn(sampler_task(Sampler::new(sensor, sampling_stage()), mailbox))
        .unwrap();
    info!("Sampler task spawned");
}
