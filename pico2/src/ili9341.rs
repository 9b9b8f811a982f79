//! Async ILI9341 display driver with a single full-screen framebuffer.
//!
//! # Architecture
//!
//! - [`Ili9341Flusher`]: owns the SPI peripheral and control pins, runs the init
//!   sequence and streams a finished frame to the panel with DMA
//! - [`Ili9341Panel`]: pairs a [`Framebuffer`] with a flusher and implements
//!   [`Panel`], so the shared renderer can draw into it and flush it
//!
//! The framebuffer is stored big-endian RGB565, the panel's native order, so a
//! flush is one `RAMWR` command followed by a single DMA transfer.

use defmt::trace;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::{Instant, Timer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use potgraph::Framebuffer;
use potgraph::Panel;
use potgraph::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

// ILI9341 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const PASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const PIXFMT: u8 = 0x3A;

// MADCTL flags
const MADCTL_MV: u8 = 0x20; // Row/column exchange
const MADCTL_BGR: u8 = 0x08; // BGR panel color order

/// Landscape orientation (rotation 1): 320 columns by 240 rows.
const MADCTL_LANDSCAPE: u8 = MADCTL_MV | MADCTL_BGR;

/// 16 bits per pixel for both the RGB and MCU interfaces.
const PIXFMT_RGB565: u8 = 0x55;

/// ILI9341 flusher - owns SPI and handles async DMA transfers.
pub struct Ili9341Flusher<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
    rst: Output<'d>,
}

impl<'d> Ili9341Flusher<'d> {
    /// Create a new flusher from SPI and control pins.
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
        rst: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Reset and configure the controller, then open a full-screen window.
    pub async fn init(&mut self) {
        // Hardware reset pulse
        self.rst.set_low();
        Timer::after_millis(10).await;
        self.rst.set_high();
        Timer::after_millis(120).await;

        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        // Sleep out needs 120 ms before the panel accepts further configuration reliably
        self.write_command(SLPOUT).await;
        Timer::after_millis(120).await;

        self.write_command(PIXFMT).await;
        self.write_data(&[PIXFMT_RGB565]).await;

        // Rotation is applied once here and never changed afterwards
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_LANDSCAPE]).await;

        self.write_command(NORON).await;
        Timer::after_millis(10).await;

        self.write_command(DISPON).await;
        Timer::after_millis(10).await;

        // Every flush covers the whole screen, so the window is set once
        self.set_window(0, 0, SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16).await;
    }

    /// Send a command byte (DC low, CS low during transfer).
    async fn write_command(
        &mut self,
        cmd: u8,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high, CS low during transfer).
    async fn write_data(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    /// Set the column/page address window.
    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let x1 = x + w - 1;
        let y1 = y + h - 1;

        self.write_command(CASET).await;
        self.write_data(&[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8])
            .await;

        self.write_command(PASET).await;
        self.write_data(&[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8])
            .await;
    }

    /// Stream a full frame to the display.
    pub async fn flush_buffer(
        &mut self,
        buffer: &[u8],
    ) {
        // RAMWR then the pixel data with CS held low
        self.cs.set_low();
        self.dc.set_low();
        // Blocking write for the single command byte (cheaper than a DMA setup)
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(buffer).await.ok();
        self.cs.set_high();
    }
}

/// Framebuffer plus flusher: the render target of the display task.
pub struct Ili9341Panel {
    frame: Framebuffer<'static>,
    flusher: Ili9341Flusher<'static>,
}

impl Ili9341Panel {
    pub fn new(
        frame: Framebuffer<'static>,
        flusher: Ili9341Flusher<'static>,
    ) -> Self {
        Self { frame, flusher }
    }
}

impl OriginDimensions for Ili9341Panel {
    fn size(&self) -> Size { self.frame.size() }
}

impl DrawTarget for Ili9341Panel {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.frame.draw_iter(pixels)
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.frame.fill_solid(area, color)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.frame.clear(color)
    }
}

impl Panel for Ili9341Panel {
    async fn flush(&mut self) {
        let flush_start = Instant::now();
        self.flusher.flush_buffer(self.frame.as_bytes()).await;
        trace!("Frame flushed in {} us", flush_start.elapsed().as_micros());
    }
}
