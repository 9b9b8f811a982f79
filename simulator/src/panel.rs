//! SDL window standing in for the ILI9341.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use potgraph::Panel;
use potgraph::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Simulated 320x240 panel. Drawing goes to an off-screen buffer, a flush
/// presents it in the window and drains pending window events.
pub struct SimulatorPanel {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    quit_requested: bool,
}

impl SimulatorPanel {
    pub fn new(title: &str) -> Self {
        let output_settings = OutputSettingsBuilder::new().scale(2).build();
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window: Window::new(title, &output_settings),
            quit_requested: false,
        }
    }

    /// Whether the window was closed during a flush.
    pub const fn quit_requested(&self) -> bool { self.quit_requested }
}

impl OriginDimensions for SimulatorPanel {
    fn size(&self) -> Size { self.display.size() }
}

impl DrawTarget for SimulatorPanel {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.clear(color)
    }
}

impl Panel for SimulatorPanel {
    async fn flush(&mut self) {
        self.window.update(&self.display);

        // events() is only valid after the first update
        if self.window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            self.quit_requested = true;
        }
    }
}
