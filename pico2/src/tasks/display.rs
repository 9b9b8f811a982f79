//! Display task: the consumer side of the pipeline.
//!
//! Blocks on the mailbox, pushes each value into the history, renders a complete frame
//! into the framebuffer and flushes it to the ILI9341 via DMA. The sampler keeps running
//! while a flush is in flight; values produced meanwhile are dropped at the mailbox.

use defmt::info;
use potgraph::Display;

use super::SampleMailbox;
use crate::ili9341::Ili9341Panel;

#[embassy_executor::task]
pub async fn display_task(
    mut display: Display<Ili9341Panel>,
    mailbox: &'static SampleMailbox,
) {
    info!("Display task started");
    display.run(mailbox).await
}
