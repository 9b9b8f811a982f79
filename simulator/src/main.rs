//! Potentiometer graph simulator for desktop platforms.
//!
//! Runs the same sampler, mailbox and renderer as the firmware, with the
//! synthetic sweep as the sensor and an SDL window as the panel. The sampler
//! runs on its own thread, the display loop on the main thread.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod panel;
mod timing;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use futures::executor::block_on;
use potgraph::{DemoSignal, Display, Mailbox, SampleOutcome, Sampler, Stage};
use tracing::{debug, info, trace, warn};
use tracing_subscriber::EnvFilter;

use crate::panel::SimulatorPanel;
use crate::timing::SAMPLE_PERIOD;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mailbox: Mailbox<CriticalSectionRawMutex, u16> = Mailbox::new();
    let stop = AtomicBool::new(false);

    thread::scope(|scope| {
        scope.spawn(|| run_sampler(&mailbox, &stop));

        let mut display = Display::new(SimulatorPanel::new("Potentiometer Graph Sim"));
        info!("Display loop started");

        loop {
            let value = block_on(mailbox.receive());
            block_on(display.show(value));

            if display.panel().quit_requested() {
                info!("Window closed, shutting down");
                break;
            }
        }

        stop.store(true, Ordering::Relaxed);
    });
}

/// Producer loop: one sample per period until `stop` is set.
fn run_sampler(
    mailbox: &Mailbox<CriticalSectionRawMutex, u16>,
    stop: &AtomicBool,
) {
    let mut sampler = Sampler::new(DemoSignal::new(), Stage::smoothed());
    info!(smoothing = sampler.is_smoothing(), "Sampler started");

    while !stop.load(Ordering::Relaxed) {
        match sampler.sample(mailbox) {
            SampleOutcome::Delivered(value) => trace!(value, "Sample delivered"),
            SampleOutcome::Dropped(value) => debug!(value, "Display busy, sample dropped"),
            SampleOutcome::Skipped(fault) => warn!(?fault, "Sensor read failed"),
        }

        thread::sleep(SAMPLE_PERIOD);
    }

    info!("Sampler stopped");
}
