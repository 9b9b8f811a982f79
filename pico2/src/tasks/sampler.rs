//! Sampling task: the producer side of the pipeline.

use defmt::{debug, info, trace, warn};
use embassy_time::Timer;
use potgraph::config::SAMPLE_PERIOD_MS;
use potgraph::{SampleOutcome, Sampler};

use super::SampleMailbox;

/// Sensor driving the graph: the potentiometer, or the synthetic sweep with `demo-sensor`.
#[cfg(not(feature = "demo-sensor"))]
pub type Sensor = crate::sensor::PotSensor;

/// Sensor driving the graph: the potentiometer, or the synthetic sweep with `demo-sensor`.
#[cfg(feature = "demo-sensor")]
pub type Sensor = potgraph::DemoSignal;

/// Sample forever at a fixed period.
///
/// A full mailbox is normal when rendering is slower than sampling; the dropped value is
/// only traced.
#[embassy_executor::task]
pub async fn sampler_task(
    mut sampler: Sampler<Sensor>,
    mailbox: &'static SampleMailbox,
) {
    info!("Sampler task started (smoothing: {})", sampler.is_smoothing());

    loop {
        match sampler.sample(mailbox) {
            SampleOutcome::Delivered(value) => debug!("Potentiometer value: {}", value),
            SampleOutcome::Dropped(value) => trace!("Mailbox full, dropped {}", value),
            SampleOutcome::Skipped(fault) => warn!("Sensor read skipped: {}", fault),
        }

        Timer::after_millis(SAMPLE_PERIOD_MS).await;
    }
}
