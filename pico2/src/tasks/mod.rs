//! Embassy tasks of the firmware.
//!
//! Both run at the same priority on the thread-mode executor:
//! - `sampler`: reads the potentiometer every `SAMPLE_PERIOD_MS` and offers the value to the mailbox
//! - `display`: waits on the mailbox and redraws the graph for every received value

pub mod display;
pub mod sampler;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use potgraph::Mailbox;

pub use display::display_task;
pub use sampler::{Sensor, sampler_task};

/// Mailbox shared by the two tasks. Built once in `main` and handed to both.
pub type SampleMailbox = Mailbox<CriticalSectionRawMutex, u16>;
