//! Process-wide default adapters, selected by build target.
//!
//! `Platform::new()` starts from these; tests and hosts swap single ports
//! with the `Platform::with_*` builders.

use super::{Clock, ConsoleLogger, Document, StorageProbe};
use crate::ports::{ClockPort, DocumentPort, LoggerPort, StorageProbePort};
use once_cell::sync::Lazy;

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);
static CLOCK: Lazy<Clock> = Lazy::new(Clock::new);
static STORAGE_PROBE: Lazy<StorageProbe> = Lazy::new(StorageProbe::new);
static DOCUMENT: Lazy<Document> = Lazy::new(Document::new);

#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}

#[inline]
pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}

pub fn storage_probe() -> &'static dyn StorageProbePort {
    &*STORAGE_PROBE
}

pub fn document() -> &'static dyn DocumentPort {
    &*DOCUMENT
}
