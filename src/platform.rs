/// Platform - Dependency injection container for the stateless ports.
///
/// All ports are `&'static` references (zero-cost, `Copy`). Stateful
/// collaborators such as the analytics backend are passed to the provider
/// directly.

use crate::ports::{ClockPort, DocumentPort, LoggerPort, StorageProbePort};

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
    storage_probe: &'static dyn StorageProbePort,
    document: &'static dyn DocumentPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
            storage_probe: crate::adapters::storage_probe(),
            document: crate::adapters::document(),
        }
    }

    pub fn with_logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_clock(mut self, clock: &'static dyn ClockPort) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_storage_probe(mut self, storage_probe: &'static dyn StorageProbePort) -> Self {
        self.storage_probe = storage_probe;
        self
    }

    pub fn with_document(mut self, document: &'static dyn DocumentPort) -> Self {
        self.document = document;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }

    #[inline]
    pub fn storage_probe(&self) -> &'static dyn StorageProbePort {
        self.storage_probe
    }

    #[inline]
    pub fn document(&self) -> &'static dyn DocumentPort {
        self.document
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
