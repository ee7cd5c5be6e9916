//! Fluent builder for [`Worker`], mirroring `dt_sim::SimBuilder`'s
//! validate-then-build shape — scaled down, since a worker has only one
//! cross-cutting invariant to check before it can run.

use std::sync::Arc;

use metro_core::RunConfig;
use metro_network::Network;
use metro_transfer::WorkerLink;

use crate::error::{SimError, SimResult};
use crate::worker::Worker;

pub struct WorkerBuilder<L: WorkerLink> {
    network: Arc<Network>,
    config: RunConfig,
    link: L,
}

impl<L: WorkerLink> WorkerBuilder<L> {
    pub fn new(network: Arc<Network>, config: RunConfig, link: L) -> Self {
        Self { network, config, link }
    }

    /// Validates that `link`'s mesh size agrees with `config.worker_count`
    /// — a mismatch here means the coordinator wired up the wrong number of
    /// channel endpoints, a setup bug rather than a runtime condition.
    pub fn build(self) -> SimResult<Worker<L>> {
        if self.link.num_workers() != self.config.worker_count {
            return Err(SimError::WorkerCountMismatch {
                configured: self.config.worker_count,
                link: self.link.num_workers(),
            });
        }
        Ok(Worker::new(self.network, self.config, self.link))
    }
}
