//! `WorkerLink` — the message-passing seam (§4.5, §9's "runtime bootstrap is
//! out of scope" supplement).
//!
//! Grounded directly on
//! `other_examples/.../message_broker.rs`'s `SimCommunicator` trait and its
//! `ChannelSimCommunicator` / `DummySimCommunicator` implementations: a full
//! mesh of `std::sync::mpsc` channels stands in for MPI ranks, one OS thread
//! per worker. Hand-off and snapshot traffic use independent channel meshes
//! (§4.6's supplement) so a snapshot gather can never be mistaken for a
//! tick's hand-off messages or vice versa.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Barrier};

use metro_core::{Tick, WorkerId};

use crate::error::{TransferError, TransferResult};
use crate::message::{SnapshotMessage, TransferMessage};

/// The message-passing seam a worker depends on, analogous to
/// `message_broker.rs`'s `SimCommunicator`. `metro-sim::Worker<L>` is
/// generic over this trait and neither knows nor cares whether it is
/// backed by threads, channels, or (in principle) real processes.
pub trait WorkerLink: Send {
    fn worker_id(&self) -> WorkerId;
    fn num_workers(&self) -> usize;

    /// Post one non-blocking hand-off or sentinel message to `to` (§4.5
    /// "sends are non-blocking").
    fn send_handoff(&self, to: WorkerId, msg: TransferMessage);

    /// Block until exactly `expected` hand-off messages addressed to this
    /// worker for `tick` have arrived; sentinel ("no vehicle") messages are
    /// discarded, real ones returned (§4.5).
    fn recv_handoffs(&self, tick: Tick, expected: usize) -> TransferResult<Vec<metro_vehicle::Vehicle>>;

    /// Collective barrier delimiting the tick, after the local step
    /// sequence and all pending sends have been posted (§4.5, §5).
    fn barrier(&self);

    /// Participate in the collective gather to worker 0 (§4.6). Every
    /// worker calls this once per print-window tick with its own live
    /// vehicles; worker 0's return value additionally contains every other
    /// worker's `SnapshotMessage`. Workers other than 0 get back an empty
    /// `Vec` — their contribution has been handed to the coordinator.
    fn gather_snapshot(&self, mine: SnapshotMessage) -> TransferResult<Vec<SnapshotMessage>>;
}

// ── DummyLink ─────────────────────────────────────────────────────────────────

/// A no-op `WorkerLink` for `W = 1`: there is no peer to send to or receive
/// from, so every method is trivial. Grounded on
/// `message_broker.rs`'s `DummySimCommunicator`.
pub struct DummyLink;

impl WorkerLink for DummyLink {
    fn worker_id(&self) -> WorkerId {
        WorkerId(0)
    }

    fn num_workers(&self) -> usize {
        1
    }

    fn send_handoff(&self, _to: WorkerId, _msg: TransferMessage) {
        unreachable!("a single worker owns every segment; there is no remote edge to send on")
    }

    fn recv_handoffs(&self, _tick: Tick, expected: usize) -> TransferResult<Vec<metro_vehicle::Vehicle>> {
        debug_assert_eq!(expected, 0, "a single worker never expects a remote hand-off");
        Ok(Vec::new())
    }

    fn barrier(&self) {}

    fn gather_snapshot(&self, mine: SnapshotMessage) -> TransferResult<Vec<SnapshotMessage>> {
        Ok(vec![mine])
    }
}

// ── ChannelLink ───────────────────────────────────────────────────────────────

/// One worker's endpoint into an `mpsc`-backed full mesh, the `ChannelLink`
/// analog of `message_broker.rs`'s `ChannelSimCommunicator`.
pub struct ChannelLink {
    worker_id: WorkerId,
    num_workers: usize,
    handoff_senders: Vec<Sender<TransferMessage>>,
    handoff_receiver: Receiver<TransferMessage>,
    snapshot_senders: Vec<Sender<SnapshotMessage>>,
    snapshot_receiver: Receiver<SnapshotMessage>,
    barrier: Arc<Barrier>,
}

impl ChannelLink {
    /// Build one `ChannelLink` per worker, wired into a full `n²` mesh —
    /// the `create_n_2_n` pattern from `message_broker.rs`, extended with a
    /// second, independent mesh for snapshot traffic and a shared tick
    /// barrier.
    pub fn create_mesh(num_workers: usize) -> Vec<ChannelLink> {
        let mut handoff_senders = Vec::with_capacity(num_workers);
        let mut handoff_receivers = Vec::with_capacity(num_workers);
        let mut snapshot_senders = Vec::with_capacity(num_workers);
        let mut snapshot_receivers = Vec::with_capacity(num_workers);

        for _ in 0..num_workers {
            let (tx, rx) = channel();
            handoff_senders.push(tx);
            handoff_receivers.push(rx);
            let (tx, rx) = channel();
            snapshot_senders.push(tx);
            snapshot_receivers.push(rx);
        }

        let barrier = Arc::new(Barrier::new(num_workers));

        handoff_receivers
            .into_iter()
            .zip(snapshot_receivers)
            .enumerate()
            .map(|(idx, (handoff_receiver, snapshot_receiver))| ChannelLink {
                worker_id: WorkerId(idx as u32),
                num_workers,
                handoff_senders: handoff_senders.clone(),
                handoff_receiver,
                snapshot_senders: snapshot_senders.clone(),
                snapshot_receiver,
                barrier: Arc::clone(&barrier),
            })
            .collect()
    }
}

impl WorkerLink for ChannelLink {
    fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    fn num_workers(&self) -> usize {
        self.num_workers
    }

    fn send_handoff(&self, to: WorkerId, msg: TransferMessage) {
        self.handoff_senders[to.index()]
            .send(msg)
            .expect("peer worker's hand-off receiver dropped before the run finished");
    }

    fn recv_handoffs(&self, tick: Tick, expected: usize) -> TransferResult<Vec<metro_vehicle::Vehicle>> {
        let mut out = Vec::with_capacity(expected);
        for _ in 0..expected {
            let msg = self.handoff_receiver.recv().map_err(|_| TransferError::ChannelClosed)?;
            if msg.tick != tick {
                return Err(TransferError::TickMismatch { expected: tick.0, got: msg.tick.0 });
            }
            if let Some(vehicle) = msg.vehicle {
                out.push(vehicle);
            }
        }
        Ok(out)
    }

    fn barrier(&self) {
        self.barrier.wait();
    }

    fn gather_snapshot(&self, mine: SnapshotMessage) -> TransferResult<Vec<SnapshotMessage>> {
        if self.worker_id.index() == 0 {
            let mut all = vec![mine];
            for _ in 1..self.num_workers {
                let msg = self.snapshot_receiver.recv().map_err(|_| TransferError::ChannelClosed)?;
                all.push(msg);
            }
            Ok(all)
        } else {
            self.snapshot_senders[0]
                .send(mine)
                .expect("rank 0's snapshot receiver dropped before the run finished");
            Ok(Vec::new())
        }
    }
}
