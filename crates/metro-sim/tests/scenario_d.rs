//! Reproduces §8 Scenario D: a two-station, two-worker loop where the
//! single vehicle must cross the partition boundary via a real
//! `ChannelLink` hand-off (not the same-worker short-circuit exercised by
//! the single-worker tests elsewhere in this repository).

use std::sync::Arc;
use std::thread;

use metro_core::{Line, RunConfig};
use metro_network::{Network, NetworkBuilder};
use metro_sim::{NoopObserver, Worker};
use metro_transfer::ChannelLink;

fn two_station_loop() -> Arc<Network> {
    let mut b = NetworkBuilder::new();
    let a = b.add_station("A".into(), 0);
    let s = b.add_station("B".into(), 0);
    let matrix = vec![vec![0, 3], vec![3, 0]];
    b.set_adjacency(&matrix).unwrap();
    b.set_line(Line::Green, &[a, s]).unwrap();
    Arc::new(b.build())
}

#[test]
fn vehicle_crosses_the_partition_boundary_over_a_channel_mesh() {
    let network = two_station_loop();
    let config = RunConfig { total_ticks: 5, print_lines: 1, line_totals: [1, 0, 0], worker_count: 2 };
    let links = ChannelLink::create_mesh(2);

    let handles: Vec<_> = links
        .into_iter()
        .map(|link| {
            let network = Arc::clone(&network);
            let config = config.clone();
            thread::spawn(move || {
                let mut worker = Worker::new(network, config, link);
                worker.run(&mut NoopObserver).unwrap();
                (worker.worker_id(), worker.live_vehicles())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // Exactly one live vehicle across the whole run (hand-off conservation,
    // §8 P7), and it ends the run owned by worker 1 (the backward segment
    // B->A), since the forward segment A->B (length 3, spawned tick 0)
    // matures exactly at tick 4 and the receiving worker owns the segment
    // it hands off onto.
    let total_live: usize = results.iter().map(|(_, v)| v.len()).sum();
    assert_eq!(total_live, 1);

    let (_, worker1_vehicles) = results.iter().find(|(id, _)| id.index() == 1).unwrap();
    assert_eq!(worker1_vehicles.len(), 1, "the vehicle should have handed off onto worker 1's segment by tick 5");
}
