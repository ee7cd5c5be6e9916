//! Reproduces §8 Scenario B: two vehicles on the same three-station loop as
//! Scenario A, one spawned forward from A and one backward from C, both
//! converging on B over the print window.

use std::sync::Arc;

use metro_core::{Line, RunConfig, Tick};
use metro_network::{Network, NetworkBuilder};
use metro_sim::{Worker, WorkerObserver};
use metro_transfer::DummyLink;

fn three_station_network() -> Arc<Network> {
    let mut b = NetworkBuilder::new();
    let a = b.add_station("A".into(), 0);
    let s = b.add_station("B".into(), 0);
    let c = b.add_station("C".into(), 0);
    let matrix = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
    b.set_adjacency(&matrix).unwrap();
    b.set_line(Line::Green, &[a, s, c]).unwrap();
    Arc::new(b.build())
}

struct Collector(Vec<String>);
impl WorkerObserver for Collector {
    fn on_snapshot(&mut self, _tick: Tick, line: &str) {
        self.0.push(line.to_string());
    }
}

#[test]
fn scenario_b_two_vehicles_converge_on_shared_platform() {
    let network = three_station_network();
    let config = RunConfig { total_ticks: 4, print_lines: 4, line_totals: [2, 0, 0], worker_count: 1 };
    let mut worker = Worker::new(network, config, DummyLink);

    let mut collector = Collector(Vec::new());
    worker.run(&mut collector).unwrap();

    assert!(collector.0[0].contains("g0-A#") && collector.0[0].contains("g1-C#"), "{:?}", collector.0);
    assert!(collector.0[1].contains("g0-A%") && collector.0[1].contains("g1-C%"), "{:?}", collector.0);
    assert!(collector.0[2].contains("g0-A->B") && collector.0[2].contains("g1-C->B"), "{:?}", collector.0);
    assert!(collector.0[3].contains("g0-B#") && collector.0[3].contains("g1-B#"), "{:?}", collector.0);
}
