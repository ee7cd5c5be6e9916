use metro_core::{Line, StationId};

use crate::network::NetworkBuilder;

/// Three stations, a single line A-B-C, walked forward then backward.
fn three_station_line() -> crate::Network {
    let mut b = NetworkBuilder::new();
    let a = b.add_station("A".into(), 0);
    let s = b.add_station("B".into(), 1);
    let c = b.add_station("C".into(), 2);
    // adjacency: A->B, B->A, B->C, C->B
    let matrix = vec![
        vec![0, 1, 0],
        vec![1, 0, 1],
        vec![0, 1, 0],
    ];
    b.set_adjacency(&matrix).unwrap();
    b.set_line(Line::Green, &[a, s, c]).unwrap();
    b.build()
}

#[test]
fn forward_chain_links_to_next_forward_segment() {
    let net = three_station_line();
    let ab = net.forward_start(Line::Green).unwrap();
    let bc = net.successor(ab, Line::Green).unwrap();
    assert_eq!(net.segment(bc).source, StationId(1));
    assert_eq!(net.segment(bc).destination, StationId(2));
}

#[test]
fn forward_terminal_hands_off_to_backward_start() {
    let net = three_station_line();
    let ab = net.forward_start(Line::Green).unwrap();
    let bc = net.successor(ab, Line::Green).unwrap();
    let after_bc = net.successor(bc, Line::Green).unwrap();
    assert_eq!(after_bc, net.backward_start(Line::Green).unwrap());
    assert_eq!(net.segment(after_bc).source, StationId(2));
    assert_eq!(net.segment(after_bc).destination, StationId(1));
}

#[test]
fn backward_terminal_hands_off_to_forward_start() {
    let net = three_station_line();
    let cb = net.backward_start(Line::Green).unwrap();
    let ba = net.successor(cb, Line::Green).unwrap();
    let after_ba = net.successor(ba, Line::Green).unwrap();
    assert_eq!(after_ba, net.forward_start(Line::Green).unwrap());
}

#[test]
fn cycle_length_is_twice_segments_minus_one() {
    // A 3-station line produces a 4-segment cycle: A->B, B->C, C->B, B->A.
    let net = three_station_line();
    assert_eq!(net.segment_count(), 4);
    let start = net.forward_start(Line::Green).unwrap();
    let mut cur = start;
    let mut seen = vec![cur];
    for _ in 0..10 {
        cur = net.successor(cur, Line::Green).unwrap();
        if cur == start {
            break;
        }
        seen.push(cur);
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn single_station_pair_alternates_direction_each_traversal() {
    // Two stations, one segment each way: a degenerate 2-segment cycle.
    let mut b = NetworkBuilder::new();
    let a = b.add_station("A".into(), 0);
    let s = b.add_station("B".into(), 0);
    let matrix = vec![vec![0, 1], vec![1, 0]];
    b.set_adjacency(&matrix).unwrap();
    b.set_line(Line::Green, &[a, s]).unwrap();
    let net = b.build();

    assert_eq!(net.segment_count(), 2);
    let fwd = net.forward_start(Line::Green).unwrap();
    let back = net.backward_start(Line::Green).unwrap();
    assert_eq!(net.successor(fwd, Line::Green).unwrap(), back);
    assert_eq!(net.successor(back, Line::Green).unwrap(), fwd);
}

#[test]
fn line_too_short_is_rejected() {
    let mut b = NetworkBuilder::new();
    let a = b.add_station("A".into(), 0);
    b.set_adjacency(&[vec![0]]).unwrap();
    assert!(matches!(
        b.set_line(Line::Green, &[a]),
        Err(crate::NetworkError::LineTooShort)
    ));
}

#[test]
fn missing_segment_is_reported() {
    let mut b = NetworkBuilder::new();
    let a = b.add_station("A".into(), 0);
    let s = b.add_station("B".into(), 0);
    // no adjacency entries at all -> A-B segment doesn't exist
    b.set_adjacency(&[vec![0, 0], vec![0, 0]]).unwrap();
    assert!(matches!(
        b.set_line(Line::Green, &[a, s]),
        Err(crate::NetworkError::MissingSegment { .. })
    ));
}

#[test]
fn ragged_adjacency_is_rejected() {
    let mut b = NetworkBuilder::new();
    b.add_station("A".into(), 0);
    b.add_station("B".into(), 0);
    assert!(matches!(
        b.set_adjacency(&[vec![0, 1], vec![1]]),
        Err(crate::NetworkError::RaggedAdjacency { .. })
    ));
}

#[test]
fn distinct_successors_dedupes_across_lines() {
    // Two lines sharing the same physical segments should collapse to the
    // same successor set per segment if they share a successor.
    let mut b = NetworkBuilder::new();
    let a = b.add_station("A".into(), 0);
    let s = b.add_station("B".into(), 1);
    let c = b.add_station("C".into(), 2);
    let matrix = vec![
        vec![0, 1, 0],
        vec![1, 0, 1],
        vec![0, 1, 0],
    ];
    b.set_adjacency(&matrix).unwrap();
    b.set_line(Line::Green, &[a, s, c]).unwrap();
    b.set_line(Line::Yellow, &[a, s, c]).unwrap();
    let net = b.build();

    let ab = net.forward_start(Line::Green).unwrap();
    let successors = net.segment(ab).distinct_successors();
    assert_eq!(successors.len(), 1, "both lines route A->B to the same B->C segment");
}
