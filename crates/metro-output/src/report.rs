//! The §6 textual report format.
//!
//! Grounded on `old_main.cc`'s `print_troons` loop: same trailing-space
//! token layout, same two-key sort (line-prefix-letter ascending, then
//! decimal identifier compared as a *string*, not numerically — §9's
//! resolved Open Question, preserved verbatim even though it gives
//! surprising results for ≥ 10 vehicles on one line, e.g. `"g10" < "g2"`).

use metro_core::Tick;
use metro_network::Network;
use metro_vehicle::{Vehicle, VehicleState};

/// One tick's printable snapshot line: `"<tick>: <vehicle> <vehicle> ...
/// "` (note old_main.cc's trailing space survives after the last token —
/// §1 leaves formatting details beyond ordering/content out of scope, so
/// this repository keeps the original's literal layout).
pub fn format_tick_line(tick: Tick, vehicles: &[Vehicle], network: &Network) -> String {
    let mut sorted: Vec<&Vehicle> = vehicles.iter().collect();
    sorted.sort_by(|a, b| {
        a.line
            .prefix()
            .cmp(&b.line.prefix())
            .then_with(|| a.id.0.to_string().cmp(&b.id.0.to_string()))
    });

    let mut line = format!("{}: ", tick.0);
    for v in sorted {
        line.push_str(&format_token(v, network));
        line.push(' ');
    }
    line
}

fn format_token(v: &Vehicle, network: &Network) -> String {
    let segment = network.segment(v.segment);
    let src = &network.station(segment.source).name;
    let head = format!("{}{}-{}", v.line.prefix(), v.id.0, src);
    match v.state {
        VehicleState::InTransit => {
            format!("{head}->{}", network.station(segment.destination).name)
        }
        VehicleState::WaitingPlatform => format!("{head}#"),
        VehicleState::OnPlatform | VehicleState::WaitingTransit => format!("{head}%"),
    }
}
