//! The §6 input grammar, read the way `old_main.cc` reads it: a run of
//! whitespace-delimited tokens (`S`, names, popularities, the adjacency
//! matrix), then three newline-delimited lines (one per line's station
//! sequence), then another run of whitespace-delimited tokens (`N`, `g y
//! b`, `L`). `ifstream`'s `>>` and `getline` interleave the same way here:
//! [`Cursor::token`] skips leading whitespace including newlines;
//! [`Cursor::line`] does not, so the caller must consume exactly the
//! newline `>>` left behind before switching to line mode.

use metro_core::{Line, RunConfig, StationId};
use metro_network::{Network, NetworkBuilder};

use crate::error::{ParseError, ParseResult};

const MAX_STATION_NAME_BYTES: usize = 127;

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Next whitespace-delimited token, skipping any leading whitespace
    /// (spaces, tabs, newlines) — the `>>` read.
    fn token(&mut self, what: &'static str) -> ParseResult<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            return Err(ParseError::UnexpectedEof { what });
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (tok, rest) = trimmed.split_at(end);
        self.rest = rest;
        Ok(tok)
    }

    fn uint(&mut self, what: &'static str) -> ParseResult<u32> {
        let tok = self.token(what)?;
        tok.parse().map_err(|_| ParseError::UnexpectedToken { what, found: tok.to_string() })
    }

    /// Consume a single newline (the `ifs.ignore()` call between the last
    /// `>>` and the first `getline`). No-op if the very next byte isn't a
    /// newline — some inputs pad with extra whitespace.
    fn skip_one_newline(&mut self) {
        if let Some(stripped) = self.rest.strip_prefix('\n') {
            self.rest = stripped;
        } else if let Some(stripped) = self.rest.strip_prefix("\r\n") {
            self.rest = stripped;
        }
    }

    /// Next full line, not skipping leading whitespace — the `getline`
    /// read. Returns an empty string for a blank line.
    fn line(&mut self) -> &'a str {
        match self.rest.find('\n') {
            Some(pos) => {
                let (line, rest) = self.rest.split_at(pos);
                self.rest = &rest[1..];
                line.trim_end_matches('\r')
            }
            None => {
                let line = self.rest;
                self.rest = "";
                line
            }
        }
    }
}

/// Everything parsed from the input file, ready to feed the coordinator:
/// the shared, read-only network plus the per-run configuration every
/// worker needs (§4.7, §6).
pub struct ParsedInput {
    pub network: Network,
    pub config_without_workers: PartialRunConfig,
}

/// The subset of [`RunConfig`] the input file determines; `worker_count` is
/// a coordinator launch-time decision, not an input-file field (§4.7).
pub struct PartialRunConfig {
    pub total_ticks: u64,
    pub print_lines: u64,
    pub line_totals: [u32; 3],
}

impl PartialRunConfig {
    pub fn into_run_config(self, worker_count: usize) -> RunConfig {
        RunConfig {
            total_ticks: self.total_ticks,
            print_lines: self.print_lines,
            line_totals: self.line_totals,
            worker_count,
        }
    }
}

/// Parse a complete input file per §6's grammar.
pub fn parse_input(text: &str) -> ParseResult<ParsedInput> {
    let mut cur = Cursor::new(text);

    let s = cur.uint("station count S")? as usize;

    let mut builder = NetworkBuilder::new();
    let mut names = Vec::with_capacity(s);
    for _ in 0..s {
        let name = cur.token("station name")?;
        if name.len() > MAX_STATION_NAME_BYTES {
            return Err(ParseError::StationNameTooLong { name: name.to_string(), len: name.len() });
        }
        names.push(name.to_string());
    }

    let mut popularities = Vec::with_capacity(s);
    for _ in 0..s {
        popularities.push(cur.uint("station popularity")?);
    }

    let mut matrix = vec![vec![0u32; s]; s];
    for row in matrix.iter_mut() {
        for cell in row.iter_mut() {
            *cell = cur.uint("adjacency matrix entry")?;
        }
    }

    cur.skip_one_newline();
    let green_line = cur.line();
    let yellow_line = cur.line();
    let blue_line = cur.line();

    let n = cur.uint("tick count N")? as u64;
    let g = cur.uint("green vehicle count g")?;
    let y = cur.uint("yellow vehicle count y")?;
    let b = cur.uint("blue vehicle count b")?;
    let l = cur.uint("print window length L")? as u64;

    // Register stations in declaration order (§4.1, §6).
    let mut name_to_id = std::collections::HashMap::with_capacity(s);
    for (i, name) in names.iter().enumerate() {
        let id = builder.add_station(name.clone(), popularities[i]);
        name_to_id.insert(name.as_str(), id);
    }

    builder.set_adjacency(&matrix)?;

    for (line, text) in [(Line::Green, green_line), (Line::Yellow, yellow_line), (Line::Blue, blue_line)] {
        let sequence = resolve_line_sequence(text, &name_to_id, s)?;
        // A blank line row (fewer than two stations) means that line is
        // unused this run (§6) — leave its forward/backward start as
        // `None` rather than rejecting the whole parse; `apply_spawns`
        // already treats an unconfigured line as spawning nothing.
        if sequence.len() < 2 {
            continue;
        }
        builder.set_line(line, &sequence)?;
    }

    let network = builder.build();

    Ok(ParsedInput {
        network,
        config_without_workers: PartialRunConfig { total_ticks: n, print_lines: l, line_totals: [g, y, b] },
    })
}

fn resolve_line_sequence(
    text: &str,
    name_to_id: &std::collections::HashMap<&str, StationId>,
    station_count: usize,
) -> ParseResult<Vec<StationId>> {
    text.split_whitespace()
        .map(|name| {
            name_to_id.get(name).copied().ok_or_else(|| ParseError::UnknownLineStation {
                name: name.to_string(),
                s: station_count,
            })
        })
        .collect()
}
