//! §6's input-file grammar, read once by the coordinator (worker 0) and
//! broadcast as a built [`metro_network::Network`] plus [`RunConfig`]
//! fields to every other worker.
//!
//! | module    | purpose                                          |
//! |-----------|-----------------------------------------------------|
//! | `parser`  | `parse_input` — the whitespace/line-mixed grammar     |
//! | `error`   | `ParseError` / `ParseResult`                          |

pub mod error;
pub mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::{parse_input, ParsedInput, PartialRunConfig};
