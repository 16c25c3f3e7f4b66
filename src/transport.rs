//! Line-delimited JSON transport: the default [`EngineLink`] implementation.
//!
//! One JSON document per line in each direction. The engine writes snapshots;
//! the client writes its loadout once, then decisions. End of stream while
//! waiting for a snapshot is how a match ends.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::catalog::CropType;
use crate::error::{TransportError, TransportResult};
use crate::model::{ActionDecision, GameStateSnapshot, MoveDecision, Position};
use crate::protocol::{EngineLink, Loadout};

/// One decision as written to the engine.
#[derive(Debug, Serialize)]
#[serde(tag = "decisionType", rename_all = "SCREAMING_SNAKE_CASE")]
enum WireDecision<'a> {
    Move {
        destination: Position,
    },
    Harvest {
        coordinates: &'a [Position],
    },
    Plant {
        crops: &'a [CropType],
        coordinates: &'a [Position],
    },
    Buy {
        crops: &'a [CropType],
        quantities: &'a [u32],
    },
    UseItem,
    DoNothing,
}

impl<'a> WireDecision<'a> {
    fn from_action(action: &'a ActionDecision) -> Self {
        match action {
            ActionDecision::Harvest(positions) => WireDecision::Harvest {
                coordinates: positions,
            },
            ActionDecision::Plant { crops, positions } => WireDecision::Plant {
                crops,
                coordinates: positions,
            },
            ActionDecision::Buy { crops, quantities } => WireDecision::Buy { crops, quantities },
            ActionDecision::UseItem => WireDecision::UseItem,
            ActionDecision::DoNothing => WireDecision::DoNothing,
        }
    }
}

/// JSON-lines engine link over a buffered reader and a writer.
#[derive(Debug)]
pub struct JsonLink<R, W> {
    reader: R,
    writer: W,
}

impl JsonLink<io::BufReader<io::Stdin>, io::Stdout> {
    /// Link over stdin/stdout, the engine's default arrangement for a child
    /// client process.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> JsonLink<R, W> {
    /// Create a link over an arbitrary stream pair.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_message<T: DeserializeOwned>(&mut self) -> TransportResult<T> {
        let mut line = String::new();
        loop {
            line.clear();
            let bytes = self.reader.read_line(&mut line)?;
            if bytes == 0 {
                return Err(TransportError::Closed);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            trace!(len = trimmed.len(), "engine message");
            return Ok(serde_json::from_str(trimmed)?);
        }
    }

    fn write_message<T: Serialize>(&mut self, message: &T) -> TransportResult<()> {
        let json = serde_json::to_string(message)?;
        trace!(len = json.len(), "client message");
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> EngineLink for JsonLink<R, W> {
    fn register(&mut self, loadout: Loadout) -> TransportResult<()> {
        self.write_message(&loadout)
    }

    fn fetch(&mut self) -> TransportResult<GameStateSnapshot> {
        self.read_message()
    }

    fn send_move(&mut self, decision: &MoveDecision) -> TransportResult<()> {
        self.write_message(&WireDecision::Move {
            destination: decision.destination,
        })
    }

    fn send_action(&mut self, decision: &ActionDecision) -> TransportResult<()> {
        self.write_message(&WireDecision::from_action(decision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemType, UpgradeType};

    fn link_over(input: &[u8]) -> JsonLink<&[u8], Vec<u8>> {
        JsonLink::new(input, Vec::new())
    }

    fn written(link: &JsonLink<&[u8], Vec<u8>>) -> String {
        String::from_utf8(link.writer.clone()).unwrap()
    }

    #[test]
    fn test_register_writes_loadout_line() {
        let mut link = link_over(b"");
        link.register(Loadout {
            item: ItemType::DeliveryDrone,
            upgrade: UpgradeType::SeedAPult,
        })
        .unwrap();

        let out = written(&link);
        assert_eq!(
            out,
            "{\"item\":\"DELIVERY_DRONE\",\"upgrade\":\"SEED_A_PULT\"}\n"
        );
    }

    #[test]
    fn test_move_decision_wire_shape() {
        let mut link = link_over(b"");
        link.send_move(&MoveDecision {
            destination: Position::new(13, 0),
        })
        .unwrap();

        assert_eq!(
            written(&link),
            "{\"decisionType\":\"MOVE\",\"destination\":{\"x\":13,\"y\":0}}\n"
        );
    }

    #[test]
    fn test_action_decision_wire_shapes() {
        let mut link = link_over(b"");
        link.send_action(&ActionDecision::DoNothing).unwrap();
        link.send_action(&ActionDecision::buy_one(CropType::Potato, 3))
            .unwrap();

        let out = written(&link);
        let mut lines = out.lines();
        assert_eq!(lines.next().unwrap(), "{\"decisionType\":\"DO_NOTHING\"}");
        assert_eq!(
            lines.next().unwrap(),
            "{\"decisionType\":\"BUY\",\"crops\":[\"POTATO\"],\"quantities\":[3]}"
        );
    }

    #[test]
    fn test_fetch_eof_is_closed() {
        let mut link = link_over(b"");
        assert!(matches!(link.fetch(), Err(TransportError::Closed)));
    }

    #[test]
    fn test_fetch_skips_blank_lines() {
        let mut link = link_over(b"\n\n");
        // Blank lines are skipped, then the stream ends.
        assert!(matches!(link.fetch(), Err(TransportError::Closed)));
    }

    #[test]
    fn test_fetch_garbage_is_decode_error() {
        let mut link = link_over(b"not json\n");
        assert!(matches!(link.fetch(), Err(TransportError::Decode(_))));
    }
}
