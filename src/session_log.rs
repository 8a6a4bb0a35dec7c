//! JSON-lines session log.
//!
//! One object per engine event, e.g.
//! `{"t_ms":1200,"event":"linesCleared","count":1,"score":3}`.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::GameEvent;

#[derive(Serialize)]
struct Record<'a> {
    t_ms: u64,
    #[serde(flatten)]
    event: &'a GameEvent,
}

pub struct SessionLog<W: Write> {
    out: W,
    started: Instant,
}

impl SessionLog<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening session log {path}"))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SessionLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            started: Instant::now(),
        }
    }

    pub fn record(&mut self, event: &GameEvent) -> Result<()> {
        let record = Record {
            t_ms: self.started.elapsed().as_millis() as u64,
            event,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn record_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) -> Result<()> {
        for event in events {
            self.record(event)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn writes_one_line_per_event() {
        let mut log = SessionLog::new(Vec::new());
        log.record_all(&[
            GameEvent::Spawned { kind: PieceKind::T },
            GameEvent::LinesCleared { count: 2, score: 5 },
        ])
        .unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "spawned");
        assert_eq!(lines[0]["kind"], "t");
        assert!(lines[0]["t_ms"].is_u64());
        assert_eq!(lines[1]["event"], "linesCleared");
        assert_eq!(lines[1]["count"], 2);
        assert_eq!(lines[1]["score"], 5);
    }
}
