//! One headless match from setup to result.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use skirmish_core::Team;
use skirmish_runtime::{MatchEvent, MatchStatus, TurnCoordinator};

use crate::autopilot::Autopilot;

/// Tally of a finished (or abandoned) match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub winner: Option<Team>,
    pub rounds: u32,
    pub frames: u64,
    pub shots: u32,
    pub hits: u32,
    pub damage_dealt: f32,
    pub casualties: u32,
}

impl MatchSummary {
    fn record(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::ShotResolved(report) => {
                self.shots += 1;
                if report.outcome.hit {
                    self.hits += 1;
                    self.damage_dealt += report.outcome.damage;
                }
            }
            MatchEvent::UnitDown { .. } => self.casualties += 1,
            MatchEvent::MatchOver { winner, rounds } => {
                self.winner = Some(*winner);
                self.rounds = *rounds;
            }
            MatchEvent::TurnStarted { round, .. } => self.rounds = *round,
            _ => {}
        }
    }
}

/// Drives a coordinator frame by frame, feeding the autopilot's orders in and
/// writing events out.
pub struct MatchSession {
    coordinator: TurnCoordinator,
    autopilot: Autopilot,
    event_log: Option<BufWriter<File>>,
    summary: MatchSummary,
}

impl MatchSession {
    pub fn new(coordinator: TurnCoordinator) -> Self {
        Self {
            coordinator,
            autopilot: Autopilot::default(),
            event_log: None,
            summary: MatchSummary::default(),
        }
    }

    /// Writes every event as one JSON object per line to `path`.
    pub fn with_event_log(mut self, path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create event log {}", path.display()))?;
        self.event_log = Some(BufWriter::new(file));
        Ok(self)
    }

    pub fn coordinator(&self) -> &TurnCoordinator {
        &self.coordinator
    }

    /// Plays until the match is decided or `max_frames` have run.
    pub fn run(&mut self, frame_secs: f32, max_frames: u64) -> Result<MatchSummary> {
        // Events raised while the first turn was opened.
        self.flush_events()?;

        let mut status = self.coordinator.status();
        while !status.is_over() && self.summary.frames < max_frames {
            if let Some(order) = self.autopilot.next_order(&self.coordinator) {
                self.coordinator.submit(order)?;
            }
            status = self.coordinator.update(frame_secs);
            self.summary.frames += 1;
            self.flush_events()?;
        }

        if let Some(log) = self.event_log.as_mut() {
            log.flush()?;
        }

        match status {
            MatchStatus::Over { winner } => tracing::info!(
                %winner,
                rounds = self.summary.rounds,
                frames = self.summary.frames,
                "match decided"
            ),
            MatchStatus::InProgress => tracing::warn!(
                frames = self.summary.frames,
                "frame limit reached before the match was decided"
            ),
        }
        Ok(self.summary)
    }

    fn flush_events(&mut self) -> Result<()> {
        for event in self.coordinator.drain_events() {
            tracing::debug!(?event, "match event");
            self.summary.record(&event);
            if let Some(log) = self.event_log.as_mut() {
                serde_json::to_writer(&mut *log, &event)?;
                log.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
