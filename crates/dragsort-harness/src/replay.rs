//! Scenario replay.
//!
//! Feeds a [`Scenario`] through a [`DragList<Task>`] hosted by a
//! [`TaskBoard`] and records one [`TraceRecord`] per step. Replays are
//! deterministic: time only advances through `tick` and `settle` steps.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use dragsort_core::event::{Event, PointerEvent};
use dragsort_list::{CommitOutcome, DragList, DragPhase, ItemsUpdate};
use serde::Serialize;

use crate::error::Result;
use crate::scenario::{MAX_SETTLE_FRAMES, Scenario, Step};
use crate::task::{Task, TaskBoard};
use crate::util::{now_utc_iso, write_string};

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Scenario file (JSON).
    pub path: PathBuf,

    /// Write the JSONL trace here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Emit log events as JSON on stderr.
    #[arg(long)]
    pub json_logs: bool,

    /// Only print the summary line.
    #[arg(long)]
    pub summary_only: bool,
}

/// State after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRecord {
    pub step: usize,
    pub op: &'static str,
    pub phase: DragPhase,
    pub scroll: f32,
    pub order: Vec<u64>,
    pub offsets: Vec<f32>,
    pub displayed: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CommitOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_update: Option<&'static str>,
}

/// Totals for a whole replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub scenario: String,
    pub steps: usize,
    pub commits: usize,
    pub reorders: usize,
    pub rejected_reorders: usize,
    pub haptics: usize,
    pub scrolls: usize,
    pub final_phase: DragPhase,
    pub final_order: Vec<u64>,
    pub final_titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub records: Vec<TraceRecord>,
    pub summary: ReplaySummary,
}

/// Runs steps against a list and its board.
#[derive(Debug)]
pub struct Replayer {
    list: DragList<Task>,
    board: TaskBoard,
    frame: Duration,
    commits: usize,
}

impl Replayer {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        let board = TaskBoard::seeded(scenario.tasks.iter().cloned())?;
        let list = DragList::new(board.tasks().to_vec(), scenario.config.clone());
        Ok(Self {
            list,
            board,
            frame: Duration::from_millis(scenario.frame_ms),
            commits: 0,
        })
    }

    #[must_use]
    pub fn list(&self) -> &DragList<Task> {
        &self.list
    }

    #[must_use]
    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Apply one step and describe the resulting state.
    pub fn apply(&mut self, index: usize, step: &Step) -> Result<TraceRecord> {
        let mut outcome = None;
        let mut items_update = None;

        match step {
            Step::Down { x, y } => outcome = self.pointer(PointerEvent::down(*x, *y)),
            Step::Move { x, y } => outcome = self.pointer(PointerEvent::moved(*x, *y)),
            Step::Up { x, y } => outcome = self.pointer(PointerEvent::up(*x, *y)),
            Step::Cancel => {
                let y = self.list.session().map_or(0.0, |s| s.raw_pointer_offset);
                outcome = self.pointer(PointerEvent::cancel(0.0, y));
            }
            Step::Blur => outcome = self.event(&Event::Focus(false)),
            Step::Scroll { offset } => {
                outcome = self.event(&Event::Scroll { offset: *offset });
            }
            Step::Tick { ms } => {
                outcome = self.list.tick(Duration::from_millis(*ms), &mut self.board);
            }
            Step::Settle => outcome = self.settle(),
            Step::Add { draft } => {
                self.board.add(draft.clone())?;
                items_update = Some(self.push_items());
            }
            Step::Toggle { id } => {
                self.board.toggle(*id)?;
                items_update = Some(self.push_items());
            }
            Step::Edit { id, edit } => {
                self.board.edit(*id, edit.clone())?;
                items_update = Some(self.push_items());
            }
            Step::Delete { id } => {
                self.board.delete(*id)?;
                items_update = Some(self.push_items());
            }
            Step::RejectReorders { reject } => self.board.set_reject_reorders(*reject),
        }

        if outcome.is_some() {
            self.commits += 1;
        }
        tracing::debug!(step = index, op = step.op(), ?outcome, "replayed step");
        Ok(self.record(index, step.op(), outcome, items_update))
    }

    #[must_use]
    pub fn summary(&self, scenario: &str, steps: usize) -> ReplaySummary {
        ReplaySummary {
            scenario: scenario.to_string(),
            steps,
            commits: self.commits,
            reorders: self.board.reorders,
            rejected_reorders: self.board.rejected_reorders,
            haptics: self.board.haptics.len(),
            scrolls: self.board.scrolls.len(),
            final_phase: self.list.phase(),
            final_order: order(self.list.items()),
            final_titles: self.list.items().iter().map(|t| t.title.clone()).collect(),
        }
    }

    fn pointer(&mut self, pointer: PointerEvent) -> Option<CommitOutcome> {
        self.event(&pointer.into())
    }

    fn event(&mut self, event: &Event) -> Option<CommitOutcome> {
        self.list.handle_event(event, &mut self.board)
    }

    fn settle(&mut self) -> Option<CommitOutcome> {
        let mut outcome = None;
        for _ in 0..MAX_SETTLE_FRAMES {
            if let Some(done) = self.list.tick(self.frame, &mut self.board) {
                outcome = Some(done);
            }
            if !self.list.is_animating() && self.list.phase() != DragPhase::Settling {
                break;
            }
        }
        outcome
    }

    fn push_items(&mut self) -> &'static str {
        match self.list.set_items(self.board.tasks().to_vec()) {
            ItemsUpdate::Applied => "applied",
            ItemsUpdate::AbortedSession => "aborted_session",
            ItemsUpdate::Deferred => "deferred",
        }
    }

    fn record(
        &self,
        step: usize,
        op: &'static str,
        outcome: Option<CommitOutcome>,
        items_update: Option<&'static str>,
    ) -> TraceRecord {
        let positions = self.list.positions();
        TraceRecord {
            step,
            op,
            phase: self.list.phase(),
            scroll: self.list.scroll_offset(),
            order: order(self.list.items()),
            offsets: positions.offsets().to_vec(),
            displayed: positions.displayed_offsets(),
            active_index: self.list.active_index(),
            outcome,
            items_update,
        }
    }
}

fn order(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|t| t.id).collect()
}

/// Replay a whole scenario in memory.
pub fn replay(scenario: &Scenario) -> Result<ReplayReport> {
    let mut replayer = Replayer::new(scenario)?;
    let mut records = Vec::with_capacity(scenario.steps.len());
    for (index, step) in scenario.steps.iter().enumerate() {
        records.push(replayer.apply(index, step)?);
    }
    let summary = replayer.summary(&scenario.name, scenario.steps.len());
    Ok(ReplayReport { records, summary })
}

/// Render a report as JSONL: one line per step, then a summary line.
pub fn render_jsonl(report: &ReplayReport, summary_only: bool) -> Result<String> {
    let mut out = String::new();
    if !summary_only {
        for record in &report.records {
            out.push_str(&serde_json::to_string(&serde_json::json!({
                "type": "step",
                "record": record,
            }))?);
            out.push('\n');
        }
    }
    out.push_str(&serde_json::to_string(&serde_json::json!({
        "type": "summary",
        "generated_at": now_utc_iso(),
        "summary": report.summary,
    }))?);
    out.push('\n');
    Ok(out)
}

pub fn run_replay(args: ReplayArgs) -> Result<()> {
    dragsort_core::logging::init_subscriber(args.json_logs);

    let scenario = Scenario::from_path(&args.path)?;
    tracing::info!(
        scenario = %scenario.name,
        tasks = scenario.tasks.len(),
        steps = scenario.steps.len(),
        "replaying scenario"
    );
    let report = replay(&scenario)?;
    let rendered = render_jsonl(&report, args.summary_only)?;

    match &args.output {
        Some(path) => {
            write_string(path, &rendered)?;
            tracing::info!(path = %path.display(), "trace written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
