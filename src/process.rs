//! Batch compositing: pair every artwork with its compatible frames and
//! render one preview per pair.
//!
//! ## Pipeline
//!
//! ```text
//! scan artwork ──┐
//!                ├─→ plan: artwork shape → compatible frames → CompositeParams
//! scan frames ───┘
//!                      └─→ composite: render each pair in parallel → output/
//! ```
//!
//! [`plan`] resolves every pair without touching pixels, which is what the
//! `check` command prints. [`composite`] runs the plan through an
//! [`ImageBackend`].
//!
//! ## Output Structure
//!
//! ```text
//! work/output/
//! ├── pieceGW-24-30.png     # <artwork base name><frame file name>
//! ├── pieceFW-30-40.png
//! └── studyAC-20-20.png
//! ```
//!
//! ## Failure Isolation
//!
//! A pair that fails never stops the batch. Artwork whose name declares no
//! known shape is reported once, frame files that do not parse are reported
//! once as rejected catalog entries, and render failures are reported per
//! pair. Only problems with the directories themselves (missing frames
//! directory, unwritable output directory, invalid config) are fatal.
//!
//! ## Parallel Processing
//!
//! The previews of one artwork are rendered in parallel using
//! [rayon](https://docs.rs/rayon); artwork is taken one at a time so progress
//! output stays grouped.

use crate::config::{ConfigError, PreviewConfig};
use crate::frame::{Frame, FrameError, file_name_of};
use crate::imaging::{
    BackendError, Canvas, CompositeParams, Dimensions, ImageBackend, RustBackend,
    frame_size_mismatch, plan_composite, render_preview,
};
use crate::matching::compatible_frames;
use crate::scan::{FrameCatalog, RejectedFrame, ScanError, as_display, scan_artwork, scan_frames};
use crate::shape::{ArtworkClass, artwork_shape};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Why a single artwork or (artwork, frame) pair produced no preview.
#[derive(Error, Debug)]
pub enum PairError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Imaging(#[from] BackendError),
    #[error("Output {output} is already produced by {artwork} in {frame}")]
    OutputCollision {
        output: String,
        artwork: String,
        frame: String,
    },
}

#[derive(Debug, Serialize)]
pub struct PairFailure {
    pub artwork: PathBuf,
    /// `None` when the artwork itself could not be paired with anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<PathBuf>,
    #[serde(serialize_with = "as_display")]
    pub error: PairError,
}

/// One artwork and the previews planned for it.
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkPlan {
    pub artwork: PathBuf,
    pub class: ArtworkClass,
    pub previews: Vec<CompositeParams>,
}

/// Everything a batch would do, resolved up front.
#[derive(Debug, Serialize)]
pub struct Plan {
    pub output_dir: PathBuf,
    pub artwork: Vec<ArtworkPlan>,
    pub catalog: FrameCatalog,
    pub failures: Vec<PairFailure>,
}

impl Plan {
    pub fn preview_count(&self) -> usize {
        self.artwork.iter().map(|a| a.previews.len()).sum()
    }
}

/// Outcome of a compositing run.
#[derive(Debug, Serialize)]
pub struct CompositeResult {
    pub written: Vec<PathBuf>,
    pub failures: Vec<PairFailure>,
    pub rejected: Vec<RejectedFrame>,
}

impl CompositeResult {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Progress events sent while compositing.
#[derive(Debug, Clone)]
pub enum ProcessEvent {
    ArtworkStarted {
        artwork: String,
        class: ArtworkClass,
        frame_count: usize,
    },
    ArtworkSkipped {
        artwork: String,
        reason: String,
    },
    PairSkipped {
        artwork: String,
        frame: String,
        reason: String,
    },
    PreviewWritten {
        output: String,
        frame: String,
        completed: usize,
        total: usize,
    },
    PairFailed {
        artwork: String,
        frame: String,
        reason: String,
        completed: usize,
        total: usize,
    },
}

/// Resolve every (artwork, frame) pair in `working_dir` into composite
/// parameters. Nothing is written.
///
/// Each output path is claimed by the first pair that plans it; later pairs
/// resolving to the same file (artwork sharing a base name, or frames with
/// the same file name in different folders) become
/// [`PairError::OutputCollision`] failures.
pub fn plan(working_dir: &Path, config: &PreviewConfig) -> Result<Plan, ProcessError> {
    config.validate()?;

    let catalog = scan_frames(&config.frames_dir(working_dir))?;
    let output_dir = config.output_dir(working_dir);
    let canvas = config.canvas();

    let mut artwork_plans = Vec::new();
    let mut failures = Vec::new();
    let mut claimed: HashMap<PathBuf, (PathBuf, PathBuf)> = HashMap::new();
    for artwork in scan_artwork(working_dir)? {
        match artwork_shape(&file_name_of(&artwork)) {
            Ok(class) => {
                let mut previews = Vec::new();
                for frame in compatible_frames(class, &catalog.frames) {
                    let params = plan_composite(&artwork, frame, &output_dir, canvas);
                    match claimed.get(&params.output) {
                        Some((first_artwork, first_frame)) => failures.push(PairFailure {
                            artwork: artwork.clone(),
                            frame: Some(frame.path.clone()),
                            error: PairError::OutputCollision {
                                output: file_name_of(&params.output),
                                artwork: file_name_of(first_artwork),
                                frame: first_frame.display().to_string(),
                            },
                        }),
                        None => {
                            claimed.insert(
                                params.output.clone(),
                                (artwork.clone(), frame.path.clone()),
                            );
                            previews.push(params);
                        }
                    }
                }
                artwork_plans.push(ArtworkPlan {
                    artwork,
                    class,
                    previews,
                });
            }
            Err(e) => failures.push(PairFailure {
                artwork,
                frame: None,
                error: e.into(),
            }),
        }
    }

    Ok(Plan {
        output_dir,
        artwork: artwork_plans,
        catalog,
        failures,
    })
}

pub fn composite(
    working_dir: &Path,
    config: &PreviewConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<CompositeResult, ProcessError> {
    let backend = RustBackend::new();
    composite_with_backend(&backend, working_dir, config, events)
}

/// Composite a batch using a specific backend (allows testing with mock).
pub fn composite_with_backend(
    backend: &impl ImageBackend,
    working_dir: &Path,
    config: &PreviewConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<CompositeResult, ProcessError> {
    let plan = plan(working_dir, config)?;
    run_plan(backend, plan, events)
}

/// Render a plan. The output directory is created only when there is at
/// least one preview to write.
pub fn run_plan(
    backend: &impl ImageBackend,
    plan: Plan,
    events: Option<Sender<ProcessEvent>>,
) -> Result<CompositeResult, ProcessError> {
    let total = plan.preview_count();
    let Plan {
        output_dir,
        artwork,
        catalog,
        mut failures,
    } = plan;

    if total > 0 {
        std::fs::create_dir_all(&output_dir)?;
    }

    for failure in &failures {
        let artwork = file_name_of(&failure.artwork);
        let reason = failure.error.to_string();
        let event = match &failure.frame {
            Some(frame) => ProcessEvent::PairSkipped {
                artwork,
                frame: file_name_of(frame),
                reason,
            },
            None => ProcessEvent::ArtworkSkipped { artwork, reason },
        };
        emit(&events, event);
    }

    let completed = AtomicUsize::new(0);
    let mut written = Vec::new();

    for entry in &artwork {
        emit(
            &events,
            ProcessEvent::ArtworkStarted {
                artwork: file_name_of(&entry.artwork),
                class: entry.class,
                frame_count: entry.previews.len(),
            },
        );

        let results: Vec<(&CompositeParams, Result<(), BackendError>)> = entry
            .previews
            .par_iter()
            .map(|params| {
                let result = render_preview(backend, params);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                let event = match &result {
                    Ok(()) => ProcessEvent::PreviewWritten {
                        output: file_name_of(&params.output),
                        frame: file_name_of(&params.frame),
                        completed: done,
                        total,
                    },
                    Err(e) => ProcessEvent::PairFailed {
                        artwork: file_name_of(&params.artwork),
                        frame: file_name_of(&params.frame),
                        reason: e.to_string(),
                        completed: done,
                        total,
                    },
                };
                emit(&events, event);
                (params, result)
            })
            .collect();

        for (params, result) in results {
            match result {
                Ok(()) => written.push(params.output.clone()),
                Err(e) => failures.push(PairFailure {
                    artwork: params.artwork.clone(),
                    frame: Some(params.frame.clone()),
                    error: e.into(),
                }),
            }
        }
    }

    Ok(CompositeResult {
        written,
        failures,
        rejected: catalog.rejected,
    })
}

fn emit(events: &Option<Sender<ProcessEvent>>, event: ProcessEvent) {
    if let Some(tx) = events {
        // A closed receiver only means nobody is listening
        tx.send(event).ok();
    }
}

/// A frame image that does not cover the canvas exactly.
#[derive(Debug, PartialEq, Serialize)]
pub struct FrameSizeIssue {
    pub frame: PathBuf,
    pub problem: FrameSizeProblem,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSizeProblem {
    /// Actual pixel size of the frame image.
    Mismatch { width: u32, height: u32 },
    Unreadable(String),
}

/// Read every frame's pixel size and report those that differ from the canvas.
///
/// The frame is drawn at the origin without scaling, so a mismatched frame
/// leaves part of the canvas uncovered or is clipped.
pub fn check_frame_sizes(
    backend: &impl ImageBackend,
    frames: &[Frame],
    canvas: Canvas,
) -> Vec<FrameSizeIssue> {
    frames
        .par_iter()
        .filter_map(|frame| {
            let problem = match frame_size_mismatch(backend, frame, canvas) {
                Ok(None) => return None,
                Ok(Some(Dimensions { width, height })) => {
                    FrameSizeProblem::Mismatch { width, height }
                }
                Err(e) => FrameSizeProblem::Unreadable(e.to_string()),
            };
            Some(FrameSizeIssue {
                frame: frame.path.clone(),
                problem,
            })
        })
        .collect()
}
