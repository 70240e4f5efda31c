//! CLI output formatting for every command.
//!
//! # Artwork-First Display
//!
//! Output is organised around the artwork being previewed, not the files on
//! disk. Each artwork leads with its file name, shape and frame count; the
//! frames and previews belonging to it are indented below, with paths and
//! reasons as secondary context lines.
//!
//! Every `format_*` function is pure and returns lines; the matching
//! `print_*` wrapper writes them to stdout. Tests assert on the lines.
//!
//! # Output Format
//!
//! ## Frames
//!
//! ```text
//! Frames (2)
//! GW 24x30 vertical → fit 28.00 x 37.33
//!     Source: wraps/GW-24-30.png
//! AC 20x20 square → fit 20.25 x 20.25
//!     Source: acrylic/AC-20-20.png
//!     Color: 04
//!
//! Rejected frames (1)
//! ZZ-24-30.png
//!     Unknown frame type: ZZ
//! ```
//!
//! ## Check
//!
//! ```text
//! piece-vertical.png (vertical, 1 frame)
//!     GW-24-30.png → pieceGW-24-30.png
//!         Artwork: 2800x3733 at (2600, 2133)
//!
//! 1 preview → output
//! ```
//!
//! ## Generate
//!
//! ```text
//! piece-vertical.png (vertical, 2 frames)
//!     [1/2] FW-30-40.png → pieceFW-30-40.png
//!     [2/2] GW-24-30.png failed: IO error: permission denied
//!
//! Wrote 1 preview
//! Failed (1)
//!     piece-vertical.png + GW-24-30.png: IO error: permission denied
//! ```

use crate::frame::file_name_of;
use crate::imaging::Canvas;
use crate::process::{
    CompositeResult, FrameSizeIssue, FrameSizeProblem, PairFailure, Plan, ProcessEvent,
};
use crate::scan::{FrameCatalog, RejectedFrame};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Path relative to `root` when it lives under it, otherwise as given.
fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn artwork_header(artwork: &str, shape: impl std::fmt::Display, frame_count: usize) -> String {
    if frame_count == 0 {
        format!("{} ({}, no compatible frames)", artwork, shape)
    } else {
        format!("{} ({}, {})", artwork, shape, plural(frame_count, "frame"))
    }
}

fn rejected_lines(rejected: &[RejectedFrame]) -> Vec<String> {
    let mut lines = Vec::new();
    if rejected.is_empty() {
        return lines;
    }
    lines.push(format!("Rejected frames ({})", rejected.len()));
    for r in rejected {
        lines.push(file_name_of(&r.path));
        lines.push(format!("    {}", r.error));
    }
    lines
}

fn failure_line(failure: &PairFailure) -> String {
    match &failure.frame {
        Some(frame) => format!(
            "    {} + {}: {}",
            file_name_of(&failure.artwork),
            file_name_of(frame),
            failure.error
        ),
        None => format!("    {}: {}", file_name_of(&failure.artwork), failure.error),
    }
}

// ============================================================================
// Frames
// ============================================================================

/// Format the frame catalog, with sources shown relative to `frames_dir`.
pub fn format_frames_output(catalog: &FrameCatalog, frames_dir: &Path) -> Vec<String> {
    let mut lines = vec![format!("Frames ({})", catalog.frames.len())];

    for frame in &catalog.frames {
        lines.push(format!(
            "{} {}x{} {} \u{2192} fit {:.2} x {:.2}",
            frame.frame_type,
            frame.width,
            frame.height,
            frame.shape,
            frame.image_width,
            frame.image_height
        ));
        lines.push(format!(
            "    Source: {}",
            relative_to(&frame.path, frames_dir)
        ));
        if let Some(color) = &frame.color {
            lines.push(format!("    Color: {}", color));
        }
    }

    if !catalog.rejected.is_empty() {
        lines.push(String::new());
        lines.extend(rejected_lines(&catalog.rejected));
    }
    lines
}

pub fn print_frames_output(catalog: &FrameCatalog, frames_dir: &Path) {
    for line in format_frames_output(catalog, frames_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format a plan: every artwork, the previews it would produce, and what
/// would be skipped.
pub fn format_plan_output(plan: &Plan, working_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for entry in &plan.artwork {
        lines.push(artwork_header(
            &file_name_of(&entry.artwork),
            entry.class,
            entry.previews.len(),
        ));
        for params in &entry.previews {
            lines.push(format!(
                "    {} \u{2192} {}",
                file_name_of(&params.frame),
                file_name_of(&params.output)
            ));
            lines.push(format!(
                "        Artwork: {}x{} at ({}, {})",
                params.image_width, params.image_height, params.offset_x, params.offset_y
            ));
        }
    }

    if !plan.failures.is_empty() {
        lines.push(String::new());
        lines.push(format!("Skipped ({})", plan.failures.len()));
        lines.extend(plan.failures.iter().map(failure_line));
    }

    if !plan.catalog.rejected.is_empty() {
        lines.push(String::new());
        lines.extend(rejected_lines(&plan.catalog.rejected));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} \u{2192} {}",
        plural(plan.preview_count(), "preview"),
        relative_to(&plan.output_dir, working_dir)
    ));
    lines
}

pub fn print_plan_output(plan: &Plan, working_dir: &Path) {
    for line in format_plan_output(plan, working_dir) {
        println!("{}", line);
    }
}

/// Format frame images whose pixel size differs from the canvas.
pub fn format_frame_size_issues(issues: &[FrameSizeIssue], canvas: Canvas) -> Vec<String> {
    if issues.is_empty() {
        return vec![format!(
            "All frames match the {}x{} canvas",
            canvas.width, canvas.height
        )];
    }

    let mut lines = vec![format!(
        "Frame size warnings ({}, canvas is {}x{})",
        issues.len(),
        canvas.width,
        canvas.height
    )];
    for issue in issues {
        let detail = match &issue.problem {
            FrameSizeProblem::Mismatch { width, height } => format!("{}x{}", width, height),
            FrameSizeProblem::Unreadable(reason) => format!("unreadable: {}", reason),
        };
        lines.push(format!("    {}: {}", file_name_of(&issue.frame), detail));
    }
    lines
}

pub fn print_frame_size_issues(issues: &[FrameSizeIssue], canvas: Canvas) {
    for line in format_frame_size_issues(issues, canvas) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format a single compositing progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::ArtworkStarted {
            artwork,
            class,
            frame_count,
        } => vec![artwork_header(artwork, class, *frame_count)],
        ProcessEvent::ArtworkSkipped { artwork, reason } => {
            vec![format!("{} skipped", artwork), format!("    {}", reason)]
        }
        ProcessEvent::PairSkipped {
            artwork,
            frame,
            reason,
        } => vec![
            format!("{} + {} skipped", artwork, frame),
            format!("    {}", reason),
        ],
        ProcessEvent::PreviewWritten {
            output,
            frame,
            completed,
            total,
        } => vec![format!(
            "    [{}/{}] {} \u{2192} {}",
            completed, total, frame, output
        )],
        ProcessEvent::PairFailed {
            frame,
            reason,
            completed,
            total,
            ..
        } => vec![format!(
            "    [{}/{}] {} failed: {}",
            completed, total, frame, reason
        )],
    }
}

/// Format the end-of-run summary.
pub fn format_summary(result: &CompositeResult) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("Wrote {}", plural(result.written.len(), "preview")),
    ];

    if !result.failures.is_empty() {
        lines.push(format!("Failed ({})", result.failures.len()));
        lines.extend(result.failures.iter().map(failure_line));
    }
    lines.extend(rejected_lines(&result.rejected));
    lines
}

pub fn print_summary(result: &CompositeResult) {
    for line in format_summary(result) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
