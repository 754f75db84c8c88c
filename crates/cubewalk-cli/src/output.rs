//! Writing a finished walk to a sink.

use std::io::Write;

use cubewalk_config::OutputFormat;
use cubewalk_surface::Walk;

/// Failure to serialize or write a walk.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode RON: {0}")]
    Ron(#[from] ron::Error),
}

/// Write `walk` in the requested format.
///
/// `Text` writes only the path, one `x y z` line per point. `Json` and `Ron`
/// write the whole walk, including stalls and face transitions.
pub fn write_walk(
    walk: &Walk,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => {
            for p in &walk.path {
                writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, walk)?;
            writeln!(out)?;
        }
        OutputFormat::Ron => {
            let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
            let encoded = ron::ser::to_string_pretty(walk, pretty)?;
            writeln!(out, "{encoded}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// One-line description of a walk for stderr.
pub fn summary(walk: &Walk, seed: u64) -> String {
    format!(
        "seed={seed} steps={} start={} on {} end={} on {} transitions={} stalls={}",
        walk.steps(),
        walk.start.point,
        walk.start.face,
        walk.end.point,
        walk.end.face,
        walk.transitions.len(),
        walk.stalls.len(),
    )
}
