//! Command dispatch.

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::modulemap::generator;

/// Runs generation for the parsed arguments.
///
/// When `MODMAP_RECORD` is set to a file path, all filesystem interactions
/// are recorded to a cassette at that path.
///
/// # Errors
///
/// Returns the generation error, or a cassette error if the recording
/// cannot be saved.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ServiceContext::from_env();
    let result = generator::generate(&ctx, &cli.into_request());

    // Save the recording even when generation failed, but report the
    // generation error first.
    let finished = ctx.finish();
    let report = result?;
    finished?;

    tracing::debug!(
        module = %report.module_name,
        headers = report.discovered,
        "module map generated"
    );
    Ok(())
}
