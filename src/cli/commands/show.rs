//! Show command - one-shot analysis of a single file

use std::path::PathBuf;
use std::process::ExitCode;

use topcontrib::adapters::RecordingSurface;
use topcontrib::core::services::Analyzer;
use topcontrib::output::ShowResult;

use super::Context;

/// Analyze `file` and print its top contributor
///
/// Exits successfully only when the indicator ends up displayed.
pub async fn show(file: Option<PathBuf>, all: bool, ctx: &Context) -> anyhow::Result<ExitCode> {
    let analyzer = Analyzer::new(ctx.git(), RecordingSurface::new(), ctx.locale, ctx.path_style);

    let result = match file {
        Some(file) => {
            let run = analyzer.run(&file).await;
            let surface = analyzer.surface();
            ShowResult::new(
                ctx.path_style.normalize(&file).display().to_string(),
                &run,
                &surface.indicator(),
                surface.notifications(),
            )
        },
        None => {
            analyzer.no_file_open();
            ShowResult::no_file(analyzer.surface().notifications())
        },
    };

    result.render(ctx.mode, all);
    Ok(if result.displayed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
