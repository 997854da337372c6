//! Config command - print the effective configuration

use std::path::Path;
use std::process::ExitCode;

use topcontrib::config::Config;
use topcontrib::output::ConfigResult;
use topcontrib::paths::PathStyle;

use super::Context;

/// Show where configuration comes from and what it resolves to
pub fn config(ctx: &Context, explicit: Option<&Path>) -> anyhow::Result<ExitCode> {
    let path = explicit.map_or_else(Config::config_path, Path::to_path_buf);
    let result = ConfigResult {
        exists: path.exists(),
        path: path.display().to_string(),
        locale: ctx.locale.code().to_string(),
        git: ctx.config.git.clone(),
        path_style: match ctx.path_style {
            PathStyle::Native => "native",
            PathStyle::Wsl => "wsl",
        }
        .to_string(),
    };
    result.render(ctx.mode);
    Ok(ExitCode::SUCCESS)
}
