//! Command dispatch and handler modules.

mod exists;
mod lock;
mod resolve;
mod show;
mod tree;

use std::path::PathBuf;
use std::process::ExitCode;

use catalyst_core::config::{self, GlobalConfig};
use catalyst_core::project::LocalProject;
use catalyst_ops::service::PackageService;
use catalyst_util::errors::CatalystError;
use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    let service = build_service(&cli.repositories)?;
    let done = match cli.command {
        Command::Resolve => resolve::exec(&service),
        Command::Lock => lock::exec(&service),
        Command::Tree {
            depth,
            why,
            inverted,
        } => tree::exec(&service, depth, why, inverted),
        Command::Exists { name, version } => return exists::exec(&service, &name, &version),
        Command::Show { name, version } => show::exec(&service, &name, &version),
    };
    done.map(|()| ExitCode::SUCCESS)
}

/// Global config repositories first, then `-r` directories in command-line order.
fn build_service(extra: &[PathBuf]) -> Result<PackageService> {
    let config = GlobalConfig::load()?;
    let mut service = PackageService::from_config(&config, &config::dirs_path())?;
    for dir in extra {
        service.add_directory(dir.clone())?;
    }
    Ok(service)
}

/// The project at or above the current directory.
fn current_project() -> Result<LocalProject> {
    let cwd = std::env::current_dir().map_err(CatalystError::Io)?;
    LocalProject::discover(&cwd)
}
