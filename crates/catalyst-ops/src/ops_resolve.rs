//! Operation: resolve the project's dependencies.

use catalyst_core::project::LocalProject;
use catalyst_resolver::resolver::Resolution;
use catalyst_util::progress;

use crate::service::PackageService;

/// Resolve `project` and report the outcome on stderr.
pub fn resolve(service: &PackageService, project: &LocalProject) -> miette::Result<Resolution> {
    progress::status("Resolving", project.name().as_str());

    let resolution = service.solve_dependencies(project)?;
    for revision in &resolution.revisions {
        tracing::info!("revised {revision}");
    }

    progress::status(
        "Resolved",
        &format!(
            "{} packages in {} passes",
            resolution.len(),
            resolution.passes
        ),
    );
    Ok(resolution)
}

/// One `name version` line per resolved package, in resolution order.
pub fn render(resolution: &Resolution) -> String {
    resolution
        .packages
        .values()
        .map(|pkg| format!("{} {}\n", pkg.name, pkg.version))
        .collect()
}
