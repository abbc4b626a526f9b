//! Operation: resolve the project and regenerate `catalyst.lock`.

use catalyst_core::lockfile::{LockedPackage, Lockfile};
use catalyst_core::project::LocalProject;
use catalyst_resolver::resolver::Resolution;
use catalyst_util::progress;

use crate::service::PackageService;

/// Resolve from scratch and write the lockfile next to the manifest.
pub fn lock(service: &PackageService, project: &LocalProject) -> miette::Result<Lockfile> {
    let resolution = crate::ops_resolve::resolve(service, project)?;
    let lockfile = resolution_to_lockfile(&resolution);

    let path = project.lockfile_path();
    if path.is_file() {
        let previous = Lockfile::from_path(&path)?;
        report_changes(&previous, &lockfile);
    }

    lockfile.write_to(&path)?;
    progress::status("Locked", &format!("{} packages", lockfile.package.len()));
    Ok(lockfile)
}

/// Lockfile entries in resolution order. Dependencies list only names that were resolved.
pub fn resolution_to_lockfile(resolution: &Resolution) -> Lockfile {
    let package = resolution
        .packages
        .values()
        .map(|pkg| LockedPackage {
            name: pkg.name.clone(),
            version: pkg.version.to_string(),
            repository: Some(pkg.repository.clone()),
            dependencies: pkg
                .requires
                .keys()
                .filter(|dep| resolution.packages.contains_key(*dep))
                .cloned()
                .collect(),
        })
        .collect();
    Lockfile { package }
}

fn report_changes(previous: &Lockfile, next: &Lockfile) {
    for pkg in &next.package {
        match previous.locked_version(pkg.name.as_str()) {
            Some(old) if old != pkg.version => progress::status_warn(
                "Updating",
                &format!("{} {old} -> {}", pkg.name, pkg.version),
            ),
            Some(_) => {}
            None => progress::status_info("Adding", &format!("{} {}", pkg.name, pkg.version)),
        }
    }
    for pkg in &previous.package {
        if next.locked_version(pkg.name.as_str()).is_none() {
            progress::status_info("Removing", &format!("{} {}", pkg.name, pkg.version));
        }
    }
}
