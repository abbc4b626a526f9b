//! Operations: look up a single published package version.

use crate::service::{PackageRecord, PackageService};

/// Whether any registered repository publishes `name` at exactly `version`.
pub fn exists(service: &PackageService, name: &str, version: &str) -> bool {
    service.package_exists(name, version)
}

pub fn show(service: &PackageService, name: &str, version: &str) -> miette::Result<PackageRecord> {
    Ok(service.get_package(name, version)?)
}

/// Human-readable description of a package record.
pub fn render(record: &PackageRecord) -> String {
    let mut out = format!("name       : {}\n", record.name);
    out.push_str(&format!("version    : {}\n", record.version));
    out.push_str(&format!("repository : {}\n", record.repository));
    if let Some(ref location) = record.location {
        out.push_str(&format!("location   : {location}\n"));
    }
    if record.requires.is_empty() {
        out.push_str("requires   : (none)\n");
    } else {
        out.push_str("requires   :\n");
        for (name, constraint) in &record.requires {
            out.push_str(&format!("  {name} {constraint}\n"));
        }
    }
    out
}
