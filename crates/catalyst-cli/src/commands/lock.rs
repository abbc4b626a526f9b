use miette::Result;

use catalyst_ops::ops_lock;
use catalyst_ops::service::PackageService;

pub fn exec(service: &PackageService) -> Result<()> {
    let project = super::current_project()?;
    ops_lock::lock(service, &project)?;
    Ok(())
}
