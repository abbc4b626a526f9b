use miette::Result;

use catalyst_ops::ops_resolve;
use catalyst_ops::service::PackageService;

pub fn exec(service: &PackageService) -> Result<()> {
    let project = super::current_project()?;
    let resolution = ops_resolve::resolve(service, &project)?;
    print!("{}", ops_resolve::render(&resolution));
    Ok(())
}
