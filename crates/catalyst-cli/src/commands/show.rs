use miette::Result;

use catalyst_ops::ops_show;
use catalyst_ops::service::PackageService;

pub fn exec(service: &PackageService, name: &str, version: &str) -> Result<()> {
    let record = ops_show::show(service, name, version)?;
    print!("{}", ops_show::render(&record));
    Ok(())
}
