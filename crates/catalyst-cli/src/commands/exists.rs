use std::process::ExitCode;

use miette::Result;

use catalyst_ops::ops_show;
use catalyst_ops::service::PackageService;

/// Prints `yes` or `no`; a missing package exits with status 1.
pub fn exec(service: &PackageService, name: &str, version: &str) -> Result<ExitCode> {
    if ops_show::exists(service, name, version) {
        println!("yes");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("no");
        Ok(ExitCode::FAILURE)
    }
}
