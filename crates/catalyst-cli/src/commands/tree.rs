//! Handler for `catalyst tree`.

use miette::Result;

use catalyst_ops::ops_tree::{self, TreeOptions};
use catalyst_ops::service::PackageService;

pub fn exec(
    service: &PackageService,
    depth: Option<usize>,
    why: Option<String>,
    inverted: Option<String>,
) -> Result<()> {
    let project = super::current_project()?;
    let opts = TreeOptions {
        depth,
        why,
        inverted,
    };
    print!("{}", ops_tree::tree(service, &project, &opts)?);
    Ok(())
}
