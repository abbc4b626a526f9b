//! Operation: display the resolution tree.

use catalyst_core::project::LocalProject;
use catalyst_resolver::graph::{GraphNode, ResolutionGraph};

use crate::service::PackageService;

/// Options for `catalyst tree`.
#[derive(Debug, Default)]
pub struct TreeOptions {
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show the path from the project to this package instead of the tree.
    pub why: Option<String>,
    /// Show what requires this package.
    pub inverted: Option<String>,
}

/// Resolve `project` and render the requested view of its graph.
pub fn tree(
    service: &PackageService,
    project: &LocalProject,
    opts: &TreeOptions,
) -> miette::Result<String> {
    let resolution = service.solve_dependencies(project)?;
    let root = GraphNode {
        name: project.name().to_string(),
        version: project.version().unwrap_or_default().to_string(),
    };
    let graph = ResolutionGraph::from_resolution(root, &resolution);

    if let Some(ref target) = opts.why {
        return Ok(match graph.find_path(target) {
            Some(path) => {
                let mut out = format!("Path to {target}:\n");
                for (i, node) in path.iter().enumerate() {
                    out.push_str(&format!("{}{node}\n", "  ".repeat(i)));
                }
                out
            }
            None => format!("Package '{target}' is not part of the resolution.\n"),
        });
    }

    if let Some(ref target) = opts.inverted {
        let out = graph.print_inverted_tree(target);
        return Ok(if out.is_empty() {
            format!("Package '{target}' is not part of the resolution.\n")
        } else {
            out
        });
    }

    Ok(graph.print_tree(opts.depth))
}
