//! Resolution graph construction and traversal.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::constraint::Constraint;
use crate::resolver::Resolution;

/// A node in the resolution graph: the project itself or a chosen package.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GraphNode {
    pub name: String,
    pub version: String,
}

impl GraphNode {
    /// The part of the name after the vendor prefix.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

/// A resolved dependency graph backed by petgraph. Edges carry the
/// constraint the source placed on the target.
pub struct ResolutionGraph {
    graph: DiGraph<GraphNode, Constraint>,
    index: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl ResolutionGraph {
    /// Build the graph for `resolution`, with `root` standing for the project.
    pub fn from_resolution(root: GraphNode, resolution: &Resolution) -> Self {
        let mut graph = DiGraph::new();
        let root_idx = graph.add_node(root);
        let mut index = HashMap::new();

        for (name, package) in &resolution.packages {
            let idx = graph.add_node(GraphNode {
                name: name.to_string(),
                version: package.version.to_string(),
            });
            index.insert(name.to_string(), idx);
        }

        for (name, constraint) in &resolution.root {
            if let Some(&to) = index.get(name.as_str()) {
                graph.add_edge(root_idx, to, constraint.clone());
            }
        }
        for (name, package) in &resolution.packages {
            let from = index[name.as_str()];
            for (target, constraint) in &package.requires {
                if let Some(&to) = index.get(target.as_str()) {
                    graph.add_edge(from, to, constraint.clone());
                }
            }
        }

        Self {
            graph,
            index,
            root: root_idx,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Look up a package node by its full name.
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &GraphNode {
        &self.graph[idx]
    }

    /// Direct dependencies of a node, in declaration order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &Constraint)> {
        let mut deps: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), e.weight()))
            .collect();
        // petgraph yields outgoing edges newest first
        deps.reverse();
        deps
    }

    /// Reverse dependencies (who requires this node).
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &Constraint)> {
        let mut deps: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (e.source(), e.weight()))
            .collect();
        deps.reverse();
        deps
    }

    /// Render the tree below the root, cutting off below `max_depth` levels.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = format!("{}\n", self.graph[self.root]);
        let mut visited = HashSet::new();
        visited.insert(self.root);

        let deps = self.dependencies_of(self.root);
        let count = deps.len();
        for (i, (idx, constraint)) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                &mut output,
                *idx,
                constraint,
                "",
                is_last,
                1,
                max_depth,
                &mut visited,
            );
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        constraint: &Constraint,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node} ({constraint})"));

        // Cycles are printed once and marked.
        if !visited.insert(idx) {
            output.push_str(" (cycle)\n");
            return;
        }
        output.push('\n');

        if max_depth.is_some_and(|max| depth >= max) {
            visited.remove(&idx);
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, (child, constraint)) in deps.iter().enumerate() {
            self.print_subtree(
                output,
                *child,
                constraint,
                &child_prefix,
                i == count - 1,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// Find the path from the root to a package.
    ///
    /// Accepts either `vendor/name` or just `name`.
    pub fn find_path(&self, name: &str) -> Option<Vec<&GraphNode>> {
        let target = self.resolve_name(name)?;
        let mut path = Vec::new();
        let mut visited = HashSet::new();
        if self.dfs_path(self.root, target, &mut path, &mut visited) {
            Some(path.iter().map(|&idx| &self.graph[idx]).collect())
        } else {
            None
        }
    }

    /// Exact name first, then the first node whose short name matches.
    fn resolve_name(&self, name: &str) -> Option<NodeIndex> {
        if let Some(&idx) = self.index.get(name) {
            return Some(idx);
        }
        self.graph
            .node_indices()
            .filter(|&idx| idx != self.root)
            .find(|&idx| self.graph[idx].short_name() == name)
    }

    fn dfs_path(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        visited: &mut HashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            path.pop();
            return false;
        }
        for (next, _) in self.dependencies_of(current) {
            if self.dfs_path(next, target, path, visited) {
                return true;
            }
        }
        path.pop();
        false
    }

    /// Render everything that requires `name`, transitively, up to the root.
    pub fn print_inverted_tree(&self, name: &str) -> String {
        let mut output = String::new();
        let Some(idx) = self.resolve_name(name) else {
            return output;
        };
        output.push_str(&format!("{}\n", self.graph[idx]));

        let mut visited = HashSet::new();
        visited.insert(idx);
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, (dep_idx, constraint)) in dependents.iter().enumerate() {
            self.print_inverted_subtree(
                &mut output,
                *dep_idx,
                constraint,
                "",
                i == count - 1,
                &mut visited,
            );
        }
        output
    }

    fn print_inverted_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        constraint: &Constraint,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node} (requires {constraint})\n"));

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, (dep_idx, constraint)) in dependents.iter().enumerate() {
            self.print_inverted_subtree(
                output,
                *dep_idx,
                constraint,
                &child_prefix,
                i == count - 1,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// Number of package nodes (excluding the root).
    pub fn len(&self) -> usize {
        self.graph.node_count() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
