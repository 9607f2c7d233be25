//! Deployment descriptor assembly.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::info;

use cloudplan_config::DeploymentConfig;

use crate::audit::RemoteAuditLogGenerator;
use crate::error::{PlanError, PlanResult};
use crate::project::ProjectResourceGenerator;
use crate::resource::{DeploymentDescriptor, ResourceDescriptor};
use crate::vm::VmResourceGenerator;

/// Assembles the generators' outputs into one dependency-ordered
/// deployment descriptor.
pub struct Assembler;

impl Assembler {
    /// Run all generators and produce the final creation-ordered sequence.
    ///
    /// Ordering is resolved from the declared dependency names, not from
    /// generator invocation order, so the result stays correct if
    /// generators are reordered. Among resources whose dependencies are
    /// satisfied, emission order is kept, which makes the output
    /// deterministic and preserves VM input order.
    pub fn assemble(config: &DeploymentConfig) -> PlanResult<DeploymentDescriptor> {
        let mut resources = ProjectResourceGenerator::generate(config)?;
        resources.extend(RemoteAuditLogGenerator::generate(config)?);
        resources.extend(VmResourceGenerator::generate(config)?);

        let ordered = Self::topological_order(resources)?;
        info!(
            "Assembled deployment descriptor for {} with {} resources",
            config.project_id,
            ordered.len()
        );
        Ok(DeploymentDescriptor::new(ordered))
    }

    /// Stable topological sort of the descriptors by dependency name.
    fn topological_order(
        resources: Vec<ResourceDescriptor>,
    ) -> PlanResult<Vec<ResourceDescriptor>> {
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        // Nodes are added in emission order; NodeIndex order mirrors it.
        // Names must be unique or dependency-by-name resolution is ambiguous.
        for (position, resource) in resources.iter().enumerate() {
            let node = graph.add_node(position);
            if indices.insert(resource.name.as_str(), node).is_some() {
                return Err(PlanError::DuplicateResourceName(resource.name.clone()));
            }
        }

        for resource in &resources {
            let dependent = indices[resource.name.as_str()];
            for dependency in &resource.depends_on {
                let Some(&provider) = indices.get(dependency.as_str()) else {
                    return Err(PlanError::UnresolvedDependency {
                        resource: resource.name.clone(),
                        dependency: dependency.clone(),
                    });
                };
                graph.add_edge(provider, dependent, ());
            }
        }

        // Kahn's algorithm with the ready set ordered by node index, so
        // ties are broken by emission order.
        let mut in_degree: HashMap<NodeIndex, usize> = graph
            .node_indices()
            .map(|n| (n, graph.neighbors_directed(n, Direction::Incoming).count()))
            .collect();
        let mut ready: BTreeSet<NodeIndex> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&n, _)| n)
            .collect();

        let mut slots: Vec<Option<ResourceDescriptor>> = resources.into_iter().map(Some).collect();
        let mut ordered = Vec::with_capacity(slots.len());

        while let Some(&node) = ready.iter().next() {
            ready.remove(&node);
            let position = graph[node];
            ordered.push(slots[position].take().expect("each node emitted once"));

            for successor in graph.neighbors_directed(node, Direction::Outgoing) {
                let degree = in_degree.get_mut(&successor).expect("known node");
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(successor);
                }
            }
        }

        if ordered.len() != slots.len() {
            let remaining: Vec<&str> = slots
                .iter()
                .filter_map(|slot| slot.as_ref().map(|r| r.name.as_str()))
                .collect();
            return Err(PlanError::CyclicDependency(remaining.join(", ")));
        }

        Ok(ordered)
    }
}
