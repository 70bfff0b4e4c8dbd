//! Stage 3: one feature per workflow rule with outbound dependencies.

use prodigo_core::constants::{rule_xml_path, FEATURE_STATUS_ACTIVE, WORKFLOW_MARKER};
use prodigo_core::errors::StorageError;
use prodigo_core::types::{EdgeRecord, NodeRecord};
use prodigo_storage::queries::feature_map::{upsert_features, FeatureRow};
use prodigo_storage::IngestDatabase;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::{to_json, ProjectContext};

/// Outbound edges of one workflow, in input order.
#[derive(Debug)]
pub struct FlowDependencies<'a> {
    pub flow_id: &'a str,
    pub edges: Vec<&'a EdgeRecord>,
}

/// Edges grouped around workflow nodes.
///
/// `flows` keeps the order in which each workflow first appears as an edge
/// source. `callers` maps a workflow to the sources of its inbound edges; it
/// is not persisted because the feature table has no column for it.
#[derive(Debug, Default)]
pub struct FlowGraph<'a> {
    pub flows: Vec<FlowDependencies<'a>>,
    callers: FxHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> FlowGraph<'a> {
    pub fn from_edges(edges: &'a [EdgeRecord]) -> Self {
        let mut flows: Vec<FlowDependencies<'a>> = Vec::new();
        let mut slot: FxHashMap<&'a str, usize> = FxHashMap::default();
        let mut callers: FxHashMap<&'a str, Vec<&'a str>> = FxHashMap::default();

        for edge in edges {
            if edge.src.contains(WORKFLOW_MARKER) {
                let idx = *slot.entry(edge.src.as_str()).or_insert_with(|| {
                    flows.push(FlowDependencies {
                        flow_id: edge.src.as_str(),
                        edges: Vec::new(),
                    });
                    flows.len() - 1
                });
                flows[idx].edges.push(edge);
            }
            if edge.dst.contains(WORKFLOW_MARKER) {
                callers
                    .entry(edge.dst.as_str())
                    .or_default()
                    .push(edge.src.as_str());
            }
        }

        Self { flows, callers }
    }

    /// Sources of edges pointing at `flow_id`.
    pub fn callers_of(&self, flow_id: &str) -> &[&'a str] {
        self.callers.get(flow_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Serialize)]
struct Dependency<'a> {
    dst: &'a str,
    #[serde(rename = "type")]
    edge_type: &'a str,
    confidence: &'a str,
}

/// Display name of a workflow: the node's rule name, else the text after
/// the last `.` of its id.
pub fn flow_name<'a>(flow_id: &'a str, nodes: &FxHashMap<&str, &'a NodeRecord>) -> &'a str {
    nodes
        .get(flow_id)
        .copied()
        .and_then(|node| node.rule_name.as_deref())
        .unwrap_or_else(|| flow_id.rsplit('.').next().unwrap_or(flow_id))
}

pub fn build_feature_rows(
    ctx: &ProjectContext,
    edges: &[EdgeRecord],
    nodes: &[NodeRecord],
) -> Result<Vec<FeatureRow>, StorageError> {
    let node_index: FxHashMap<&str, &NodeRecord> =
        nodes.iter().map(|node| (node.id.as_str(), node)).collect();
    let graph = FlowGraph::from_edges(edges);

    let mut rows = Vec::with_capacity(graph.flows.len());
    for flow in &graph.flows {
        let name = flow_name(flow.flow_id, &node_index);

        let mut seen = FxHashSet::default();
        let related: Vec<&str> = flow
            .edges
            .iter()
            .map(|edge| edge.dst.as_str())
            .filter(|dst| seen.insert(*dst))
            .collect();

        let dependencies: Vec<Dependency<'_>> = flow
            .edges
            .iter()
            .map(|edge| Dependency {
                dst: edge.dst.as_str(),
                edge_type: edge.edge_type.as_str(),
                confidence: edge.confidence_label(),
            })
            .collect();

        tracing::debug!(
            flow = flow.flow_id,
            dependencies = dependencies.len(),
            callers = graph.callers_of(flow.flow_id).len(),
            "mapped feature"
        );

        rows.push(FeatureRow {
            id: flow.flow_id.to_string(),
            project_path: ctx.project_path.clone(),
            feature_name: name.to_string(),
            primary_files: to_json(&[rule_xml_path(&ctx.app_dir, WORKFLOW_MARKER, name)])?,
            related_files: to_json(&related)?,
            dependencies: to_json(&dependencies)?,
            status: FEATURE_STATUS_ACTIVE.to_string(),
        });
    }
    Ok(rows)
}

pub fn populate_feature_map(
    db: &IngestDatabase,
    ctx: &ProjectContext,
    edges: &[EdgeRecord],
    nodes: &[NodeRecord],
) -> Result<usize, StorageError> {
    let rows = build_feature_rows(ctx, edges, nodes)?;
    let count = db.with_transaction(|tx| upsert_features(tx, &rows))?;
    tracing::info!(count, "inserted features from flows");
    Ok(count)
}
