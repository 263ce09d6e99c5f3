//! VCG output for IR graphs.
//!
//! Renders a graph in the yComp-compatible VCG format for visual debugging.
//! Dumping is triggered by the driver layer (`DUMP_GRAPHS=vcg`), never by
//! the core.

use super::{IrGraph, NodeKind};

/// Renders `graph` as a VCG document.
///
/// Emits every arena node, reachable or not, so dead definitions stay
/// visible when inspecting a translation.
pub fn print_vcg(graph: &IrGraph) -> String {
    let mut out = String::new();
    out.push_str("graph: {\n");
    out.push_str(&format!("  title: \"{}\"\n", graph.name()));
    out.push_str("  layoutalgorithm: mindepth\n");
    out.push_str("  manhattan_edges: yes\n");

    for id in graph.node_ids() {
        let label = match graph.kind(id) {
            NodeKind::ConstInt(value) => format!("ConstInt {value}"),
            kind => kind.name().to_string(),
        };
        match graph.node(id).block() {
            Some(block) => out.push_str(&format!(
                "  node: {{ title: \"{id}\" label: \"{label}\" info1: \"block {block}\" }}\n"
            )),
            None => out.push_str(&format!(
                "  node: {{ title: \"{id}\" label: \"{label}\" }}\n"
            )),
        }
    }

    // Backward edges, labeled with the predecessor slot.
    for id in graph.node_ids() {
        for (slot, pred) in graph.preds(id).iter().enumerate() {
            out.push_str(&format!(
                "  edge: {{ sourcename: \"{id}\" targetname: \"{pred}\" label: \"{slot}\" }}\n"
            ));
        }
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_title_nodes_and_edges() {
        let mut graph = IrGraph::new("sample");
        let block = graph.start_block();
        let c7 = graph.add_node(NodeKind::ConstInt(7), block, vec![]);
        let add = graph.add_node(NodeKind::Add, block, vec![c7, c7]);

        let vcg = print_vcg(&graph);
        assert!(vcg.contains("title: \"sample\""));
        assert!(vcg.contains("label: \"ConstInt 7\""));
        assert!(vcg.contains("label: \"Add\""));
        assert!(vcg.contains(&format!("sourcename: \"{add}\" targetname: \"{c7}\"")));
    }
}
