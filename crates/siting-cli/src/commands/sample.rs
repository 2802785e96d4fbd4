//! `siting sample` command - Export the demo town in the graph file format.

use std::path::Path;

use crate::error::CliResult;
use crate::loader;

/// Execute the `sample` command.
pub fn execute(output: Option<&Path>) -> CliResult<()> {
    let town = crate::sample::town()?;
    let mut buf = Vec::new();
    loader::write_graph(&town, &mut buf)?;
    let text = String::from_utf8_lossy(&buf);
    super::write_output(output, &text, "Sample graph")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load_input;

    #[test]
    fn test_exported_sample_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("town.txt");
        execute(Some(&path)).unwrap();

        let loaded = load_input(path.to_str(), false).unwrap();
        assert_eq!(loaded.graph.node_count(), 10);
        assert_eq!(loaded.graph.edge_count(), 17);
        assert_eq!(loaded.graph.weight("Kościół", "Park"), Some(5.0));
        assert!(loaded.created.is_empty());
    }
}
