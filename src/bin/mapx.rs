//! mapx CLI - resolve node references in mind-map documents
//!
//! A thin wrapper over the map_explorer library: loads a JSON map document,
//! resolves a reference from a start node, and prints the target.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use map_explorer::core::{
    AttributeRegistry, MapExplorerController, MindMap, NodeId, RecordingAccessedNodes,
};
use map_explorer::formats;

#[derive(Parser, Debug)]
#[command(name = "mapx")]
#[command(version = map_explorer::VERSION)]
#[command(about = "Resolve symbolic node references in mind-map documents")]
#[command(after_help = "EXAMPLES:
  # Absolute ID lookup
  mapx resolve --map project.json ID42

  # Alias shorthand
  mapx resolve --map project.json '#inbox'

  # Path expression from a start node, with the visited trail
  mapx resolve --map project.json --start 17 --trace 'at(parent/next/child:0)'

  # Label to offer when inserting a reference to node 17
  mapx suggest --map project.json 17
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a reference and print the target node
    Resolve {
        /// Map document (JSON)
        #[arg(long = "map", value_name = "FILE")]
        map: PathBuf,

        /// Start node ID for relative references (default: the root)
        #[arg(long = "start", value_name = "NODE_ID")]
        start: Option<String>,

        /// Print the visited-node trail after the result
        #[arg(long = "trace")]
        trace: bool,

        /// The reference: ID<digits>, at(<path>), or #<alias>
        reference: String,
    },
    /// Print the reference suggestion for a node
    Suggest {
        /// Map document (JSON)
        #[arg(long = "map", value_name = "FILE")]
        map: PathBuf,

        /// Node ID to suggest a reference label for
        node: String,
    },
}

fn load_map(path: &PathBuf) -> anyhow::Result<MindMap> {
    let mut registry = AttributeRegistry::new();
    MapExplorerController::install(&mut registry);
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read map document {}", path.display()))?;
    let map = formats::from_json(&json, &registry)
        .with_context(|| format!("cannot parse map document {}", path.display()))?;
    Ok(map)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let controller = MapExplorerController::default();

    match cli.command {
        Command::Resolve {
            map,
            start,
            trace,
            reference,
        } => {
            let map = load_map(&map)?;
            let start = match start {
                Some(id) => NodeId::new(id),
                None => map.root_id().clone(),
            };
            let mut recorder = RecordingAccessedNodes::new();
            let node = controller
                .get_node_at_tracked(&map, &start, &reference, &mut recorder)
                .with_context(|| format!("cannot resolve '{reference}'"))?;
            let text = map
                .node_for_id(&node)
                .map(|node| node.text.as_str())
                .unwrap_or_default();
            println!("{node}\t{text}");
            if trace {
                for visited in recorder.visited() {
                    println!("visited: {visited}");
                }
            }
        }
        Command::Suggest { map, node } => {
            let map = load_map(&map)?;
            let id = NodeId::new(node);
            anyhow::ensure!(map.contains(&id), "unknown node: {id}");
            println!("{}", controller.get_node_reference_suggestion(&map, &id));
        }
    }
    Ok(())
}
