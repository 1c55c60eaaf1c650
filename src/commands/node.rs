use clap::{Args, Subcommand};
use strkit::utils::node;

use super::{CmdResult, TextOutput};

#[derive(Args)]
pub struct NodeArgs {
    #[command(subcommand)]
    command: NodeCommand,
}

#[derive(Subcommand)]
enum NodeCommand {
    /// Append `.` so the node can take a child key
    Dot { node: String },
    /// Last segment of the node, leading dot included
    Last { node: String },
}

pub fn run(args: NodeArgs) -> CmdResult<TextOutput> {
    let output = match args.command {
        NodeCommand::Dot { node } => {
            let result = node::append_node_dot(&node).into_owned();
            TextOutput::new("node.dot", node, result)
        }
        NodeCommand::Last { node } => {
            let result = node::strip_before_last_node(&node).to_string();
            TextOutput::new("node.last", node, result)
        }
    };

    Ok((output, 0))
}
