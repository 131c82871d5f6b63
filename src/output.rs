//! Human and JSON rendering of search results

use std::fmt::Display;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::json;

use searchkit_core::error::Result;
use searchkit_core::game::Evaluation;
use searchkit_core::graph::Path;
use searchkit_core::search::Deepening;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

fn join<N: Display>(nodes: &[N], separator: &str) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Build the JSON object shared by every path-producing command
pub fn path_json<N: Serialize>(algorithm: &str, path: Option<&Path<N>>) -> serde_json::Value {
    match path {
        Some(path) => json!({
            "algorithm": algorithm,
            "found": true,
            "path": path.nodes,
            "cost": path.cost,
        }),
        None => json!({
            "algorithm": algorithm,
            "found": false,
            "path": [],
            "cost": null,
        }),
    }
}

fn path_line<N: Display>(path: Option<&Path<N>>) -> String {
    match path {
        Some(path) => format!("{} (cost {})", join(&path.nodes, " -> "), path.cost),
        None => "no path found".to_string(),
    }
}

/// Print a visit order
pub fn print_order<N: Display + Serialize>(
    format: OutputFormat,
    algorithm: &str,
    order: &[N],
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "algorithm": algorithm,
            "order": order,
        })),
        OutputFormat::Human => {
            println!("{}", join(order, " "));
            Ok(())
        }
    }
}

/// Print an optional path
pub fn print_path<N: Display + Serialize>(
    format: OutputFormat,
    algorithm: &str,
    path: Option<&Path<N>>,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&path_json(algorithm, path)),
        OutputFormat::Human => {
            println!("{}", path_line(path));
            Ok(())
        }
    }
}

/// Print an iterative deepening outcome
pub fn print_deepening<N: Display + Serialize>(
    format: OutputFormat,
    outcome: &Deepening<N>,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = match outcome {
                Deepening::Found { path, depth } => {
                    let mut value = path_json("iddfs", Some(path));
                    value["depth"] = json!(depth);
                    value
                }
                Deepening::NotFound { explored_to } => {
                    let mut value = path_json::<N>("iddfs", None);
                    value["explored_to"] = json!(explored_to);
                    value
                }
                Deepening::Unreachable => path_json::<N>("iddfs", None),
            };
            value["status"] = json!(status(outcome));
            print_json(&value)
        }
        OutputFormat::Human => {
            match outcome {
                Deepening::Found { path, depth } => {
                    println!("found at depth {}: {}", depth, path_line(Some(path)))
                }
                Deepening::NotFound { explored_to } => {
                    println!("not found within depth {}", explored_to)
                }
                Deepening::Unreachable => println!("target unreachable"),
            }
            Ok(())
        }
    }
}

fn status<N>(outcome: &Deepening<N>) -> &'static str {
    match outcome {
        Deepening::Found { .. } => "found",
        Deepening::NotFound { .. } => "not_found",
        Deepening::Unreachable => "unreachable",
    }
}

/// Print a best-first path along with the order nodes were expanded
pub fn print_best_first<N: Display + Serialize>(
    format: OutputFormat,
    path: Option<&Path<N>>,
    expanded: &[N],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = path_json("best-first", path);
            value["expanded"] = json!(expanded);
            print_json(&value)
        }
        OutputFormat::Human => {
            println!("{}; expanded {}", path_line(path), join(expanded, " "));
            Ok(())
        }
    }
}

/// Print a game tree evaluation
pub fn print_evaluation(
    format: OutputFormat,
    algorithm: &str,
    evaluation: &Evaluation,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "algorithm": algorithm,
            "value": evaluation.value,
            "leaves_visited": evaluation.leaves_visited,
        })),
        OutputFormat::Human => {
            println!(
                "value {} ({} leaves visited)",
                evaluation.value, evaluation.leaves_visited
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchkit_core::graph::Cost;

    #[test]
    fn test_path_json_found() {
        let path = Path {
            nodes: vec!['D', 'B', 'E', 'F'],
            cost: Cost::from(3),
        };
        let value = path_json("path", Some(&path));
        assert_eq!(value["found"], true);
        assert_eq!(value["path"], json!(["D", "B", "E", "F"]));
        assert_eq!(value["cost"], 3.0);
    }

    #[test]
    fn test_path_json_missing() {
        let value = path_json::<u32>("dls", None);
        assert_eq!(value["found"], false);
        assert_eq!(value["path"], json!([]));
        assert!(value["cost"].is_null());
    }

    #[test]
    fn test_path_line() {
        let path = Path {
            nodes: vec![5, 7, 8],
            cost: Cost::from(2),
        };
        assert_eq!(path_line(Some(&path)), "5 -> 7 -> 8 (cost 2)");
        assert_eq!(path_line::<u32>(None), "no path found");
    }
}
