use crate::adapters::catalog::adapter::CatalogAdapter;
use crate::app::dto::{LayoutConfig, LayoutResponse};
use crate::app::engine::LayoutEngine;
use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn engine_from_catalog(catalog_path: &Path) -> Result<LayoutEngine> {
    let adapter = Arc::new(CatalogAdapter::from_path(catalog_path)?);
    Ok(LayoutEngine::new(adapter.clone(), adapter))
}

/// Compute a layout for the scope and print it.
pub fn run_layout(
    catalog_path: &Path,
    scope: &str,
    offset: f32,
    no_edges: bool,
    format: OutputFormat,
) -> Result<()> {
    let engine = engine_from_catalog(catalog_path)?;
    let config = LayoutConfig {
        offset,
        show_dependency: !no_edges,
    };
    let response = engine.compute_layout(scope, &config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print_layout_text(&response),
    }
    Ok(())
}

fn print_layout_text(response: &LayoutResponse) {
    println!("Layout for scope: \"{}\"", response.scope);
    println!(
        "  {} type(s), {} group(s), {} edge(s)",
        response.node_count,
        response.groups.len(),
        response.edges.len()
    );

    for group in &response.groups {
        println!();
        println!(
            "[{}] {}x{} grid at ({:.0}, {:.0}), {:.0}x{:.0}",
            group.title,
            group.cols,
            group.rows,
            group.position.x,
            group.position.y,
            group.size.width,
            group.size.height
        );
        for node in &group.nodes {
            let kind = if node.is_interface { "interface" } else { "class" };
            println!(
                "  {:<30} {:>9} at ({:.0}, {:.0}) {:.0}x{:.0}",
                node.name, kind, node.position.x, node.position.y, node.size.width, node.size.height
            );
        }
    }

    if !response.edges.is_empty() {
        println!();
        println!("Edges:");
        for edge in &response.edges {
            println!("  {} -> {}", edge.source, edge.target);
        }
    }
}

/// List the catalog's known type universe (framework assemblies already
/// filtered out by the adapter).
pub fn run_types(catalog_path: &Path) -> Result<()> {
    use crate::domain::ports::TypeMetadataProvider;

    let adapter = CatalogAdapter::from_path(catalog_path)?;
    let known = adapter.all_known_types();

    println!("{} known type(s):", known.len());
    for type_ref in &known {
        let kind = if type_ref.is_interface { "interface" } else { "class" };
        println!("  {:<40} {}", type_ref.id, kind);
    }
    Ok(())
}

/// Build the dependency graph for the scope and print the adjacency map with
/// degrees as JSON (debugging aid; no layout).
pub fn run_graph(catalog_path: &Path, scope: &str) -> Result<()> {
    let engine = engine_from_catalog(catalog_path)?;
    let pass = engine.compute_pass(
        scope,
        &LayoutConfig {
            offset: 0.0,
            show_dependency: false,
        },
    )?;
    let graph = &pass.graph;

    let mut types = Vec::new();
    for type_ref in graph.types() {
        types.push(serde_json::json!({
            "id": type_ref.id,
            "name": type_ref.name,
            "namespace": type_ref.namespace,
            "is_interface": type_ref.is_interface,
            "in_degree": graph.in_degree(&type_ref.id),
            "out_degree": graph.out_degree(&type_ref.id),
            "dependencies": graph.dependencies_of(&type_ref.id),
        }));
    }

    let output = serde_json::json!({
        "scope": scope,
        "node_count": graph.node_count(),
        "edge_count": graph.edge_count(),
        "types": types,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
