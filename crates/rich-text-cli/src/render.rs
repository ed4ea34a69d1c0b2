//! `rich-text` render command implementation.

use std::io;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use rich_text_html::{convert_nodes_to_html_string, HtmlRenderOptions};
use rich_text_tree::{convert_nodes_to_tree, TreeRenderOptions};
use rich_text_types::{Document, Mark};
use tracing::{debug, info};

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputTarget {
    /// HTML fragment.
    Html,
    /// Render tree as JSON.
    Tree,
}

/// Arguments for rendering a document.
#[derive(Debug, Args)]
pub(crate) struct RenderArgs {
    /// JSON document to render (default: stdin, also `-`).
    input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputTarget::Html)]
    target: OutputTarget,

    /// Nest marks instead of letting the last set mark win.
    #[arg(long)]
    compose_marks: bool,

    /// Render container TYPE as <TAG>children</TAG> (repeatable).
    #[arg(long = "node", value_name = "TYPE=TAG", value_parser = parse_node_override)]
    nodes: Vec<(String, String)>,

    /// Render MARK as <TAG>text</TAG> (repeatable).
    #[arg(long = "mark", value_name = "MARK=TAG", value_parser = parse_mark_override)]
    marks: Vec<(Mark, String)>,
}

impl RenderArgs {
    pub(crate) fn execute(&self) -> Result<String, CliError> {
        let json = self.read_input()?;
        self.render(&json)
    }

    fn read_input(&self) -> Result<String, CliError> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                debug!(path = %path.display(), "reading document");
                Ok(std::fs::read_to_string(path)?)
            }
            _ => {
                debug!("reading document from stdin");
                Ok(io::read_to_string(io::stdin())?)
            }
        }
    }

    fn render(&self, json: &str) -> Result<String, CliError> {
        let document = Document::from_json_str(json)?;
        if document.is_none() {
            info!("input is not a node array, output is empty");
        }

        match self.target {
            OutputTarget::Html => {
                let options = self.html_options();
                Ok(document
                    .map(|document| convert_nodes_to_html_string(&document, &options))
                    .unwrap_or_default())
            }
            OutputTarget::Tree => {
                let options = self.tree_options();
                let tree = document.map(|document| convert_nodes_to_tree(&document, &options));
                Ok(serde_json::to_string_pretty(&tree)?)
            }
        }
    }

    fn mark_mode(&self) -> rich_text_html::MarkMode {
        if self.compose_marks {
            rich_text_html::MarkMode::Compose
        } else {
            rich_text_html::MarkMode::Overwrite
        }
    }

    fn html_options(&self) -> HtmlRenderOptions {
        let mut options = HtmlRenderOptions::new().with_mark_mode(self.mark_mode());
        for (kind, tag) in &self.nodes {
            options.add_node(kind, rich_text_html::wrap_children(tag.as_str()));
        }
        for (mark, tag) in &self.marks {
            options.add_mark(*mark, rich_text_html::wrap_text(tag.as_str()));
        }
        options
    }

    fn tree_options(&self) -> TreeRenderOptions {
        let mut options = TreeRenderOptions::new().with_mark_mode(self.mark_mode());
        for (kind, tag) in &self.nodes {
            options.add_node(kind, rich_text_tree::wrap_children(tag.as_str()));
        }
        for (mark, tag) in &self.marks {
            options.add_mark(*mark, rich_text_tree::wrap_text(tag.as_str()));
        }
        options
    }
}

fn split_override(value: &str) -> Result<(&str, &str), String> {
    let (key, tag) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=TAG, got `{value}`"))?;
    let tag = tag.trim();
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(format!("invalid tag name `{tag}`"));
    }
    Ok((key.trim(), tag))
}

fn parse_node_override(value: &str) -> Result<(String, String), String> {
    let (kind, tag) = split_override(value)?;
    if kind.is_empty() {
        return Err("container type must not be empty".to_string());
    }
    Ok((kind.to_string(), tag.to_string()))
}

fn parse_mark_override(value: &str) -> Result<(Mark, String), String> {
    let (mark, tag) = split_override(value)?;
    let mark = mark.parse::<Mark>().map_err(|e| e.to_string())?;
    Ok((mark, tag.to_string()))
}
