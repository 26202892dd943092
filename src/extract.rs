use std::io::Read;

use anyhow::Context;
use tracing::{debug, info};
use xmltree::{Element, XMLNode};

use crate::launch::{
    LaunchConfiguration, LaunchDocument, GO_DEBUGGER_TYPE, LAUNCH_REQUEST, PROJECT_DIR_PLACEHOLDER,
};
use crate::split::split_arguments;

/// Extract every RunManager run configuration from a workspace.xml stream.
///
/// Configurations without a `name` attribute or without a `filePath` child
/// are dropped without an error; everything else maps to one launch entry,
/// in document order.
pub fn extract_configurations<R: Read>(input: R) -> anyhow::Result<LaunchDocument> {
    let root = Element::parse(input).context("malformed workspace XML")?;

    let mut configurations = Vec::new();
    if root.name == "project" {
        for component in child_elements(&root, "component") {
            if attribute(component, "name") != "RunManager" {
                continue;
            }
            for node in child_elements(component, "configuration") {
                if let Some(config) = convert_configuration(node)? {
                    configurations.push(config);
                }
            }
        }
    }

    Ok(LaunchDocument::new(configurations))
}

fn convert_configuration(node: &Element) -> anyhow::Result<Option<LaunchConfiguration>> {
    let name = attribute(node, "name");
    if name.is_empty() {
        return Ok(None);
    }
    let Some(file_path) = node.get_child("filePath") else {
        return Ok(None);
    };

    info!("converting configuration: {name}");

    // VS Code resolves relative programs against the workspace folder, so
    // the GoLand project-root placeholder is dropped rather than rewritten.
    let program = attribute(file_path, "value").replacen(PROJECT_DIR_PLACEHOLDER, "", 1);

    let args = match node.get_child("parameters") {
        Some(parameters) => {
            debug!("found exec arguments");
            let args = split_arguments(attribute(parameters, "value"))
                .with_context(|| format!("bad parameters in configuration {name:?}"))?;
            Some(args)
        }
        None => None,
    };

    let env = node.get_child("envs").map(|envs| {
        debug!("found env vars");
        child_elements(envs, "env")
            .map(|env| {
                (
                    attribute(env, "name").to_owned(),
                    attribute(env, "value").to_owned(),
                )
            })
            .collect()
    });

    Ok(Some(LaunchConfiguration {
        name: name.to_owned(),
        debugger: GO_DEBUGGER_TYPE.to_owned(),
        request: LAUNCH_REQUEST.to_owned(),
        program,
        args,
        env,
    }))
}

fn child_elements<'a>(
    parent: &'a Element,
    name: &'a str,
) -> impl Iterator<Item = &'a Element> + 'a {
    parent
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(move |el| el.name == name)
}

// A missing attribute reads as the empty string, like the source IDE's own
// attribute lookups.
fn attribute<'a>(element: &'a Element, name: &str) -> &'a str {
    element
        .attributes
        .get(name)
        .map(String::as_str)
        .unwrap_or_default()
}
