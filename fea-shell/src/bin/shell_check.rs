//! Shell element checker
//!
//! Reads one element (plus optional options and loads) from a JSON file and
//! prints its quality report, stiffness diagonal and summed nodal forces as JSON.
//!
//! Usage: shell-check <element.json> [options.json]

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use fea_shell::prelude::*;

#[derive(Debug, Deserialize)]
struct CheckRequest {
    element: ShellElement,
    #[serde(default)]
    loads: Vec<Load>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    quality: QualityReport,
    messages: Vec<String>,
    area: f64,
    stiffness_valid: bool,
    stiffness_diagonal: Vec<f64>,
    nodal_forces: NodalForceMap,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <element.json> [options.json]", args[0]);
    }

    let text = fs::read_to_string(&args[1]).with_context(|| format!("reading {}", args[1]))?;
    let request: CheckRequest = serde_json::from_str(&text).context("parsing element file")?;

    let options = match args.get(2) {
        Some(path) => ShellOptions::from_json_file(path)
            .with_context(|| format!("reading options {}", path))?,
        None => ShellOptions::default(),
    };

    let element = &request.element;
    let quality = validate_element(element, &options);
    log::info!(
        "Validated element: valid = {}, {} warnings",
        quality.is_valid,
        quality.warnings.len()
    );

    let stiffness = element_stiffness(element, &options)?;
    let stiffness_valid = stiffness.is_valid();
    let k = stiffness.into_inner();
    let stiffness_diagonal = (0..24).map(|i| k[(i, i)]).collect();

    let mut nodal_forces = NodalForceMap::new();
    for load in &request.loads {
        match load {
            Load::Nodal(l) => nodal_forces.add(&l.node, l.as_array()),
            Load::Area(a) => {
                let distributed = distribute_area_load(element, a, &options)?;
                if let Some(reason) = distributed.reason() {
                    log::warn!("Area load on degenerate element: {}", reason);
                }
                nodal_forces.merge_from(&distributed.into_inner());
            }
        }
    }

    let report = CheckReport {
        messages: quality.messages(),
        quality,
        area: element_area(element),
        stiffness_valid,
        stiffness_diagonal,
        nodal_forces,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
