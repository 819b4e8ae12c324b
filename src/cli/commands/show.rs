//! Implementation of the `service-config show` command.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::display::{field_table, render_fields};
use crate::cli::fields;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ConfigView, Provenance};
use crate::infrastructure::config::{vars, Resolution};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print passwords and the encryption key instead of masking them
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Debug)]
pub struct FieldRow {
    pub variable: &'static str,
    pub value: String,
    pub source: Provenance,
}

/// Human output is one row per consulted variable; JSON output is the
/// config view plus the provenance map.
#[derive(Debug, Serialize)]
pub struct ShowOutput<'a> {
    pub config: ConfigView<'a>,
    pub provenance: &'a BTreeMap<&'static str, Provenance>,
    #[serde(skip)]
    pub fields: Vec<FieldRow>,
}

impl<'a> ShowOutput<'a> {
    pub fn from_resolution(resolution: &'a Resolution, reveal: bool) -> Self {
        let fields = vars::ALL
            .iter()
            .filter_map(|&name| {
                let source = resolution.provenance_of(name)?;
                let value = fields::render(&resolution.config, name, reveal)?;
                Some(FieldRow {
                    variable: name,
                    value,
                    source,
                })
            })
            .collect();

        let config = if reveal {
            resolution.config.view(true)
        } else {
            resolution.config.redacted()
        };

        Self {
            config,
            provenance: &resolution.provenance,
            fields,
        }
    }
}

impl CommandOutput for ShowOutput<'_> {
    fn to_human(&self) -> String {
        let mut table = field_table(&["variable", "value", "source"]);
        for row in &self.fields {
            table.add_row(vec![
                Cell::new(row.variable),
                Cell::new(&row.value),
                Cell::new(row.source),
            ]);
        }
        render_fields(
            &format!("Configuration (DB_ENV={})", self.config.db_env),
            &table,
            self.fields.len(),
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &ShowArgs, resolution: &Resolution, json_mode: bool) -> Result<()> {
    output(&ShowOutput::from_resolution(resolution, args.reveal), json_mode);
    Ok(())
}
