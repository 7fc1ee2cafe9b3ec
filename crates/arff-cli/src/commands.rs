//! `inspect` and `rewrite` command implementations.

use anyhow::{Context, Result};
use comfy_table::Table;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use serde::Serialize;
use tracing::info;

use arff::{Attribute, Decoder, Encoder};

use crate::cli::{InspectArgs, RewriteArgs};

/// Machine-readable `inspect` output.
#[derive(Serialize)]
struct InspectReport {
    relation: String,
    comment: String,
    attributes: Vec<Attribute>,
    rows: usize,
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let mut decoder =
        Decoder::open(&args.file).with_context(|| format!("open {}", args.file.display()))?;
    let header = decoder.header().clone();

    let mut rows = 0usize;
    for row in decoder.rows() {
        row.with_context(|| format!("decode {}", args.file.display()))?;
        rows += 1;
    }

    if args.json {
        let report = InspectReport {
            relation: header.relation,
            comment: header.comment,
            attributes: header.attributes,
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Relation: {}", header.relation);
    if !header.comment.is_empty() {
        println!("Comment:  {}", header.comment.replace('\n', " / "));
    }
    println!("Rows:     {rows}");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Attribute", "Type", "Values"]);
    for attribute in &header.attributes {
        table.add_row(vec![
            attribute.name.clone(),
            attribute.attr_type.to_string(),
            attribute.values.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_rewrite(args: &RewriteArgs) -> Result<()> {
    let mut decoder =
        Decoder::open(&args.file).with_context(|| format!("open {}", args.file.display()))?;
    let header = decoder.header().clone();
    let mut encoder = Encoder::create(&args.output, header)
        .with_context(|| format!("create {}", args.output.display()))?;

    let mut rows = 0usize;
    while let Some(row) = decoder
        .decode_row()
        .with_context(|| format!("decode {}", args.file.display()))?
    {
        encoder.encode_row(&row)?;
        rows += 1;
    }
    encoder.flush()?;
    info!(rows, output = %args.output.display(), "rewrote file");
    println!("{} rows -> {}", rows, args.output.display());
    Ok(())
}
