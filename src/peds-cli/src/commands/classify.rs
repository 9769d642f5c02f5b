//! Classify command handler

use crate::cli::OutputFormat;
use anyhow::Result;
use peds::{classify_with, derive_name_with, Category, Kind, ReferenceTables};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClassifiedModel {
    pub identifier: String,
    pub display_name: String,
    pub category: Category,
    pub kind: Kind,
    pub rule: &'static str,
}

pub fn classify_models(models: &[String]) -> Vec<ClassifiedModel> {
    let tables = ReferenceTables::builtin();
    models
        .iter()
        .map(|model| {
            let display_name = derive_name_with(tables, model);
            let c = classify_with(tables, model, Some(display_name.as_str()));
            ClassifiedModel {
                identifier: model.clone(),
                display_name,
                category: c.category,
                kind: c.kind,
                rule: c.rule,
            }
        })
        .collect()
}

pub fn handle(models: &[String], format: OutputFormat) -> Result<()> {
    let classified = classify_models(models);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&classified)?);
        }
        OutputFormat::Text => {
            println!(
                "{:<36} {:<16} {:<9} {:<18} Name",
                "Model", "Category", "Kind", "Rule"
            );
            println!("{}", "-".repeat(100));
            for m in &classified {
                println!(
                    "{:<36} {:<16} {:<9} {:<18} {}",
                    m.identifier,
                    m.category.to_string(),
                    m.kind.to_string(),
                    m.rule,
                    m.display_name
                );
            }
        }
    }

    Ok(())
}
