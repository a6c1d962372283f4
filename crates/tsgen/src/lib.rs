// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use clap as _;
use cli_utils as _;
use const_format as _;

pub mod config;
pub mod mapping;
pub mod typings;

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use config::Config;
use git_version::git_version;
use ontokit_store::{parse, validate_store, MemoryStore, Resource, Storelike};
use ontokit_vocab::classes;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

pub const DEFAULT_HEADER: &str = "/* -----------------------------------
 * GENERATED WITH ontokit-tsgen
 * -------------------------------- */";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No ontology (a resource with isA {}) found in input file '{}'", classes::ONTOLOGY.as_str(), .0.display())]
    MissingOntology(PathBuf),

    #[error("Property '{0}' has no entry in the reverse mapping; it is not listed in its ontology")]
    MissingReverseMapping(String),

    #[error("None of the requested ontologies were found in the input files: {0:?}")]
    RequestedOntologiesMissing(Vec<String>),

    #[error("Two (or more) input ontologies result in the same output file name: {}; please change that.", .0.display())]
    DuplicateOutput(PathBuf),

    #[error("The input data is not valid:\n{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] ontokit_store::Error),

    /// Represents all cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A generated TypeScript module for a single ontology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OntologyModule {
    /// The TypeScript identifier of the ontology,
    /// also used as the output file stem.
    pub name: String,
    pub content: String,
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generates the complete TypeScript module for `ontology`.
///
/// # Errors
///
/// See [`mapping::generate_base_object`]
/// and [`typings::generate_prop_type_mapping`].
pub async fn generate_ontology<S: Storelike + ?Sized>(
    store: &S,
    ontology: &Resource,
    header: Option<&str>,
) -> Result<OntologyModule> {
    let name = mapping::ts_identifier(ontology.title());
    let (base_object, reverse_mapping) = mapping::generate_base_object(store, ontology).await?;
    let prop_types =
        typings::generate_prop_type_mapping(store, ontology, &reverse_mapping).await?;
    let subject_to_name =
        typings::generate_subject_to_name_mapping(store, ontology, &reverse_mapping).await?;

    let content = format!(
        "{}\n\nimport type {{ {} }} from '@tomic/lib';\n\n{base_object}\ndeclare module '@tomic/lib' {{\n{}\n\n{}\n}}\n",
        header.unwrap_or(DEFAULT_HEADER),
        typings::TS_JSON_VALUE,
        indent(&prop_types),
        indent(&subject_to_name),
    );

    Ok(OntologyModule { name, content })
}

/// Generates one TypeScript file per ontology
/// found in the input files (JSON-AD or RDF).
///
/// All input files are loaded into one store,
/// so ontologies may reference classes and properties defined in other input files.
/// If `config.only` is set, only the ontologies listed there are generated.
/// Returns the paths of all files written.
///
/// # Errors
///
/// - one of the input files cannot be read or parsed
/// - one of the input files does not contain an ontology
/// - one of the output files cannot be written
/// - two ontologies result in the same output file name
/// - none of the ontologies in `config.only` were found
/// - `config.validate` is set, and the loaded data is not valid
pub async fn generate(config: &Config) -> Result<Vec<PathBuf>> {
    let store = MemoryStore::new();
    let mut ontologies = Vec::new();
    for ont_file in &config.ontologies {
        let resources = parse::load_file(ont_file).await?;
        let mut found = resources
            .iter()
            .filter(|res| res.is_instance_of(classes::ONTOLOGY))
            .map(|res| res.subject().to_owned())
            .peekable();
        if found.peek().is_none() {
            return Err(Error::MissingOntology(ont_file.clone()));
        }
        for subject in found {
            if ontologies.contains(&subject) {
                tracing::debug!("Ontology '{subject}' is defined in multiple input files");
            } else {
                ontologies.push(subject);
            }
        }
        store.populate(resources).await;
    }
    if config.validate {
        let report = validate_store(&store).await?;
        if !report.is_valid() {
            return Err(Error::Validation(report.to_string()));
        }
        tracing::info!("{}", report.to_string().trim_end());
    }
    if !config.only.is_empty() {
        ontologies.retain(|subject| config.only.contains(subject));
        if ontologies.is_empty() {
            return Err(Error::RequestedOntologiesMissing(config.only.clone()));
        }
    }

    let mut out_files = HashSet::new();
    let mut written_out_files = Vec::new();
    for ont_subject in ontologies {
        let ontology = store.get_resource(&ont_subject).await?;
        let module = generate_ontology(&store, &ontology, config.header.as_deref()).await?;
        let out_file = config.out_dir.join(format!("{}.ts", module.name));
        if !out_files.insert(out_file.clone()) {
            return Err(Error::DuplicateOutput(out_file));
        }
        if config.dry_run {
            tracing::info!(
                "Dry run; not writing '{}' for ontology '{ont_subject}':\n{}",
                out_file.display(),
                module.content
            );
        } else if config.force || !out_file.exists() {
            tracing::info!(
                "Writing '{}' for ontology '{ont_subject}' ...",
                out_file.display()
            );
            tokio::fs::write(&out_file, module.content).await?;
            written_out_files.push(out_file);
        } else {
            tracing::warn!(
                "Output file '{}' already exists; skipping it (use --force to overwrite)",
                out_file.display()
            );
        }
    }

    Ok(written_out_files)
}
