//! The `search` and `suggest` commands, answered from a catalogue file.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripline_core::{SearchProvider, SuggestionType};
use tripline_data::CatalogueSearchProvider;

use crate::{
    ARG_CATALOGUE, ARG_CATEGORY, ARG_LOCATION_ID, ARG_QUERY, CliError, ENV_SEARCH_CATALOGUE,
    ENV_SEARCH_QUERY, ENV_SUGGEST_CATALOGUE, ENV_SUGGEST_LOCATION_ID, require_existing_file,
    write_json,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find catalogue locations whose name or address contains \
                 the query, ignoring case. Results print as JSON.",
    about = "Search the place catalogue"
)]
#[ortho_config(prefix = "TRIPLINE")]
pub(crate) struct SearchArgs {
    /// Text to look for.
    #[arg(value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to the JSON place catalogue.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) query: String,
    pub(crate) catalogue: Utf8PathBuf,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_SEARCH_QUERY,
        })?;
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_SEARCH_CATALOGUE,
        })?;
        Ok(Self { query, catalogue })
    }
}

pub(super) fn run_search(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let provider = open_catalogue(&config.catalogue)?;
    let results = provider.search(&config.query)?;
    debug!("{} locations match {:?}", results.len(), config.query);
    write_json(writer, &results)
}

/// CLI arguments for the `suggest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List catalogue suggestions within walking range of a \
                 catalogue location, nearest first, optionally limited to \
                 one category (restaurant, attraction, hotel, shopping).",
    about = "Suggest places near a catalogue location"
)]
#[ortho_config(prefix = "TRIPLINE")]
pub(crate) struct SuggestArgs {
    /// Identifier of the reference location.
    #[arg(value_name = "location-id")]
    #[serde(default)]
    pub(crate) location_id: Option<String>,
    /// Only suggest places of this category.
    #[arg(long = ARG_CATEGORY, value_name = "category")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Path to the JSON place catalogue.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

impl SuggestArgs {
    pub(crate) fn into_config(self) -> Result<SuggestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SuggestConfig::try_from(merged)
    }
}

/// Resolved `suggest` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuggestConfig {
    pub(crate) location_id: String,
    pub(crate) category: Option<SuggestionType>,
    pub(crate) catalogue: Utf8PathBuf,
}

impl TryFrom<SuggestArgs> for SuggestConfig {
    type Error = CliError;

    fn try_from(args: SuggestArgs) -> Result<Self, Self::Error> {
        let location_id = args.location_id.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION_ID,
            env: ENV_SUGGEST_LOCATION_ID,
        })?;
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_SUGGEST_CATALOGUE,
        })?;
        let category = args
            .category
            .map(|raw| raw.parse::<SuggestionType>())
            .transpose()
            .map_err(|reason| CliError::InvalidCategory {
                field: ARG_CATEGORY,
                reason,
            })?;
        Ok(Self {
            location_id,
            category,
            catalogue,
        })
    }
}

pub(super) fn run_suggest(args: SuggestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let provider = open_catalogue(&config.catalogue)?;
    let reference = provider
        .location(&config.location_id)
        .ok_or_else(|| CliError::UnknownLocation {
            id: config.location_id.clone(),
        })?;
    let suggestions = provider.nearby(reference, config.category)?;
    write_json(writer, &suggestions)
}

fn open_catalogue(path: &Utf8Path) -> Result<CatalogueSearchProvider, CliError> {
    require_existing_file(path, ARG_CATALOGUE)?;
    Ok(CatalogueSearchProvider::from_path(path)?)
}
