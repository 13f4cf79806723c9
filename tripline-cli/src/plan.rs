//! Trip plan documents and the `plan` and `save` commands.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripline_core::{
    DEFAULT_ITINERARY_NAME, ItineraryError, ItineraryModel, Location, SnapshotStore, TravelLeg,
    TravelMode,
};
use tripline_data::JsonSnapshotStore;
use tripline_fs::open_utf8_file;

use crate::{
    ARG_STORE_DIR, ARG_TRIP, CliError, DEFAULT_STORE_DIR, ENV_PLAN_TRIP, ENV_SAVE_TRIP,
    require_existing_file, write_json,
};

/// Editable description of a trip: stops in order plus explicit mode choices.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TripPlan {
    #[serde(default = "default_trip_name")]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) default_mode: TravelMode,
    #[serde(default)]
    pub(crate) locations: Vec<Location>,
    #[serde(default)]
    pub(crate) modes: Vec<ModeChoice>,
}

/// Travel mode chosen for the leg `from → to`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct ModeChoice {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) mode: TravelMode,
}

fn default_trip_name() -> String {
    DEFAULT_ITINERARY_NAME.to_owned()
}

impl TripPlan {
    /// Build the itinerary model the plan describes.
    pub(crate) fn to_model(&self) -> Result<ItineraryModel, ItineraryError> {
        let mut model = ItineraryModel::new().with_default_mode(self.default_mode);
        for location in &self.locations {
            model.add_location(location.clone())?;
        }
        for choice in &self.modes {
            model.set_mode(&choice.from, &choice.to, choice.mode);
        }
        let pruned = model.prune_mode_selections();
        if pruned > 0 {
            debug!("{pruned} mode choices do not match adjacent stops and were ignored");
        }
        Ok(model)
    }
}

/// Loads a JSON-encoded [`TripPlan`] from disk.
pub(crate) fn load_trip_plan(path: &Utf8Path) -> Result<TripPlan, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTrip {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseTrip {
        path: path.to_path_buf(),
        source,
    })
}

fn model_for(path: &Utf8Path, plan: &TripPlan) -> Result<ItineraryModel, CliError> {
    plan.to_model().map_err(|source| CliError::InvalidTrip {
        path: path.to_path_buf(),
        source,
    })
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a JSON trip plan (name, defaultMode, locations and \
                 per-leg modes) and print the derived travel legs with \
                 their estimated durations and distances.",
    about = "Print the travel legs derived from a trip plan"
)]
#[ortho_config(prefix = "TRIPLINE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON trip plan.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) trip_path: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) trip_path: Utf8PathBuf,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let trip_path = args.trip_path.ok_or(CliError::MissingArgument {
            field: ARG_TRIP,
            env: ENV_PLAN_TRIP,
        })?;
        Ok(Self { trip_path })
    }
}

/// Legs printed by `plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlanOutput {
    pub(crate) name: String,
    pub(crate) travel_legs: Vec<TravelLeg>,
    pub(crate) total_duration: u32,
    pub(crate) total_distance: f64,
}

pub(super) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing_file(&config.trip_path, ARG_TRIP)?;
    let plan = load_trip_plan(&config.trip_path)?;
    let output = plan_output(&config.trip_path, &plan)?;
    write_json(writer, &output)
}

pub(crate) fn plan_output(path: &Utf8Path, plan: &TripPlan) -> Result<PlanOutput, CliError> {
    let model = model_for(path, plan)?;
    Ok(PlanOutput {
        name: plan.name.clone(),
        travel_legs: model.derive_legs(),
        total_duration: model.total_duration_minutes(),
        total_distance: model.total_distance_km(),
    })
}

/// CLI arguments for the `save` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Snapshot a JSON trip plan into the snapshot directory. \
                 An existing snapshot keeps its identifier and creation \
                 time; everything else is replaced.",
    about = "Save a trip plan as the current itinerary"
)]
#[ortho_config(prefix = "TRIPLINE")]
pub(crate) struct SaveArgs {
    /// Path to a JSON trip plan.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) trip_path: Option<Utf8PathBuf>,
    /// Directory holding saved snapshots.
    #[arg(long = ARG_STORE_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) store_dir: Option<Utf8PathBuf>,
}

impl SaveArgs {
    pub(crate) fn into_config(self) -> Result<SaveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SaveConfig::try_from(merged)
    }
}

/// Resolved `save` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SaveConfig {
    pub(crate) trip_path: Utf8PathBuf,
    pub(crate) store_dir: Utf8PathBuf,
}

impl TryFrom<SaveArgs> for SaveConfig {
    type Error = CliError;

    fn try_from(args: SaveArgs) -> Result<Self, Self::Error> {
        let trip_path = args.trip_path.ok_or(CliError::MissingArgument {
            field: ARG_TRIP,
            env: ENV_SAVE_TRIP,
        })?;
        let store_dir = args
            .store_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORE_DIR));
        Ok(Self {
            trip_path,
            store_dir,
        })
    }
}

pub(super) fn run_save(args: SaveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing_file(&config.trip_path, ARG_TRIP)?;
    save_trip(&config, writer)
}

pub(crate) fn save_trip(config: &SaveConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let plan = load_trip_plan(&config.trip_path)?;
    let mut model = model_for(&config.trip_path, &plan)?;
    let store = JsonSnapshotStore::new(&config.store_dir);
    // An unreadable predecessor is replaced under a fresh identity.
    match store.load() {
        Ok(Some(previous)) => {
            debug!("continuing itinerary '{}'", previous.id);
            model.resume_snapshot(&previous);
        }
        Ok(None) => {}
        Err(err) => warn!("starting a new itinerary: {err}"),
    }
    let itinerary = model
        .snapshot(plan.name.as_str())
        .map_err(|source| CliError::InvalidTrip {
            path: config.trip_path.clone(),
            source,
        })?;
    store.save(&itinerary)?;
    info!("saved itinerary '{}' to {}", itinerary.id, store.path());
    writeln!(
        writer,
        "saved {} ({} stops) to {}",
        itinerary.id,
        itinerary.locations.len(),
        store.path()
    )
    .map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn save_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SaveConfig, CliError> {
    let merged = SaveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SaveConfig::try_from(merged)
}
