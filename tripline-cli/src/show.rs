//! The `show` command: a readable summary of the saved itinerary.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripline_core::{Itinerary, SnapshotStore, format_distance, format_travel_time};
use tripline_data::JsonSnapshotStore;

use crate::{ARG_STORE_DIR, CliError, DEFAULT_STORE_DIR};

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Summarise the saved itinerary")]
#[ortho_config(prefix = "TRIPLINE")]
pub(crate) struct ShowArgs {
    /// Directory holding saved snapshots.
    #[arg(long = ARG_STORE_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) store_dir: Option<Utf8PathBuf>,
}

pub(super) fn run_show(args: ShowArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let store_dir = merged
        .store_dir
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORE_DIR));
    let store = JsonSnapshotStore::new(&store_dir);
    let itinerary = store.load()?.ok_or_else(|| CliError::NoSavedItinerary {
        path: store.path(),
    })?;
    writer
        .write_all(render_itinerary(&itinerary).as_bytes())
        .map_err(CliError::WriteOutput)
}

/// Render stops, the legs between them and the trip totals.
pub(crate) fn render_itinerary(itinerary: &Itinerary) -> String {
    let mut lines = vec![
        format!("{} ({})", itinerary.name, itinerary.id),
        format!("saved {}", itinerary.updated_at.format("%Y-%m-%d %H:%M UTC")),
    ];
    for (index, location) in itinerary.locations.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({})",
            index + 1,
            location.name,
            location.address
        ));
        let outgoing = itinerary
            .travel_legs
            .iter()
            .find(|leg| leg.start_location_id == location.id);
        if let Some(leg) = outgoing {
            lines.push(format!(
                "   -> {} {}, {}",
                leg.travel_mode.descriptor().name,
                format_travel_time(leg.duration_minutes),
                format_distance(leg.distance_km)
            ));
        }
    }
    lines.push(format!(
        "total: {}, {}",
        format_travel_time(itinerary.total_duration_minutes()),
        format_distance(itinerary.total_distance_km())
    ));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
