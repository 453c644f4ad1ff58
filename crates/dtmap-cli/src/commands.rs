use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use dtmap_cli::display::systems_table;
use dtmap_cli::settings::{Settings, load_default_settings, load_settings_from};
use dtmap_cli::terminal::{DirectoryDownloads, terminal_ui};
use dtmap_client::{HttpMappingClient, MappingApi};
use dtmap_core::{ControllerConfig, TableController, html::page_fragment};
use dtmap_model::{RemappingOption, SelectionDraft};

use crate::cli::{Cli, GenerateArgs};

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The failure was already reported to the user as an alert.
    Alerted,
}

/// Settings file contents with command-line overrides applied.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_default_settings(),
    };
    if let Some(base_url) = &cli.base_url {
        settings.server.base_url.clone_from(base_url);
    }
    Ok(settings)
}

fn connect(settings: &Settings) -> Result<Arc<HttpMappingClient>> {
    let client = HttpMappingClient::new(&settings.server.base_url)
        .with_context(|| format!("configure backend {}", settings.server.base_url))?;
    Ok(Arc::new(client))
}

pub async fn run_generate(args: &GenerateArgs, settings: &Settings) -> Result<Outcome> {
    let client = connect(settings)?;
    let export_dir = args
        .export_dir
        .clone()
        .or_else(|| settings.export.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let controller = TableController::new(
        client,
        terminal_ui(DirectoryDownloads::new(export_dir)),
        ControllerConfig {
            poll_interval: settings.polling.interval(),
        },
    );

    let source = args.source.clone().unwrap_or_default();
    let target = args.target.clone().unwrap_or_default();
    let mut draft = SelectionDraft::new(source.as_str(), target.as_str())
        .with_advanced(args.advanced)
        .with_refresh(args.refresh);
    if let Some(option) = args.remapping_option {
        draft = draft.with_remapping_option(RemappingOption::from(option).as_str());
    }

    let Ok(generated) = controller.generate_table(&draft).await else {
        return Ok(Outcome::Alerted);
    };

    if let Some(path) = &args.html {
        fs::write(path, page_fragment(&generated.references, &generated.rendered))
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "html fragment written");
    }

    if args.export && controller.export_to_csv(source.trim(), target.trim()).is_err() {
        return Ok(Outcome::Alerted);
    }
    Ok(Outcome::Done)
}

pub async fn run_systems(settings: &Settings) -> Result<Outcome> {
    let client = connect(settings)?;
    let catalog = match client.catalog().await {
        Ok(catalog) => catalog,
        Err(err) => {
            let hint = err.user_message().to_string();
            return Err(anyhow::Error::new(err)
                .context(format!("list systems from {}", client.base_url()))
                .context(hint));
        }
    };
    if catalog.sources.is_empty() && catalog.targets.is_empty() {
        println!("No systems available.");
    } else {
        println!("{}", systems_table(&catalog));
    }
    Ok(Outcome::Done)
}
