use super::render::{print_config, print_fields, print_messages, print_profile};
use super::setup::{Cli, Commands};
use charsheet::api::{ConfigAction, ImportKind, ProfileApi};
use charsheet::config::CharsheetConfig;
use charsheet::error::{CharsheetError, Result};
use charsheet::format::ExportFormat;
use charsheet::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

const HOME_ENV: &str = "CHARSHEET_HOME";
const LOG_ENV: &str = "CHARSHEET_LOG";

struct AppContext {
    api: ProfileApi<FileStore>,
    cwd: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Set { key, value }) => handle_set(&mut ctx, &key, value),
        Some(Commands::Get { key }) => handle_get(&ctx, &key),
        Some(Commands::Show) | None => handle_show(&ctx),
        Some(Commands::Fields { section }) => handle_fields(&ctx, section.as_deref()),
        Some(Commands::Export {
            format,
            output,
            stdout,
        }) => handle_export(&ctx, format.into(), output, stdout),
        Some(Commands::Import { file, markdown }) => handle_import(&mut ctx, &file, markdown),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    let _ = registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "charsheet", "charsheet")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CharsheetError::Api("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = data_dir()?;
    let config = CharsheetConfig::load_or_default(&data_dir);
    debug!(data_dir = %data_dir.display(), storage_key = %config.storage_key, "opening profile");

    let store = FileStore::new(data_dir.clone());
    let api = ProfileApi::open(store, config, data_dir);
    Ok(AppContext { api, cwd })
}

fn handle_set(ctx: &mut AppContext, key: &str, value: String) -> Result<()> {
    let result = ctx.api.set_field(key, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, key: &str) -> Result<()> {
    let result = ctx.api.get_field(key)?;
    if let Some(value) = &result.value {
        println!("{}", value);
    }
    Ok(())
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show()?;
    if let Some(doc) = &result.profile {
        print_profile(doc);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fields(ctx: &AppContext, section: Option<&str>) -> Result<()> {
    let result = ctx.api.fields(section)?;
    print_fields(&result.fields);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    format: ExportFormat,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    if stdout {
        let result = ctx.api.export(format, None)?;
        if let Some(artifact) = &result.artifact {
            print!("{}", artifact.content);
        }
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| ctx.api.config().export_dir_or(&ctx.cwd));
    let result = ctx.api.export(format, Some(&dir))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path, markdown: bool) -> Result<()> {
    let kind = if markdown {
        ImportKind::Markdown
    } else {
        ImportKind::Fillable
    };
    let result = ctx.api.import_file(file, kind)?;
    print_messages(&result.messages);
    if let Some(doc) = &result.profile {
        println!();
        print_profile(doc);
    }
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
