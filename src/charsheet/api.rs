//! # API Facade
//!
//! [`ProfileApi`] is the editor session: it owns the single live [`Document`] and
//! is the only writer to it. Every UI client goes through this facade.
//!
//! ## Lifecycle
//!
//! - **Open**: the stored profile is loaded once, in [`ProfileApi::open`]. A missing
//!   or corrupt blob means an empty profile, never an error.
//! - **Edit**: each [`ProfileApi::set_field`] writes the whole document back to the
//!   store.
//! - **Import**: the parsed partial document is merged, never replacing keys it
//!   does not mention.
//! - **Clear**: the document is emptied and the stored key removed.
//!
//! Persistence failures are logged through `tracing` and otherwise ignored; the
//! in-memory document is authoritative for the rest of the session.
//!
//! ## Generic Over ProfileStore
//!
//! - Production: `ProfileApi<FileStore>`
//! - Testing: `ProfileApi<InMemoryStore>`
//!
//! Business logic lives in `commands/*.rs`; this layer only dispatches.

use crate::commands;
use crate::config::CharsheetConfig;
use crate::error::Result;
use crate::format::ExportFormat;
use crate::model::Document;
use crate::store::ProfileStore;
use std::path::{Path, PathBuf};

pub struct ProfileApi<S: ProfileStore> {
    store: S,
    config: CharsheetConfig,
    config_dir: PathBuf,
    document: Document,
}

impl<S: ProfileStore> ProfileApi<S> {
    /// Start a session, loading the profile stored under `config.storage_key`.
    pub fn open(store: S, config: CharsheetConfig, config_dir: PathBuf) -> Self {
        let document = commands::helpers::load_document(&store, &config.storage_key);
        Self {
            store,
            config,
            config_dir,
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &CharsheetConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// End the session, handing the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_field(&mut self, key: &str, value: String) -> Result<commands::CmdResult> {
        commands::edit::run(
            &mut self.store,
            &self.config.storage_key,
            &mut self.document,
            key,
            value,
        )
    }

    pub fn get_field(&self, key: &str) -> Result<commands::CmdResult> {
        commands::edit::get(&self.document, key)
    }

    pub fn clear(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(
            &mut self.store,
            &self.config.storage_key,
            &mut self.document,
            confirmed,
        )
    }

    /// Render an export. With `out_dir` it is also written to disk.
    pub fn export(
        &self,
        format: ExportFormat,
        out_dir: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::export::run(
            &self.document,
            format,
            &self.config.markdown_options(),
            out_dir,
        )
    }

    pub fn import_text(&mut self, text: &str, kind: ImportKind) -> Result<commands::CmdResult> {
        commands::import::run_text(
            &mut self.store,
            &self.config.storage_key,
            &mut self.document,
            text,
            kind,
        )
    }

    pub fn import_file(&mut self, path: &Path, kind: ImportKind) -> Result<commands::CmdResult> {
        commands::import::run_file(
            &mut self.store,
            &self.config.storage_key,
            &mut self.document,
            path,
            kind,
        )
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.document)
    }

    pub fn fields(&self, section: Option<&str>) -> Result<commands::CmdResult> {
        commands::fields::run(section)
    }

    pub fn configure(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::import::ImportKind;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    const KEY: &str = "cyberpunk-character-profile";

    fn api_with(store: InMemoryStore) -> (ProfileApi<InMemoryStore>, TempDir) {
        let temp = TempDir::new().unwrap();
        let api = ProfileApi::open(store, CharsheetConfig::default(), temp.path().to_path_buf());
        (api, temp)
    }

    #[test]
    fn test_open_loads_stored_profile() {
        let store = InMemoryStore::new().with_blob(KEY, r#"{"age":"30","custom":"x"}"#);
        let (api, _temp) = api_with(store);
        assert_eq!(api.document().get("age"), "30");
        assert_eq!(api.document().get("custom"), "x");
    }

    #[test]
    fn test_open_with_corrupt_blob_starts_empty() {
        let store = InMemoryStore::new().with_blob(KEY, "<<garbage>>");
        let (api, _temp) = api_with(store);
        assert!(api.document().is_empty());
    }

    #[test]
    fn test_set_field_persists_under_storage_key() {
        let (mut api, _temp) = api_with(InMemoryStore::new());
        api.set_field("age", "30".into()).unwrap();
        assert_eq!(api.store().blob(KEY), Some(r#"{"age":"30"}"#));
    }

    #[test]
    fn test_custom_storage_key() {
        let temp = TempDir::new().unwrap();
        let config = CharsheetConfig {
            storage_key: "other".into(),
            ..CharsheetConfig::default()
        };
        let mut api = ProfileApi::open(InMemoryStore::new(), config, temp.path().to_path_buf());
        api.set_field("age", "30".into()).unwrap();
        assert!(api.store().blob("other").is_some());
        assert!(api.store().blob(KEY).is_none());
    }

    #[test]
    fn test_clear_then_reopen_is_empty() {
        let (mut api, _temp) = api_with(InMemoryStore::new());
        api.set_field("age", "30".into()).unwrap();
        api.clear(true).unwrap();
        assert!(api.document().is_empty());
        assert_eq!(api.store().blob(KEY), None);

        let reopened = ProfileApi::open(
            api.into_store(),
            CharsheetConfig::default(),
            PathBuf::from("."),
        );
        assert!(reopened.document().is_empty());
    }

    #[test]
    fn test_import_then_export_text() {
        let (mut api, _temp) = api_with(InMemoryStore::new());
        api.set_field("hair", "Chrome".into()).unwrap();

        let res = api
            .import_text("Character Name: Vex\nnot a field\n", ImportKind::Fillable)
            .unwrap();
        assert!(res.profile.is_some());

        let res = api.export(ExportFormat::Text, None).unwrap();
        let text = res.artifact.unwrap().content;
        assert_eq!(
            text,
            "CYBER DYSTOPIAN CHARACTER PROFILE\n\nHair: Chrome\nCharacter Name: Vex\n"
        );
    }

    #[test]
    fn test_export_markdown_respects_config() {
        let temp = TempDir::new().unwrap();
        let config = CharsheetConfig {
            skip_empty_headings: true,
            ..CharsheetConfig::default()
        };
        let mut api = ProfileApi::open(InMemoryStore::new(), config, temp.path().to_path_buf());
        api.set_field("age", "30".into()).unwrap();

        let md = api
            .export(ExportFormat::Markdown, None)
            .unwrap()
            .artifact
            .unwrap()
            .content;
        assert!(!md.contains("## PHYSICAL ATTRIBUTES"));
        assert!(md.contains("## CONCEPT & IDENTITY"));
    }

    #[test]
    fn test_failed_saves_do_not_interrupt_session() {
        let (mut api, _temp) = api_with(InMemoryStore::new().failing_writes());
        api.set_field("age", "30".into()).unwrap();
        api.import_text("Gender: F", ImportKind::Fillable).unwrap();
        assert_eq!(api.document().get("age"), "30");
        assert_eq!(api.document().get("gender"), "F");
    }

    #[test]
    fn test_configure_uses_config_dir() {
        let (api, temp) = api_with(InMemoryStore::new());
        api.configure(ConfigAction::Set("export-dir".into(), "out".into()))
            .unwrap();
        assert!(temp.path().join("config.json").exists());
    }
}
