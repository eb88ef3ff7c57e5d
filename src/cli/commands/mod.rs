pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod options;

use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::core::locator::Selector;
use crate::core::log::oplog;
use crate::core::{Session, View};
use crate::errors::{AppError, AppResult};
use crate::models::RecordId;
use crate::store::{GithubStore, LocalFileStore, RemoteStore, Synchronizer};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};

/// Store selected by `--file` or by the configuration.
pub(crate) fn open_synchronizer(cli: &Cli, cfg: &Config) -> AppResult<Synchronizer> {
    let store: Box<dyn RemoteStore> = match (&cli.file, cfg.backend) {
        (Some(file), _) => Box::new(LocalFileStore::new(expand_tilde(file))),
        (None, Backend::Local) => Box::new(LocalFileStore::new(cfg.data_path())),
        (None, Backend::Github) => Box::new(GithubStore::new(&cfg.github)?),
    };
    Ok(Synchronizer::new(store))
}

/// Run the password gate for this invocation.
pub(crate) fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let supplied = match (&cfg.password, &cli.password) {
        (Some(_), None) => Some(prompt_password()?),
        (_, given) => given.clone(),
    };

    let session = Session::open(cfg.password.as_deref(), supplied.as_deref());
    if !session.is_authorized() {
        oplog("denied", "", "Wrong or missing password");
    }
    session.require_authorized()?;
    Ok(session)
}

fn prompt_password() -> AppResult<String> {
    print!("🔒 Password: ");
    io::stdout().flush().ok();

    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

/// Gate, then load the schedule and report a degraded load.
pub(crate) fn open_view(cli: &Cli, cfg: &Config) -> AppResult<(Session, Synchronizer, View)> {
    let mut session = open_session(cli, cfg)?;
    let sync = open_synchronizer(cli, cfg)?;
    let view = View::open(&mut session, &sync)?;

    match &view.warning {
        Some(AppError::NotFound(msg)) => info(msg),
        Some(e) => warning(e),
        None => {}
    }

    Ok((session, sync, view))
}

/// `--key` / `--index` (1-based) / `--id` → selector.
pub(crate) fn selector(
    key: &Option<String>,
    index: &Option<usize>,
    id: &Option<String>,
) -> AppResult<Selector> {
    match (key, index, id) {
        (Some(k), _, _) => Ok(Selector::Key(k.clone())),
        (_, Some(n), _) => n
            .checked_sub(1)
            .map(Selector::Position)
            .ok_or_else(|| AppError::Validation("entry numbers start at 1".into())),
        (_, _, Some(id)) if id.trim().is_empty() => {
            Err(AppError::Validation("--id must not be empty".into()))
        }
        (_, _, Some(id)) => Ok(Selector::Id(RecordId::from(id.trim()))),
        _ => Err(AppError::Validation(
            "select an entry with --key, --index or --id".into(),
        )),
    }
}

/// Record conflicts in the operation log before surfacing them.
pub(crate) fn log_conflict(operation: &str, target: &str, e: &AppError) {
    if let AppError::Conflict(msg) = e {
        oplog("conflict", target, &format!("{operation} rejected: {msg}"));
    }
}
