//! Interactive shell.
//!
//! Renders the active screen stack on stdout and drives the wizard and
//! profile screens from stdin. The session coordinator decides which
//! stack is mounted; the shell only draws what it is told.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

use lb_app::{OnboardingFlow, SessionCoordinator};
use lb_core::ports::{ProfileStorePort, SessionEventPort};
use lb_core::profile::ProfileRecord;
use lb_core::session::{SessionState, StackSet};
use lb_core::wizard::{WizardEvent, WizardPage, WizardState};
use lb_infra::{ConsoleNotifier, FileProfileStore};

struct LogSessionEvents;

#[async_trait]
impl SessionEventPort for LogSessionEvents {
    async fn session_changed(&self, state: SessionState) {
        debug!(?state, "session changed");
    }
}

pub async fn run() -> Result<()> {
    let data_dir = lb_infra::fs::app_data_dir()?;
    let config =
        lb_infra::config::load_app_config(&data_dir.join(lb_infra::config::DEFAULT_CONFIG_FILE))
            .await?;

    let store: Arc<dyn ProfileStorePort> = match config.storage.store_file {
        Some(path) => Arc::new(FileProfileStore::new(path)),
        None => Arc::new(FileProfileStore::with_defaults(data_dir)),
    };
    let session = Arc::new(SessionCoordinator::from_ports(
        store,
        Arc::new(ConsoleNotifier),
        Arc::new(LogSessionEvents),
    ));

    // The startup read resolves before anything gated renders.
    session.bootstrap().await;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match session.active_stack().await {
            // bootstrap() has already resolved; nothing to draw here
            StackSet::Splash => continue,
            StackSet::Onboarding => run_onboarding(&session, &mut input).await?,
            StackSet::Main => {
                if !run_main(&session, &mut input).await? {
                    return Ok(());
                }
            }
        }
    }
}

async fn run_onboarding(
    session: &Arc<SessionCoordinator>,
    input: &mut Lines<BufReader<Stdin>>,
) -> Result<()> {
    let flow = OnboardingFlow::new(session.clone());
    println!("Welcome! Let's get to know you. (:back to go back)");

    while session.active_stack().await == StackSet::Onboarding {
        render_wizard_page(&flow.state().await);

        let line = read_line(input).await?;
        if line == ":back" {
            flow.dispatch(WizardEvent::Back).await;
            continue;
        }

        let page = flow.state().await.page;
        let state = flow
            .dispatch(match page {
                WizardPage::FirstName => WizardEvent::FirstNameChanged { value: line },
                WizardPage::LastName => WizardEvent::LastNameChanged { value: line },
                WizardPage::Email => WizardEvent::EmailChanged { value: line },
            })
            .await;

        if state.page.is_last() {
            flow.dispatch(WizardEvent::Submit).await;
            if session.active_stack().await == StackSet::Onboarding {
                println!("  that email does not look valid, please re-enter");
            }
        } else {
            let after = flow.dispatch(WizardEvent::Next).await;
            if after.page == state.page {
                println!("  names may only contain letters, spaces, and hyphens");
            }
        }
    }

    println!("You're all set.");
    Ok(())
}

fn render_wizard_page(state: &WizardState) {
    let dots: String = state
        .page_indicator()
        .iter()
        .map(|active| if *active { '●' } else { '○' })
        .collect();
    let prompt = match state.page {
        WizardPage::FirstName => "First name",
        WizardPage::LastName => "Last name",
        WizardPage::Email => "Email",
    };
    println!("{dots}  {prompt}:");
}

/// Returns false when the user quits.
async fn run_main(
    session: &Arc<SessionCoordinator>,
    input: &mut Lines<BufReader<Stdin>>,
) -> Result<bool> {
    println!("[home] commands: profile, edit, logout, quit");

    while session.active_stack().await == StackSet::Main {
        match read_line(input).await?.as_str() {
            "profile" => show_profile(session).await,
            "edit" => edit_profile(session, input).await?,
            "logout" => {
                session.logout().await;
            }
            "quit" => return Ok(false),
            other => println!("unknown command: {other}"),
        }
    }

    Ok(true)
}

async fn show_profile(session: &Arc<SessionCoordinator>) {
    match session.profile().await {
        Ok(Some(profile)) => {
            println!("  {} {}", profile.first_name, profile.last_name);
            println!("  {}", profile.email);
            if let Some(phone) = &profile.phone_number {
                println!("  {phone}");
            }
        }
        Ok(None) => println!("  no profile on file"),
        Err(err) => warn!(error = %err, "profile load failed"),
    }
}

async fn edit_profile(
    session: &Arc<SessionCoordinator>,
    input: &mut Lines<BufReader<Stdin>>,
) -> Result<()> {
    let current = match session.profile().await {
        Ok(Some(profile)) => profile,
        Ok(None) => ProfileRecord::new("", "", ""),
        Err(err) => {
            warn!(error = %err, "profile load failed, starting from blank");
            ProfileRecord::new("", "", "")
        }
    };

    // Empty input keeps the current value.
    let first_name = prompt_field(input, "first name", &current.first_name).await?;
    let last_name = prompt_field(input, "last name", &current.last_name).await?;
    let email = prompt_field(input, "email", &current.email).await?;
    let phone = prompt_field(
        input,
        "phone",
        current.phone_number.as_deref().unwrap_or(""),
    )
    .await?;

    let record = ProfileRecord {
        first_name,
        last_name,
        email,
        phone_number: (!phone.is_empty()).then_some(phone),
        ..current
    };
    session.update(record).await;
    Ok(())
}

async fn prompt_field(
    input: &mut Lines<BufReader<Stdin>>,
    label: &str,
    current: &str,
) -> Result<String> {
    println!("  {label} [{current}]:");
    let line = read_line(input).await?;
    Ok(if line.is_empty() {
        current.to_string()
    } else {
        line
    })
}

async fn read_line(input: &mut Lines<BufReader<Stdin>>) -> Result<String> {
    let line = input
        .next_line()
        .await?
        .context("input closed")?;
    Ok(line.trim().to_string())
}
