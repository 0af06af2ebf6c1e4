use anyhow::Result;
use clap::Subcommand;
use storefront_lib::types::{LoginRequest, RegisterRequest};
use storefront_lib::{AuthSession, Client, StateStore};

use crate::output::{print_json, print_profile, OutputFormat};

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Log in and persist the bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new customer account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Show the authenticated profile
    Profile,
    /// Log out and clear the stored token
    Logout,
}

pub async fn run<S: StateStore>(
    command: &AccountCommand,
    client: &Client,
    store: S,
    format: &OutputFormat,
) -> Result<()> {
    let session = AuthSession::new(client, store);

    match command {
        AccountCommand::Login { email, password } => {
            session
                .login(&LoginRequest {
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;
            eprintln!("Logged in as {}", email);
        }
        AccountCommand::Register {
            name,
            email,
            password,
            phone,
        } => {
            let profile = session
                .register(&RegisterRequest {
                    name: name.clone(),
                    email: email.clone(),
                    password: password.clone(),
                    phone: phone.clone(),
                })
                .await?;
            eprintln!("Registered account {}", profile.id);
        }
        AccountCommand::Profile => {
            let profile = session.profile().await?;
            match format {
                OutputFormat::Table => print_profile(&profile),
                OutputFormat::Json => print_json(&profile)?,
            }
        }
        AccountCommand::Logout => {
            session.logout().await;
            eprintln!("Logged out.");
        }
    }

    Ok(())
}
