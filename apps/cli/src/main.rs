use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    config::normalize_base_url, load_settings, CustomerManager, HttpCustomerGateway, Severity,
};
use shared::domain::{Customer, CustomerField, CustomerId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Manage customer records on the customers backend")]
struct Cli {
    /// Overrides the configured backend base url.
    #[arg(long)]
    api_url: Option<String>,
    /// Accept self-signed certificates from the backend.
    #[arg(long)]
    insecure: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Create(FieldArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    name: Option<String>,
    /// ISO date, e.g. 1990-04-01.
    #[arg(long)]
    birthday: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

impl FieldArgs {
    fn into_updates(self) -> Vec<(CustomerField, String)> {
        [
            (CustomerField::Name, self.name),
            (CustomerField::Birthday, self.birthday),
            (CustomerField::Phone, self.phone),
            (CustomerField::Email, self.email),
            (CustomerField::Address, self.address),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings()?;
    if let Some(url) = &cli.api_url {
        settings.api_base_url = normalize_base_url(url)?;
    }
    settings.accept_invalid_certs |= cli.insecure;

    let gateway = HttpCustomerGateway::from_settings(&settings)
        .context("failed to build http client")?;
    let mut manager = CustomerManager::new(gateway, settings.notification_timeout);

    match cli.command {
        Command::List => {
            if !manager.refresh().await {
                return report(&manager);
            }
            print_table(manager.customers());
            Ok(())
        }
        Command::Create(fields) => {
            manager.open_create();
            for (field, value) in fields.into_updates() {
                manager.update_field(field, value);
            }
            manager.save().await;
            report(&manager)
        }
        Command::Update { id, fields } => {
            let id = CustomerId(id);
            if !manager.refresh().await {
                return report(&manager);
            }
            let Some(existing) = manager.customers().iter().find(|c| c.id == id).cloned() else {
                return Err(anyhow!("no customer with id {id}"));
            };
            manager.open_edit(&existing);
            for (field, value) in fields.into_updates() {
                manager.update_field(field, value);
            }
            manager.save().await;
            report(&manager)
        }
        Command::Delete { id } => {
            manager.request_delete(CustomerId(id));
            manager.confirm_delete().await;
            report(&manager)
        }
    }
}

/// Prints the session's notification; an error notification fails the command.
fn report<G: client_core::CustomerGateway>(manager: &CustomerManager<G>) -> Result<()> {
    match manager.session().notifications().current() {
        Some(n) if n.severity == Severity::Error => Err(anyhow!("{}", n.message)),
        Some(n) => {
            println!("{}", n.message);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_table(customers: &[Customer]) {
    println!(
        "{:>6}  {:<24} {:<10}  {:<16} {:<28} {}",
        "ID", "Name", "Birthday", "Phone", "Email", "Address"
    );
    for c in customers {
        let birthday = c
            .birthday_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| c.birthday.clone());
        println!(
            "{:>6}  {:<24} {:<10}  {:<16} {:<28} {}",
            c.id.0, c.name, birthday, c.phone, c.email, c.address
        );
    }
}
