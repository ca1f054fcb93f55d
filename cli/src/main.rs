mod api;
mod render;
mod store;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use leads::contact::submit_contact;
use leads::{
    ApiError, ContactForm, ContactGating, ContactState, LeadStatus, ListQuery, LoginRequest, NewLead, Session,
    StatusCounts, StatusFilter, SubmitStatus,
};

use crate::api::LeadsClient;
use crate::store::{FileTokenStore, default_token_path};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `leads-cli login` or pass --token")]
    NotLoggedIn,
    #[error("session rejected by the server; log in again")]
    AccessDenied,
    #[error("request failed: {0}")]
    Api(ApiError),
    #[error("{0}")]
    Submit(String),
    #[error("no config directory available; pass --token-file")]
    NoConfigDir,
    #[error("token file {path}: {source}")]
    TokenFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "leads-cli", about = "Leads CRM command-line client")]
struct Cli {
    /// Leads API base URL (the host's `/api` prefix or the service itself).
    #[arg(long, env = "LEADS_BASE_URL", default_value = "http://127.0.0.1:3000/api")]
    base_url: String,

    /// Use this token instead of the stored one. Never written to disk.
    #[arg(long, env = "LEADS_TOKEN")]
    token: Option<String>,

    #[arg(long, env = "LEADS_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session token and store it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "LEADS_PASSWORD")]
        password: String,
    },
    /// Forget the stored token.
    Logout,
    /// Print one page of leads.
    List(ListArgs),
    /// Print status totals and chart percentages.
    Summary,
    /// Change a lead's status.
    SetStatus { id: String, status: LeadStatus },
    /// Send the public contact form.
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value = "todos")]
    status: StatusFilter,
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Print the page as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
    #[arg(long, default_value_t = false)]
    accept_terms: bool,
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    require_terms: bool,
    #[arg(long, env = "LEADS_VERIFICATION_SITE_KEY")]
    site_key: Option<String>,
    #[arg(long)]
    verification_token: Option<String>,
}

struct CliContext {
    client: LeadsClient,
    session: Session<FileTokenStore>,
    token_override: Option<String>,
}

impl CliContext {
    fn token(&self) -> Result<String, CliError> {
        self.token_override
            .clone()
            .filter(|token| !token.is_empty())
            .or_else(|| self.session.token())
            .ok_or(CliError::NotLoggedIn)
    }

    /// Map an authenticated call's result, dropping the stored token on 403.
    fn checked<T>(&mut self, result: Result<T, ApiError>) -> Result<T, CliError> {
        match result {
            Ok(value) => Ok(value),
            Err(ApiError::AuthDenied) => {
                if self.token_override.is_none() {
                    self.session.access_denied();
                    self.persisted()?;
                }
                Err(CliError::AccessDenied)
            }
            Err(e) => Err(CliError::Api(e)),
        }
    }

    fn persisted(&mut self) -> Result<(), CliError> {
        let store = self.session.store_mut();
        match store.take_error() {
            Some(source) => Err(CliError::TokenFile { path: store.path().to_path_buf(), source }),
            None => Ok(()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let token_path = match cli.token_file {
        Some(path) => path,
        None => default_token_path().ok_or(CliError::NoConfigDir)?,
    };
    let mut ctx = CliContext {
        client: LeadsClient::new(&cli.base_url),
        session: Session::new(FileTokenStore::new(token_path)),
        token_override: cli.token,
    };

    match cli.command {
        Command::Login { email, password } => run_login(&mut ctx, email, password).await,
        Command::Logout => {
            ctx.session.logout();
            ctx.persisted()?;
            println!("sesión cerrada");
            Ok(())
        }
        Command::List(args) => run_list(&mut ctx, args).await,
        Command::Summary => run_summary(&mut ctx).await,
        Command::SetStatus { id, status } => run_set_status(&mut ctx, &id, status).await,
        Command::Submit(args) => run_submit(&ctx, args).await,
    }
}

async fn run_login(ctx: &mut CliContext, email: String, password: String) -> Result<(), CliError> {
    let credentials = LoginRequest { email: email.trim().to_owned(), password };
    let token = ctx.client.login(&credentials).await.map_err(CliError::Api)?;
    ctx.session.login(&token);
    ctx.persisted()?;
    println!("sesión iniciada");
    Ok(())
}

async fn run_list(ctx: &mut CliContext, args: ListArgs) -> Result<(), CliError> {
    let token = ctx.token()?;
    let result = ctx.client.fetch_leads(&token).await;
    let leads = ctx.checked(result)?;

    let mut query = ListQuery::default();
    query.set_filter(args.status);
    query.set_search(args.search);
    query.go_to(args.page, &leads);
    let page = query.view(&leads);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page.items)?);
    } else {
        print!("{}", render::lead_page(&page));
    }
    Ok(())
}

async fn run_summary(ctx: &mut CliContext) -> Result<(), CliError> {
    let token = ctx.token()?;
    let result = ctx.client.fetch_leads(&token).await;
    let leads = ctx.checked(result)?;
    print!("{}", render::summary(&StatusCounts::from_leads(&leads)));
    Ok(())
}

async fn run_set_status(ctx: &mut CliContext, id: &str, status: LeadStatus) -> Result<(), CliError> {
    let token = ctx.token()?;
    let result = ctx.client.update_status(&token, id, status).await;
    ctx.checked(result)?;
    println!("{id} -> {}", status.label());
    Ok(())
}

async fn run_submit(ctx: &CliContext, args: SubmitArgs) -> Result<(), CliError> {
    let gating = ContactGating::new(args.require_terms, args.site_key.as_deref());
    let mut state = ContactState {
        form: ContactForm { name: args.name, email: args.email, message: args.message },
        accepted_terms: args.accept_terms,
        verification_token: args.verification_token,
        ..ContactState::default()
    };

    let client = &ctx.client;
    let status = submit_contact(&mut state, &gating, |lead: NewLead| async move { client.create_lead(&lead).await }).await;
    let notice = state.notice.unwrap_or_default();
    if status == SubmitStatus::Success {
        println!("{notice}");
        Ok(())
    } else {
        Err(CliError::Submit(notice))
    }
}
