use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use client::{CallbackOutcome, CallbackResolver, SessionState, SessionStatus};

use crate::{
    commands::context::CliContext,
    terminal::{TerminalNavigator, TerminalNotifier},
};

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show the locally stored session without contacting the API
    Status,
    /// Verify the stored session against the API
    Check,
    /// Finish a browser login by importing its session cookie
    Login(LoginArgs),
    /// Forget the local session, cookies and token
    Logout,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Session cookie copied from the browser after signing in, as `name=value`
    #[arg(long)]
    pub cookie: Option<String>,

    /// Bearer token to send with every request
    #[arg(long)]
    pub token: Option<String>,
}

pub async fn run(ctx: &CliContext, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Status => {
            println!("{}", describe(&ctx.session.snapshot()));
            println!("session file: {}", ctx.state_file().display());
            Ok(())
        }
        SessionCommand::Check => {
            ctx.session.check_session(&ctx.api).await;
            let state = ctx.session.snapshot();
            println!("{}", describe(&state));
            if !state.is_authenticated() {
                bail!("session could not be verified");
            }
            Ok(())
        }
        SessionCommand::Login(args) => login(ctx, args).await,
        SessionCommand::Logout => {
            ctx.session.logout();
            ctx.forget_credentials()?;
            println!("Signed out.");
            Ok(())
        }
    }
}

async fn login(ctx: &CliContext, args: LoginArgs) -> Result<()> {
    if args.cookie.is_none() && args.token.is_none() {
        bail!("provide --cookie or --token from a browser login");
    }
    if let Some(cookie) = &args.cookie {
        ctx.import_cookie(cookie)?;
    }
    if let Some(token) = &args.token {
        ctx.store_token(token)?;
    }

    let outcome = CallbackResolver::default()
        .resolve(&ctx.session, &ctx.api, &TerminalNavigator, &TerminalNotifier)
        .await;

    match outcome {
        CallbackOutcome::SignedIn => {
            println!("{}", describe(&ctx.session.snapshot()));
            Ok(())
        }
        CallbackOutcome::Failed => {
            ctx.session.logout();
            ctx.forget_credentials()?;
            bail!("login failed")
        }
    }
}

/// One-line summary of a session.
pub fn describe(state: &SessionState) -> String {
    match state.status() {
        SessionStatus::SignedIn(user) => format!(
            "Signed in as {} <{}> ({})",
            user.display_name(),
            user.email,
            user.role
        ),
        SessionStatus::Verifying { .. } => "Session verification pending".to_string(),
        SessionStatus::SignedOut => "Not signed in".to_string(),
    }
}
