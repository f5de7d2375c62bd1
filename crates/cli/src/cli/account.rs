use clap::Args;
use shoplite::{auth::SignupRequest, context::ClientContext};

use crate::{
    cli::{describe, require_session},
    output,
};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "SHOPLITE_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct SignupArgs {
    /// Display name
    #[arg(long)]
    username: String,

    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "SHOPLITE_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long)]
    full_name: Option<String>,

    #[arg(long)]
    phone_number: Option<String>,

    #[arg(long)]
    address: Option<String>,
}

pub(crate) async fn login(ctx: &ClientContext, args: LoginArgs) -> Result<(), String> {
    let session = ctx
        .auth
        .login(&args.email, &args.password)
        .await
        .map_err(|error| describe("login failed", &error))?;

    println!("logged in");
    output::session(&session);

    Ok(())
}

pub(crate) async fn signup(ctx: &ClientContext, args: SignupArgs) -> Result<(), String> {
    let session = ctx
        .auth
        .signup(SignupRequest {
            username: args.username,
            email: args.email,
            password: args.password,
            full_name: args.full_name,
            phone_number: args.phone_number,
            address: args.address,
            role: None,
        })
        .await
        .map_err(|error| describe("signup failed", &error))?;

    println!("account created");
    output::session(&session);

    Ok(())
}

pub(crate) fn logout(ctx: &ClientContext) -> Result<(), String> {
    ctx.auth
        .logout()
        .map_err(|error| describe("logout failed", &error))?;

    println!("logged out");

    Ok(())
}

pub(crate) fn whoami(ctx: &ClientContext) -> Result<(), String> {
    let session = require_session(ctx)?;

    output::session(&session);

    Ok(())
}

pub(crate) async fn validate(ctx: &ClientContext) -> Result<(), String> {
    if ctx.auth.validate_token().await {
        println!("session is valid");

        Ok(())
    } else {
        Err("session is not valid; run `shoplite login` to sign in again".to_string())
    }
}
