use anyhow::Result;
use colored::Colorize;
use stickerdesk_core::auth::{AuthClient, SignInWithPasswordParams, SignUpParams};

use super::context::AppContext;

pub async fn login(ctx: &AppContext, email: String, password: String) -> Result<()> {
    let client = ctx.auth_client()?;
    client
        .sign_in_with_password(&SignInWithPasswordParams::new(email.clone(), password))
        .await?;
    println!("{} Signed in as {}", "✓".green(), email.bold());
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth_client()?.sign_out().await;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    match ctx.auth_client()?.get_user().await? {
        Some(user) => {
            println!("{} <{}>", user.display_name().bold(), user.email);
            println!("  id: {}", user.id);
        }
        None => println!("Not signed in"),
    }
    Ok(())
}

pub async fn sign_up(
    ctx: &AppContext,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
) -> Result<()> {
    let params = SignUpParams {
        first_name,
        last_name,
        email,
        password,
    };
    ctx.auth_client()?.sign_up(&params).await?;
    println!(
        "{} Local session created for {}",
        "✓".green(),
        params.email.bold()
    );
    Ok(())
}
