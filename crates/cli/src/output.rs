use anyhow::{Context, Result};
use async_trait::async_trait;
use console::style;
use serde::de::DeserializeOwned;

use graphops_core::RequestEnvelope;
use graphops_graph::models::{Drive, ErrorResponse, GraphPage, Group, User};

/// How a successful response body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Raw,
    Users,
    Groups,
    Spaces,
}

/// Print whatever a dispatcher handed back.
#[async_trait]
pub trait Report: Send {
    async fn report(self, view: View) -> Result<()>;
}

#[async_trait]
impl Report for reqwest::Response {
    async fn report(self, view: View) -> Result<()> {
        let status = self.status();
        let text = self.text().await.context("failed to read response body")?;

        if !status.is_success() {
            println!("{}", style(status).red().bold());
            match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(err) => println!("{}: {}", err.error.code, err.error.message),
                Err(_) => print_body(&text),
            }
            anyhow::bail!("request failed with {status}");
        }

        println!("{}", style(status).green());
        match view {
            View::Raw => print_body(&text),
            View::Users => print_users(&parse_page(&text)?),
            View::Groups => print_groups(&parse_page(&text)?),
            View::Spaces => print_spaces(&parse_page(&text)?),
        }
        Ok(())
    }
}

/// Dry runs: show the request that would have been sent.
#[async_trait]
impl Report for RequestEnvelope {
    async fn report(self, _view: View) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&self)?);
        Ok(())
    }
}

fn parse_page<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let page: GraphPage<T> = serde_json::from_str(text).context("unexpected collection body")?;
    Ok(page.value)
}

fn print_body(text: &str) {
    if text.is_empty() {
        return;
    }
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{text}"),
        },
        Err(_) => println!("{text}"),
    }
}

fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users.");
        return;
    }
    println!("{:<38} {:<20} {:<30}", "ID", "ACCOUNT", "MAIL");
    println!("{}", "-".repeat(90));
    for u in users {
        println!(
            "{:<38} {:<20} {:<30}",
            u.id,
            u.on_premises_sam_account_name.as_deref().unwrap_or("-"),
            u.mail.as_deref().unwrap_or("-")
        );
    }
}

fn print_groups(groups: &[Group]) {
    if groups.is_empty() {
        println!("No groups.");
        return;
    }
    println!("{:<38} {:<30}", "ID", "NAME");
    println!("{}", "-".repeat(70));
    for g in groups {
        println!("{:<38} {:<30}", g.id, g.display_name.as_deref().unwrap_or("-"));
    }
}

fn print_spaces(spaces: &[Drive]) {
    if spaces.is_empty() {
        println!("No spaces.");
        return;
    }
    println!("{:<50} {:<10} {:<9} {:<30}", "ID", "TYPE", "STATE", "NAME");
    println!("{}", "-".repeat(100));
    for d in spaces {
        println!(
            "{:<50} {:<10} {:<9} {:<30}",
            d.id,
            d.drive_type.as_deref().unwrap_or("-"),
            d.state(),
            d.name.as_deref().unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_page() {
        let users: Vec<User> =
            parse_page(r#"{"value":[{"id":"u1","onPremisesSamAccountName":"alice"}]}"#).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].on_premises_sam_account_name.as_deref(), Some("alice"));
    }

    #[test]
    fn non_collection_body_is_an_error() {
        assert!(parse_page::<Group>(r#"{"id":"g1"}"#).is_err());
    }
}
