//! Endpoint inspection commands

use crate::config::EndpointConfig;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum EndpointCommands {
    /// List the endpoints that would be polled
    List,
}

pub fn handle(action: &EndpointCommands, endpoints: &[EndpointConfig]) -> anyhow::Result<()> {
    match action {
        EndpointCommands::List => {
            print!("{}", render_list(endpoints));
        }
    }
    Ok(())
}

fn render_list(endpoints: &[EndpointConfig]) -> String {
    let mut out = String::new();
    for (i, endpoint) in endpoints.iter().enumerate() {
        let note = if endpoint.is_placeholder() {
            "  (skipped: API_KEY placeholder)"
        } else {
            ""
        };
        let name = endpoint
            .name
            .as_deref()
            .map(|n| format!(" [{}]", n))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>3}  {:<4}  {}{}{}\n",
            i + 1,
            endpoint.transport(),
            endpoint.url,
            name,
            note
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list() {
        let endpoints = vec![
            EndpointConfig::new("https://a.example").with_name("A"),
            EndpointConfig::new("wss://b.example/API_KEY"),
        ];

        let out = render_list(&endpoints);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("http"));
        assert!(lines[0].ends_with("https://a.example [A]"));
        assert!(lines[1].contains("ws "));
        assert!(lines[1].contains("skipped"));
    }
}
