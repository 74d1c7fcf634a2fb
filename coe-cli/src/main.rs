//! COE CLI - Command line client for the COE analytics API.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "coe-cli",
    version,
    about = "Singapore COE seasonality, price analysis and premium tracker"
)]
struct Cli {
    #[command(flatten)]
    global: coe_cmd::GlobalArgs,

    #[command(subcommand)]
    command: coe_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[COE] {:?}", cli.command);
    coe_cmd::run(cli.global, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "coe-cli",
            "premium",
            "--window",
            "12",
            "--base-url",
            "http://localhost:8000",
        ])
        .unwrap();
        assert_eq!(cli.global.base_url.as_deref(), Some("http://localhost:8000"));
        match cli.command {
            coe_cmd::Command::Premium { window, .. } => assert_eq!(window, Some(12)),
            _ => panic!("expected premium"),
        }
    }

    #[test]
    fn vehicle_class_accepts_letter() {
        let cli = Cli::try_parse_from(["coe-cli", "seasonality", "--vehicle-class", "b"]).unwrap();
        match cli.command {
            coe_cmd::Command::Seasonality { vehicle_class, .. } => {
                assert_eq!(vehicle_class.map(|c| c.as_str()), Some("Category B"))
            }
            _ => panic!("expected seasonality"),
        }
    }
}
