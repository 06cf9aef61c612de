use clap::Parser;

use super::*;

#[test]
fn parses_scrape_command() {
    let cli = Cli::try_parse_from(["leadmart-cli", "scrape"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Scrape)));
}

#[test]
fn parses_verify_command() {
    let cli = Cli::try_parse_from(["leadmart-cli", "verify"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Verify)));
}

#[test]
fn parses_run_command() {
    let cli = Cli::try_parse_from(["leadmart-cli", "run"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Run)));
}

#[test]
fn parses_orders_submit_with_flags() {
    let cli = Cli::try_parse_from([
        "leadmart-cli",
        "orders",
        "submit",
        "--niche",
        "Dentists",
        "--city",
        "Pune",
        "--max-count",
        "25",
        "--requested-by",
        "john@example.com",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Orders {
            command:
                orders::OrderCommands::Submit {
                    niche,
                    city,
                    max_count,
                    requested_by,
                },
        }) => {
            assert_eq!(niche, "Dentists");
            assert_eq!(city, "Pune");
            assert_eq!(max_count, 25);
            assert_eq!(requested_by, "john@example.com");
        }
        other => panic!("expected orders submit, got: {other:?}"),
    }
}

#[test]
fn orders_submit_defaults_max_count() {
    let cli = Cli::try_parse_from([
        "leadmart-cli",
        "orders",
        "submit",
        "--niche",
        "Dentists",
        "--city",
        "Pune",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Orders {
            command: orders::OrderCommands::Submit { max_count, .. },
        }) => assert_eq!(max_count, 10),
        other => panic!("expected orders submit, got: {other:?}"),
    }
}

#[test]
fn parses_orders_list() {
    let cli =
        Cli::try_parse_from(["leadmart-cli", "orders", "list"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Orders {
            command: orders::OrderCommands::List
        })
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["leadmart-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}
