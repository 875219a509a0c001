// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use lance_app::{DashState, FilterPanelVisibility, FilterSelection};
use lance_data::Store;
use lance_tui::UiOptions;
use runtime::DataRuntime;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `lance --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let store = Store::seeded();
    store.verify().context("seeded invoice dataset is inconsistent")?;

    if options.dump {
        println!("{}", dump_snapshot(&store)?);
        return Ok(());
    }

    if options.check_only {
        return Ok(());
    }

    let mut state = DashState::default();
    state.selection = FilterSelection {
        amount: config.amount_filter(),
        days: config.days_filter(),
    };
    if config.show_filters() {
        state.filters = FilterPanelVisibility::Visible;
    }

    let ui_options = UiOptions {
        greeting_name: config.greeting_name(),
    };
    let mut runtime = DataRuntime::new(store);
    lance_tui::run_app(&mut state, &mut runtime, &ui_options)
}

#[derive(Debug, Serialize)]
struct DatasetSnapshot<'a> {
    overdue: &'a [lance_app::OverdueInvoice],
    paid: &'a [lance_app::PaidInvoice],
    activity: &'a [lance_app::ActivityEvent],
}

fn dump_snapshot(store: &Store) -> Result<String> {
    serde_json::to_string_pretty(&DatasetSnapshot {
        overdue: store.overdue(),
        paid: store.paid(),
        activity: store.activity(),
    })
    .context("serialize dataset snapshot")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    dump: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        dump: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--dump" => {
                options.dump = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("lance (Rust)");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --dump                   Print the invoice dataset as JSON and exit");
    println!("  --check                  Validate config + dataset and exit");
    println!("  --help                   Show this help");
}
