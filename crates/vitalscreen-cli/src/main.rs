use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use std::path::PathBuf;

use vitalscreen_app::models::store::AppContext;
use vitalscreen_app::schema::Disease;

mod serve;
mod settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("VITALSCREEN_LOG", "info"),
    )
    .init();

    let matches = Command::new("vitalscreen")
        .version(clap::crate_version!())
        .about("\u{1FA7A} VitalScreen - disease screening forms over pre-trained classifiers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Load the classifier artifacts and serve the screening page")
                .arg(
                    Arg::new("config")
                        .help("Path to JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("listen")
                        .short('l')
                        .long("listen")
                        .help(
                            "Address to bind, e.g. 127.0.0.1:8750. Overrides the \
                             address in the configuration file.",
                        )
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Load every classifier artifact, report, and exit")
                .arg(
                    Arg::new("config")
                        .help("Path to JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("serve", sub_m)) => handle_serve(sub_m),
        Some(("check", sub_m)) => handle_check(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_serve(matches: &ArgMatches) -> Result<()> {
    let mut config = settings::resolve(matches)?;
    if let Some(listen) = matches.get_one::<String>("listen") {
        config.listen = listen.clone();
    }

    log::info!("[VitalScreen] Loading classifier artifacts");
    match AppContext::initialize(&config) {
        Ok(ctx) => serve::run(&ctx, &config.listen),
        Err(e) => {
            log::error!("Startup failed: {}", e);
            std::process::exit(1)
        }
    }
}

fn handle_check(matches: &ArgMatches) -> Result<()> {
    let config = settings::resolve(matches)?;

    match AppContext::initialize(&config) {
        Ok(ctx) => {
            for disease in Disease::ALL {
                eprintln!(
                    "[VitalScreen] {} classifier ready ({})",
                    disease.slug(),
                    ctx.classifier(disease).name()
                );
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Check failed: {}", e);
            std::process::exit(1)
        }
    }
}
