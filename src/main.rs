//! Footprint calculator entry point — CLI wiring and config-driven estimation.

use std::path::Path;
use std::process;

use home_footprint::config::{ConfigError, HouseholdConfig};
use home_footprint::estimator::Estimate;
use home_footprint::io::export::export_csv;
use home_footprint::report::FootprintReport;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    dwelling: Option<String>,
    days: Option<u32>,
    ac: Option<bool>,
    fridge: Option<bool>,
    washer: Option<bool>,
    export_path: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("home-footprint — household energy/carbon footprint estimator");
    eprintln!();
    eprintln!("Usage: home-footprint [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>     Load household from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (typical, studio, family)");
    eprintln!("  --dwelling <label>  Override dwelling size (1bhk, 2bhk, 3bhk)");
    eprintln!("  --days <u32>        Override days in month (28-31)");
    eprintln!("  --ac <on|off>       Override air conditioner presence");
    eprintln!("  --fridge <on|off>   Override refrigerator presence");
    eprintln!("  --washer <on|off>   Override washing machine presence");
    eprintln!("  --export <path>     Export breakdown to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui               Launch the interactive terminal UI");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the typical preset is used.");
    eprintln!("When both are given, --config takes priority.");
}

fn parse_on_off(value: &str, flag: &str) -> Result<bool, String> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("{flag} expects \"on\" or \"off\", got \"{other}\"")),
    }
}

fn parse_args_from(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        dwelling: None,
        days: None,
        ac: None,
        fridge: None,
        washer: None,
        export_path: None,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 0;
    let take_value = |i: &mut usize, flag: &str| -> Result<String, String> {
        *i += 1;
        args.get(*i)
            .cloned()
            .ok_or_else(|| format!("{flag} requires a value argument"))
    };

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                cli.config_path = Some(take_value(&mut i, "--config")?);
            }
            "--preset" => {
                cli.preset = Some(take_value(&mut i, "--preset")?);
            }
            "--dwelling" => {
                cli.dwelling = Some(take_value(&mut i, "--dwelling")?);
            }
            "--days" => {
                let value = take_value(&mut i, "--days")?;
                cli.days = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("--days value \"{value}\" is not a valid u32"))?,
                );
            }
            "--ac" => {
                let value = take_value(&mut i, "--ac")?;
                cli.ac = Some(parse_on_off(&value, "--ac")?);
            }
            "--fridge" => {
                let value = take_value(&mut i, "--fridge")?;
                cli.fridge = Some(parse_on_off(&value, "--fridge")?);
            }
            "--washer" => {
                let value = take_value(&mut i, "--washer")?;
                cli.washer = Some(parse_on_off(&value, "--washer")?);
            }
            "--export" => {
                cli.export_path = Some(take_value(&mut i, "--export")?);
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => return Err(format!("unknown argument \"{other}\"")),
        }
        i += 1;
    }

    Ok(cli)
}

/// Loads the base configuration: `--config` takes priority, then
/// `--preset`, then the typical default.
fn resolve_config(cli: &CliArgs) -> Result<HouseholdConfig, ConfigError> {
    if let Some(ref path) = cli.config_path {
        HouseholdConfig::from_toml_file(Path::new(path))
    } else if let Some(ref name) = cli.preset {
        HouseholdConfig::from_preset(name)
    } else {
        Ok(HouseholdConfig::typical())
    }
}

/// Applies per-field CLI overrides on top of the base configuration.
fn apply_overrides(config: &mut HouseholdConfig, cli: &CliArgs) {
    if let Some(ref dwelling) = cli.dwelling {
        config.home.dwelling = dwelling.clone();
    }
    if let Some(days) = cli.days {
        config.home.days_in_month = days;
    }
    if let Some(ac) = cli.ac {
        config.appliances.air_conditioner = ac;
    }
    if let Some(fridge) = cli.fridge {
        config.appliances.refrigerator = fridge;
    }
    if let Some(washer) = cli.washer {
        config.appliances.washing_machine = washer;
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            print_help();
            process::exit(1);
        }
    };

    let mut config = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    apply_overrides(&mut config, &cli);

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Launch the interactive UI if requested
    #[cfg(feature = "tui")]
    if cli.tui {
        let preset_name = cli.preset.as_deref().unwrap_or("typical");
        home_footprint::tui::run(&config, preset_name);
        return;
    }

    // Compute and report
    let household = config.household();
    let estimate = Estimate::for_household(&household);
    println!("{}", FootprintReport::new(&household, &estimate));

    // Export CSV if requested
    if let Some(ref path) = cli.export_path {
        if let Err(e) = export_csv(&estimate, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Breakdown written to {path}");
    }
}
