use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use fancy_lists::{Config, ListOptions, Marker, analyze_marker, markers_compatible, outline, parse};

mod cli;
use cli::{Cli, Commands, MarkerFlags, OutputFormat};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>, flags: MarkerFlags) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (mut cfg, cfg_path) = fancy_lists::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    // Flags only ever enable options on top of the config file.
    cfg.lists.allow_ordinal |= flags.allow_ordinal;
    cfg.lists.allow_multi_letter |= flags.allow_multi_letter;
    Ok(cfg)
}

/// One report line per recognized marker, threading the last accepted
/// marker as context. Blank lines keep the context; prose clears it.
fn describe_markers(input: &str, options: &ListOptions) -> String {
    let mut out = String::new();
    let mut previous: Option<Marker> = None;

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(mut marker) = analyze_marker(line, previous.as_ref(), options) else {
            previous = None;
            continue;
        };

        let new_list = previous
            .as_ref()
            .is_none_or(|prev| !markers_compatible(prev, &marker));
        if new_list && previous.is_some() {
            // Read it again as the first item of a fresh list.
            match analyze_marker(line, None, options) {
                Some(fresh) => marker = fresh,
                None => {
                    previous = None;
                    continue;
                }
            }
        }

        let text = line[..marker.pos_after_marker].trim();
        out.push_str(&format!(
            "{}: {} {} {}",
            idx + 1,
            text,
            marker.system.as_str(),
            marker.value
        ));
        if marker.ordinal_indicator {
            out.push_str(" ordinal");
        }
        if new_list {
            out.push_str(" (new list)");
        }
        out.push('\n');

        previous = Some(marker);
    }

    out
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            format,
            markers,
        } => {
            let cfg = load_config(cli.config.as_deref(), &file, markers)?;
            let input = read_all(file.as_ref())?;
            let tokens = parse(&input, Some(cfg));

            match format {
                OutputFormat::Outline => print!("{}", outline(&tokens)),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&tokens)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    println!("{json}");
                }
            }
            Ok(())
        }
        Commands::Markers { file, markers } => {
            let cfg = load_config(cli.config.as_deref(), &file, markers)?;
            let input = read_all(file.as_ref())?;
            let normalized = fancy_lists::block_parser::normalize_input(&input);
            print!("{}", describe_markers(&normalized, &cfg.lists));
            Ok(())
        }
    }
}
