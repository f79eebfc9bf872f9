use std::path::PathBuf;
use std::process;

use arena_inspect::demo::{self, DEMO_WILD_CHUNKS};
use arena_inspect::report;
use arena_inspect::runner::{self, LoadRequest, Mode};

fn print_usage() {
    eprintln!("Usage: arena-inspect [OPTIONS]");
    eprintln!("  --pack <path>        Asset pack manifest (RON); built-in demo pack if omitted");
    eprintln!("  --mode <mode>        city, wild or interior (default: city)");
    eprintln!("  --weather <weather>  clear, overcast, rain or snow (default: clear)");
    eprintln!("  --chunks <n>         Wilderness chunks per side (default: 64, demo: 4)");
    eprintln!("  --validate           Check the pack's tables before loading");
    eprintln!("  --save <path>        Save the level digest as JSON");
    eprintln!("  --baseline <path>    Compare against a saved digest, exit 1 on mismatch");
}

fn next_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(2);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut pack_path: Option<PathBuf> = None;
    let mut save_path: Option<PathBuf> = None;
    let mut baseline_path: Option<PathBuf> = None;
    let mut chunks: Option<usize> = None;
    let mut validate = false;
    let mut request = LoadRequest::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--pack" => {
                i += 1;
                pack_path = Some(PathBuf::from(next_value(&args, i, flag)));
            }
            "--mode" => {
                i += 1;
                request.mode = next_value(&args, i, flag).parse::<Mode>().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    process::exit(2);
                });
            }
            "--weather" => {
                i += 1;
                request.weather =
                    runner::parse_weather(&next_value(&args, i, flag)).unwrap_or_else(|e| {
                        eprintln!("{}", e);
                        process::exit(2);
                    });
            }
            "--chunks" => {
                i += 1;
                let value = next_value(&args, i, flag);
                match value.parse::<usize>() {
                    Ok(n) if n >= 2 => chunks = Some(n),
                    _ => {
                        eprintln!("invalid --chunks value '{}' (need an integer >= 2)", value);
                        process::exit(2);
                    }
                }
            }
            "--validate" => validate = true,
            "--save" => {
                i += 1;
                save_path = Some(PathBuf::from(next_value(&args, i, flag)));
            }
            "--baseline" => {
                i += 1;
                baseline_path = Some(PathBuf::from(next_value(&args, i, flag)));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
        i += 1;
    }

    let pack = match &pack_path {
        Some(path) => match arena_assets::load_pack(path) {
            Ok(pack) => pack,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        },
        None => {
            log::info!("No --pack given, using the built-in demo pack");
            request.chunks_per_side = DEMO_WILD_CHUNKS;
            demo::demo_pack()
        }
    };
    if let Some(n) = chunks {
        request.chunks_per_side = n;
    }

    if validate {
        if let Err(errors) = arena_assets::validate_pack(&pack) {
            for error in &errors {
                eprintln!("  - {}", error);
            }
            eprintln!("ERROR: pack '{}' failed validation ({} problems)", pack.name, errors.len());
            process::exit(1);
        }
        log::info!("Pack '{}' passed validation", pack.name);
    }

    let digest = match runner::run(&pack, &request) {
        Ok(digest) => digest,
        Err(e) => {
            eprintln!("ERROR: {} load failed: {}", request.mode, e);
            process::exit(1);
        }
    };

    println!("\n## {} ({})\n", digest.name, request.mode);
    println!("{}", report::format_markdown(&digest));

    if let Some(ref path) = save_path {
        if let Err(e) = report::save_baseline(path, &digest) {
            eprintln!("ERROR: failed to save digest to {}: {}", path.display(), e);
            process::exit(1);
        }
        log::info!("Saved digest to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let diffs = report::compare(&digest, &baseline);
            println!("{}", report::format_comparison(&diffs));
            if !diffs.is_empty() {
                eprintln!(
                    "ERROR: {} mismatches against baseline, exiting with code 1",
                    diffs.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Inspection complete.");
}
