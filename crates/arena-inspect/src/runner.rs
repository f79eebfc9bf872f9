use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use arena_assets::AssetPack;
use arena_core::constants::WILD_CHUNKS_PER_SIDE;
use arena_core::{LevelError, WeatherType};
use arena_level::Level;

use crate::report::LevelDigest;

/// Which level of the pack to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    City,
    Wild,
    Interior,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(Mode::City),
            "wild" | "wilderness" => Ok(Mode::Wild),
            "interior" => Ok(Mode::Interior),
            other => Err(format!("unknown mode '{}' (expected city, wild or interior)", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::City => "city",
            Mode::Wild => "wild",
            Mode::Interior => "interior",
        };
        f.write_str(name)
    }
}

pub fn parse_weather(s: &str) -> Result<WeatherType, String> {
    match s {
        "clear" => Ok(WeatherType::Clear),
        "overcast" => Ok(WeatherType::Overcast),
        "rain" => Ok(WeatherType::Rain),
        "snow" => Ok(WeatherType::Snow),
        other => Err(format!(
            "unknown weather '{}' (expected clear, overcast, rain or snow)",
            other
        )),
    }
}

/// One level load to run against a pack.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub mode: Mode,
    pub weather: WeatherType,
    pub chunks_per_side: usize,
}

impl Default for LoadRequest {
    fn default() -> Self {
        Self {
            mode: Mode::City,
            weather: WeatherType::Clear,
            chunks_per_side: WILD_CHUNKS_PER_SIDE,
        }
    }
}

pub fn load(pack: &AssetPack, request: &LoadRequest) -> Result<Level, LevelError> {
    match request.mode {
        Mode::City => arena_world::load_city(pack, request.weather),
        Mode::Wild => {
            arena_world::load_wilderness_sized(pack, request.weather, request.chunks_per_side)
        }
        Mode::Interior => arena_world::load_interior(pack),
    }
}

/// Run the load and digest the result.
pub fn run(pack: &AssetPack, request: &LoadRequest) -> Result<LevelDigest, LevelError> {
    log::info!("Loading {} level from pack '{}'...", request.mode, pack.name);
    let start = Instant::now();
    let level = load(pack, request)?;
    log::info!(
        "Loaded {} in {:.2} ms",
        level.name,
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(LevelDigest::from_level(
        &pack.name,
        &request.mode.to_string(),
        &level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{demo_pack, DEMO_WILD_CHUNKS};

    fn request(mode: Mode) -> LoadRequest {
        LoadRequest {
            mode,
            chunks_per_side: DEMO_WILD_CHUNKS,
            ..LoadRequest::default()
        }
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("city".parse::<Mode>(), Ok(Mode::City));
        assert_eq!("wilderness".parse::<Mode>(), Ok(Mode::Wild));
        assert!("dungeon".parse::<Mode>().is_err());
        assert_eq!(Mode::Interior.to_string(), "interior");
        assert_eq!(parse_weather("rain"), Ok(WeatherType::Rain));
        assert!(parse_weather("fog").is_err());
    }

    #[test]
    fn test_demo_city() {
        let digest = run(&demo_pack(), &request(Mode::City)).expect("city");
        assert_eq!(digest.name, "Demoford");
        assert_eq!(digest.inf_name, "TCN.INF");
        assert_eq!(digest.dims, [64, 6, 64]);
        assert!(!digest.menu_names.is_empty());
    }

    #[test]
    fn test_demo_wilderness() {
        let digest = run(&demo_pack(), &request(Mode::Wild)).expect("wild");
        assert_eq!(digest.name, "WILD");
        assert_eq!(digest.inf_name, "TWN.INF");
        assert_eq!(digest.dims, [256, 6, 256]);
    }

    #[test]
    fn test_demo_runs_are_reproducible() {
        let pack = demo_pack();
        for mode in [Mode::City, Mode::Wild, Mode::Interior] {
            let a = run(&pack, &request(mode)).expect("first run");
            let b = run(&pack, &request(mode)).expect("second run");
            assert_eq!(a, b, "{} load differs between runs", mode);
        }
    }

    #[test]
    fn test_interior_without_pack_interior_fails() {
        let mut pack = demo_pack();
        pack.interior = None;
        assert!(matches!(
            run(&pack, &request(Mode::Interior)),
            Err(LevelError::MissingAsset(_))
        ));
    }
}
