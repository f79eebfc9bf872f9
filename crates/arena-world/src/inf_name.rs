use arena_core::{ClimateType, WeatherType};

fn climate_letter(climate: ClimateType) -> char {
    match climate {
        ClimateType::Temperate => 'T',
        ClimateType::Desert => 'D',
        ClimateType::Mountain => 'M',
    }
}

fn weather_letter(climate: ClimateType, weather: WeatherType) -> char {
    match weather {
        WeatherType::Clear | WeatherType::Overcast | WeatherType::Overcast2 => 'N',
        WeatherType::Rain | WeatherType::Rain2 => 'R',
        WeatherType::Snow | WeatherType::SnowOvercast | WeatherType::SnowOvercast2 => {
            if climate == ClimateType::Desert {
                log::warn!("Deserts have no snow INF, using clear weather");
                'N'
            } else {
                'S'
            }
        }
    }
}

/// INF file for a city, e.g. `TCN.INF`.
pub fn city_inf_name(climate: ClimateType, weather: WeatherType) -> String {
    format!("{}C{}.INF", climate_letter(climate), weather_letter(climate, weather))
}

/// INF file for a wilderness, e.g. `MWS.INF`.
pub fn wilderness_inf_name(climate: ClimateType, weather: WeatherType) -> String {
    format!("{}W{}.INF", climate_letter(climate), weather_letter(climate, weather))
}
