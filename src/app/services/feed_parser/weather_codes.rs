//! Description table mapping feed sky states to weather codes
//!
//! The feed publishes the sky state as free Spanish text drawn from a small
//! vocabulary. Matching is exact: any other string, including the
//! "unavailable" label, maps to [`WeatherCode::Unknown`].

use crate::app::models::WeatherCode;

/// Known feed descriptions and the code each one renders as
pub const DESCRIPTION_TABLE: &[(&str, WeatherCode)] = &[
    ("Despejado", WeatherCode::Sunny),
    ("Ligeramente nublado", WeatherCode::MostlySunny),
    ("Algo nublado", WeatherCode::PartlyCloudy),
    ("Parcialmente nublado", WeatherCode::PartlyCloudy),
    ("Mayormente nublado", WeatherCode::MostlyCloudy),
    ("Nublado", WeatherCode::Cloudy),
    ("Cubierto con llovizna en la hora anterior", WeatherCode::Tornado),
    ("Cubierto", WeatherCode::Fog),
    ("Cubierto con llovizna", WeatherCode::Showers),
    ("Nublado con tormenta", WeatherCode::Thunderstorm),
    ("Nublado con tormenta en la hora anterior", WeatherCode::Lightning),
    ("Nublado con lluvia en la hora anterior", WeatherCode::Showers),
    ("Nublado con lluvia", WeatherCode::Rain),
    ("Cubierto con lluvia", WeatherCode::RainAndSnow),
    ("Cubierto con lluvia en la hora anterior", WeatherCode::Fog),
    ("Lluvia", WeatherCode::Rain),
    ("Tormenta", WeatherCode::Thunderstorm),
    ("Tormentas eléctricas", WeatherCode::Lightning),
    ("Llovizna", WeatherCode::Showers),
    ("Nieve", WeatherCode::Snow),
    ("Granizo", WeatherCode::RainAndSnow),
    ("Neblina", WeatherCode::Mist),
    ("Ventoso", WeatherCode::Windy),
];

/// Map a feed description to its weather code
pub fn lookup(description: &str) -> WeatherCode {
    DESCRIPTION_TABLE
        .iter()
        .find(|(known, _)| *known == description)
        .map(|(_, code)| *code)
        .unwrap_or(WeatherCode::Unknown)
}
