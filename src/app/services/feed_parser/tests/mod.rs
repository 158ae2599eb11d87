//! Test utilities for feed parser testing
//!
//! Helpers that build feed lines the way the producer writes them, with the
//! two-character ` /` terminator that the parser strips.

mod parser_tests;
mod stats_tests;

/// Build a raw feed line from its columns, including the line terminator
pub fn feed_line(
    station: &str,
    date: &str,
    time: &str,
    weather: &str,
    temperature: &str,
    feels_like: &str,
    humidity: &str,
) -> String {
    format!(
        "{};{};{};{};10 km;{};{};{};Norte 9;1015.2 /",
        station, date, time, weather, temperature, feels_like, humidity
    )
}

/// A small feed with typical values, placeholders and a duplicate-free station list
pub fn create_test_feed() -> String {
    [
        feed_line("Aeroparque", "18-Oct-2026", "10:00", "Nublado", "19.4", "No se calcula", "72"),
        feed_line("Buenos Aires", "18-Oct-2026", "10:00", "Despejado", "22.5", "21.0", "60"),
        feed_line("Mendoza", "18-Oct-2026", "10:00", "---", "---", "---", "---"),
        feed_line("Ushuaia", "18-Oct-2026", "10:00", "Nieve", "-1.36", "-6.1", "85"),
    ]
    .join("\r\n")
}
