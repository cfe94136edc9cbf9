use log::Level;

/// Level name from config; unknown names fall back to `info`.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::Info)
}

/// Routes `log` records and panics to the browser console.
pub fn init(level: &str) {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(parse_level(level)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_level("debug"), Level::Debug);
        assert_eq!(parse_level("WARN"), Level::Warn);
        assert_eq!(parse_level(" trace "), Level::Trace);
    }

    #[test]
    fn unknown_level_is_info() {
        assert_eq!(parse_level("chatty"), Level::Info);
        assert_eq!(parse_level(""), Level::Info);
    }
}
