use log::Level;

/// Fixed timings and thresholds for the page behaviors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Scroll offset past which the navbar switches to its scrolled look.
    pub scroll_threshold: f64,
    pub scroll_debounce_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub counter_tick_ms: u32,
    pub counter_steps: u32,
    /// Simulated latency of the contact form transport.
    pub send_delay_ms: u32,
    pub copy_feedback_ms: u32,
    pub hero_content_delay_ms: u32,
    pub hero_image_delay_ms: u32,
    pub accent_variable: &'static str,
    pub accent_fallback: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    scroll_threshold: 100.0,
    scroll_debounce_ms: 10,
    reveal_threshold: 0.1,
    reveal_root_margin: "0px 0px -50px 0px",
    counter_tick_ms: 20,
    counter_steps: 100,
    send_delay_ms: 1500,
    copy_feedback_ms: 2000,
    hero_content_delay_ms: 200,
    hero_image_delay_ms: 400,
    accent_variable: "--accent-color",
    accent_fallback: "#2563eb",
};

pub fn log_level() -> Level {
    parse_log_level(option_env!("SITE_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::Error,
        Some("warn") => Level::Warn,
        Some("debug") => Level::Debug,
        Some("trace") => Level::Trace,
        None if cfg!(debug_assertions) => Level::Debug,
        _ => Level::Info,
    }
}

pub fn linkedin_base() -> &'static str {
    option_env!("SITE_LINKEDIN_BASE").unwrap_or("https://linkedin.com/in/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_levels_are_parsed_case_insensitively() {
        assert_eq!(parse_log_level(Some("WARN")), Level::Warn);
        assert_eq!(parse_log_level(Some(" trace ")), Level::Trace);
        assert_eq!(parse_log_level(Some("error")), Level::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_log_level(Some("verbose")), Level::Info);
    }

    #[test]
    fn site_timings_match_page_contract() {
        assert_eq!(SITE.scroll_threshold, 100.0);
        assert_eq!(SITE.send_delay_ms, 1500);
        assert_eq!(SITE.copy_feedback_ms, 2000);
        assert_eq!(SITE.counter_steps, 100);
    }
}
