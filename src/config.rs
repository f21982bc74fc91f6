use log::Level;

/// Hostname on which the page-load timing line is printed.
pub const DEV_HOSTNAME: &str = "localhost";

/// Timing and geometry constants shared by the page controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub animation_duration_ms: u32,
    pub nav_hide_threshold: f64,
    pub anchor_scroll_offset: f64,
    pub counter_duration_ms: u32,
    pub counter_steps: i64,
    pub counter_viewport_offset: f64,
    pub counter_debounce_ms: u32,
    pub filter_stagger_ms: u32,
    pub filter_fade_in_ms: u32,
    pub filter_fade_out_ms: u32,
    pub testimonial_autoplay: bool,
    pub testimonial_interval_ms: u32,
    pub slider_mobile_breakpoint: f64,
    pub slider_card_gap: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub submit_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
}

pub const CONFIG: SiteConfig = SiteConfig {
    animation_duration_ms: 600,
    nav_hide_threshold: 100.0,
    anchor_scroll_offset: 100.0,
    counter_duration_ms: 2000,
    counter_steps: 50,
    counter_viewport_offset: 100.0,
    counter_debounce_ms: 100,
    filter_stagger_ms: 50,
    filter_fade_in_ms: 500,
    filter_fade_out_ms: 300,
    testimonial_autoplay: true,
    testimonial_interval_ms: 5000,
    slider_mobile_breakpoint: 768.0,
    slider_card_gap: 32.0,
    reveal_threshold: 0.1,
    reveal_root_margin: "0px 0px -100px 0px",
    submit_delay_ms: 1000,
    toast_visible_ms: 3000,
    toast_exit_ms: 300,
};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
