//! Viewport helpers.

/// Smooth-scroll the window back to the top. No state is involved.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Whether the viewport is currently narrower than `breakpoint_px`.
///
/// Always `false` outside the browser so server renders pick the desktop
/// layout.
pub fn is_below_breakpoint(breakpoint_px: u32) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let query = format!("(max-width: {}px)", breakpoint_px.saturating_sub(1));
        web_sys::window()
            .and_then(|w| w.match_media(&query).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = breakpoint_px;
        false
    }
}
