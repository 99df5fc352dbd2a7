//! Reading progress through the page

/// Percentage of the scrollable distance already scrolled.
///
/// Returns 0 for pages that do not scroll and clamps overscroll
/// (rubber-banding) into `0.0..=100.0`.
///
/// # Examples
/// ```
/// use debtline_domain::progress_percent;
///
/// assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
/// assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
/// assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
/// ```
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let distance = scroll_height - client_height;
    if distance <= 0.0 {
        return 0.0;
    }
    (scroll_top / distance * 100.0).clamp(0.0, 100.0)
}
