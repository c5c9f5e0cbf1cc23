//! Deployment base path handling.
//!
//! When `PUBLIC_URL` is set at compile time (e.g., `/wayfarer` for GitHub Pages),
//! the router is mounted under it. Builds without `PUBLIC_URL` stay root-anchored.

/// Base path for the router.
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_base_trims_or_disappears() {
        assert_eq!(router_base(), None);
        assert_eq!(router_base_with_base("  "), None);
        assert_eq!(
            router_base_with_base("/wayfarer/"),
            Some(String::from("/wayfarer"))
        );
    }
}
