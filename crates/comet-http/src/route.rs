//! Endpoint routing.
//!
//! The adapter serves exactly two paths: the configured mount and the
//! mount with a `.js` suffix. Matching is exact string comparison —
//! no prefixes, no patterns.

/// Suffix under which the client script is served.
const SCRIPT_SUFFIX: &str = ".js";

/// Where a request path points within the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The protocol endpoint (`<mount>`).
    Protocol,
    /// The bundled client script (`<mount>.js`).
    Script,
    /// Anything else; the request terminates with a 404.
    Unmatched,
}

/// Match a request path against the configured mount.
pub fn endpoint(path: &str, mount: &str) -> Endpoint {
    if path == mount {
        Endpoint::Protocol
    } else if path.strip_prefix(mount).is_some_and(|rest| rest == SCRIPT_SUFFIX) {
        Endpoint::Script
    } else {
        Endpoint::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_mount_exactly() {
        assert_eq!(endpoint("/bayeux", "/bayeux"), Endpoint::Protocol);
    }

    #[test]
    fn matches_script_path() {
        assert_eq!(endpoint("/bayeux.js", "/bayeux"), Endpoint::Script);
    }

    #[test]
    fn rejects_prefixes_and_subpaths() {
        assert_eq!(endpoint("/bayeux/", "/bayeux"), Endpoint::Unmatched);
        assert_eq!(endpoint("/bayeux/extra", "/bayeux"), Endpoint::Unmatched);
        assert_eq!(endpoint("/bayeux.json", "/bayeux"), Endpoint::Unmatched);
        assert_eq!(endpoint("/bayeux.js/", "/bayeux"), Endpoint::Unmatched);
    }

    #[test]
    fn rejects_unrelated_paths() {
        assert_eq!(endpoint("/", "/bayeux"), Endpoint::Unmatched);
        assert_eq!(endpoint("/other", "/bayeux"), Endpoint::Unmatched);
        assert_eq!(endpoint("", "/bayeux"), Endpoint::Unmatched);
    }

    #[test]
    fn respects_configured_mount() {
        assert_eq!(endpoint("/pubsub", "/pubsub"), Endpoint::Protocol);
        assert_eq!(endpoint("/pubsub.js", "/pubsub"), Endpoint::Script);
        assert_eq!(endpoint("/bayeux", "/pubsub"), Endpoint::Unmatched);
    }
}
