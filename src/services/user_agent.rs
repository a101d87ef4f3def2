//! Normalization of the transport-supplied client string into the
//! application/platform signature recorded with refresh tokens.

use crate::models::auth::ClientContext;

pub fn parse_client_context(user_agent: &str) -> ClientContext {
    ClientContext {
        application: detect_application(user_agent),
        platform: detect_platform(user_agent),
        user_agent: user_agent.to_string(),
    }
}

/// Normalized application/browser name.
fn detect_application(ua: &str) -> String {
    let ua = ua.to_lowercase();

    // Order matters: Chrome UAs carry "Safari", Edge UAs carry "Chrome".
    let name = if ua.contains("edg/") || ua.contains("edge/") {
        "Edge"
    } else if ua.contains("opr/") || ua.contains("opera") {
        "Opera"
    } else if ua.contains("chrome/") {
        "Chrome"
    } else if ua.contains("safari/") && !ua.contains("chrome") {
        "Safari"
    } else if ua.contains("firefox/") {
        "Firefox"
    } else {
        "Unknown Application"
    };
    name.to_string()
}

/// Normalized platform/OS name.
fn detect_platform(ua: &str) -> String {
    let ua = ua.to_lowercase();

    let name = if ua.contains("windows") {
        "Windows"
    } else if ua.contains("iphone") {
        "iOS"
    } else if ua.contains("ipad") {
        "iPadOS"
    } else if ua.contains("mac os x") || ua.contains("macintosh") {
        "macOS"
    } else if ua.contains("android") {
        "Android"
    } else if ua.contains("cros") {
        "Chrome OS"
    } else if ua.contains("linux") {
        "Linux"
    } else {
        "Unknown OS"
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_on_macos() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        let ctx = parse_client_context(ua);
        assert_eq!(ctx.application, "Chrome");
        assert_eq!(ctx.platform, "macOS");
        assert_eq!(ctx.user_agent, ua);
    }

    #[test]
    fn safari_on_ios() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1";
        let ctx = parse_client_context(ua);
        assert_eq!(ctx.application, "Safari");
        assert_eq!(ctx.platform, "iOS");
    }

    #[test]
    fn edge_on_windows() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";
        let ctx = parse_client_context(ua);
        assert_eq!(ctx.application, "Edge");
        assert_eq!(ctx.platform, "Windows");
    }

    #[test]
    fn firefox_on_linux() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/121.0";
        let ctx = parse_client_context(ua);
        assert_eq!(ctx.application, "Firefox");
        assert_eq!(ctx.platform, "Linux");
    }

    #[test]
    fn empty_client_string_is_preserved_raw() {
        let ctx = parse_client_context("");
        assert_eq!(ctx.application, "Unknown Application");
        assert_eq!(ctx.platform, "Unknown OS");
        assert_eq!(ctx.user_agent, "");
    }
}
