use crate::check::CheckResult;

/// Console block for one result, ending with a blank line.
pub fn render_text(result: &CheckResult, verbose: bool) -> String {
    let mut text = format!("Checking: {}\n", result.url);
    match &result.error {
        Some(error) => {
            text.push_str(&format!("Error: {error}\n"));
            if verbose {
                if let Some(kind) = result.error_kind {
                    text.push_str(&format!("Error Kind: {kind}\n"));
                }
            }
        }
        None => {
            match result.status_code {
                Some(code) => text.push_str(&format!("Status Code: {code}\n")),
                None => text.push_str("Status Code: N/A\n"),
            }
            match &result.redirect_target {
                Some(target) if result.redirected => {
                    text.push_str(&format!("Redirection: Redirected to: {target}\n"))
                }
                _ => text.push_str("Redirection: No redirection\n"),
            }
            if verbose {
                if let Some(details) = &result.details {
                    text.push_str(&format!("Final URL: {}\n", details.final_url));
                    text.push_str(&format!("HTTP Version: {}\n", details.http_version));
                    text.push_str(&format!("Headers: {}\n", details.headers_count));
                    match details.content_length {
                        Some(length) => {
                            text.push_str(&format!("Content Length: {length} bytes\n"))
                        }
                        None => text.push_str("Content Length: unknown\n"),
                    }
                }
            }
        }
    }
    if let Some(load_time) = result.load_time_seconds {
        if verbose {
            text.push_str(&format!("Load Time: {load_time:.6} seconds\n"));
        } else {
            text.push_str(&format!("Load Time: {load_time:.2} seconds\n"));
        }
    }
    text.push('\n');
    text
}

pub fn render_json(results: &[CheckResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
