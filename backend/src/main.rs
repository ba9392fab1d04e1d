use moon::*;
use shared::SiteContent;

// ===== DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Page title resolution

macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

const FALLBACK_TITLE: &str = "Portfolio";

/// Page title from the bundled content: "{name} | {tagline}".
fn page_title() -> String {
    match SiteContent::bundled() {
        Ok(content) => format!("{} | {}", content.personal.name, content.personal.tagline),
        Err(error) => {
            eprintln!("Failed to read site content, using a generic title: {error}");
            FALLBACK_TITLE.to_string()
        }
    }
}

async fn frontend() -> Frontend {
    let title = page_title();
    debug_log!(DEBUG_BACKEND, "Serving frontend titled '{}'", title);
    Frontend::new()
        .title(title)
        .append_to_head(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#)
}

// The site is static; the frontend never sends up messages.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("BACKEND PANIC: {:?}", panic_info);
    }));

    start(frontend, up_msg_handler, |_| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_uses_bundled_profile() {
        assert_eq!(
            page_title(),
            "Alex Johnson | Full-Stack Developer & Creative Problem Solver"
        );
    }
}
