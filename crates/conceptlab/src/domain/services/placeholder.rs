//! Placeholder images
//!
//! Synthesizes a gradient card carrying the product name as an inline SVG
//! data URL, used whenever the image generator is disabled or fails.

const PALETTES: [(&str, &str); 6] = [
    ("#60a5fa", "#a855f7"),
    ("#34d399", "#3b82f6"),
    ("#f472b6", "#fb923c"),
    ("#22d3ee", "#6366f1"),
    ("#facc15", "#ef4444"),
    ("#a3e635", "#14b8a6"),
];

pub const PLACEHOLDER_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

/// Build the placeholder URL for a product. Same inputs give the same URL.
pub fn placeholder_image_url(product_name: &str, innovation: &str) -> String {
    let (from, to) = palette_for(product_name);

    let svg = format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="1024" height="1024" viewBox="0 0 1024 1024">"##,
            r##"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"##,
            r##"<stop offset="0%" stop-color="{from}"/><stop offset="100%" stop-color="{to}"/>"##,
            r##"</linearGradient></defs>"##,
            r##"<rect width="1024" height="1024" fill="url(#g)"/>"##,
            r##"<text x="512" y="480" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="56" font-weight="700" fill="#ffffff">{name}</text>"##,
            r##"<text x="512" y="570" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="36" fill="#ffffff" fill-opacity="0.85">{innovation}</text>"##,
            r##"</svg>"##
        ),
        from = from,
        to = to,
        name = escape_xml(product_name),
        innovation = escape_xml(innovation),
    );

    format!("{}{}", PLACEHOLDER_PREFIX, urlencoding::encode(&svg))
}

pub fn is_placeholder_url(url: &str) -> bool {
    url.starts_with(PLACEHOLDER_PREFIX)
}

fn palette_for(seed: &str) -> (&'static str, &'static str) {
    let hash = seed
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    PALETTES[hash % PALETTES.len()]
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_svg_data_url() {
        let url = placeholder_image_url("XTRA PureWash smart", "smart sensor technology");
        assert!(is_placeholder_url(&url));

        let decoded = urlencoding::decode(&url[PLACEHOLDER_PREFIX.len()..]).unwrap();
        assert!(decoded.starts_with("<svg"));
        assert!(decoded.contains("XTRA PureWash smart"));
        assert!(decoded.contains("linearGradient"));
    }

    #[test]
    fn test_placeholder_escapes_brand_text() {
        let url = placeholder_image_url("ARM & HAMMER <Max>", "probiotic-enhanced");
        let decoded = urlencoding::decode(&url[PLACEHOLDER_PREFIX.len()..]).unwrap();
        assert!(decoded.contains("ARM &amp; HAMMER &lt;Max&gt;"));
        assert!(!decoded.contains("ARM & HAMMER"));
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let a = placeholder_image_url("KABOOM HomePure zero-waste", "zero-waste refills");
        let b = placeholder_image_url("KABOOM HomePure zero-waste", "zero-waste refills");
        assert_eq!(a, b);
    }

    #[test]
    fn test_remote_url_is_not_placeholder() {
        assert!(!is_placeholder_url("https://images.example.com/a.png"));
    }
}
