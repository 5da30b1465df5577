//! URL spelling variants
//!
//! Upstream storage hands out image URLs that are sometimes percent-encoded
//! twice, sometimes not at all. The resolver tries the URL as given, then the
//! variants returned by [`candidate_urls`].

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when re-encoding; URL structure (`/ ? & = # : %`) is kept
const UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^');

/// The URL as given followed by its distinct alternate spellings
#[must_use]
pub fn candidate_urls(url: &str) -> Vec<String> {
    let mut out = vec![url.to_string()];
    let mut push = |candidate: String| {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    };

    if url.contains('%') {
        if let Ok(decoded) = percent_decode_str(url).decode_utf8() {
            push(decoded.into_owned());
        }
    }
    push(utf8_percent_encode(url, UNSAFE).to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_url_has_no_alternates() {
        assert_eq!(
            candidate_urls("https://cdn.example/a.png"),
            vec!["https://cdn.example/a.png".to_string()]
        );
    }

    #[test]
    fn encoded_url_gets_decoded_alternate() {
        let candidates = candidate_urls("https://cdn.example/fotos/a%2520b.png");
        assert_eq!(candidates[0], "https://cdn.example/fotos/a%2520b.png");
        assert_eq!(candidates[1], "https://cdn.example/fotos/a%20b.png");
    }

    #[test]
    fn raw_url_gets_encoded_alternate() {
        let candidates = candidate_urls("https://cdn.example/fotos/freio dianteiro.png");
        assert_eq!(
            candidates,
            vec![
                "https://cdn.example/fotos/freio dianteiro.png".to_string(),
                "https://cdn.example/fotos/freio%20dianteiro.png".to_string(),
            ]
        );
    }

    #[test]
    fn non_ascii_is_encoded() {
        let candidates = candidate_urls("https://cdn.example/inspeção.png");
        assert_eq!(candidates[1], "https://cdn.example/inspe%C3%A7%C3%A3o.png");
    }
}
