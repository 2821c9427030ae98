use http::header::ACCEPT;
use http::request::Parts;

/// Outcome of the admission gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// The request enters the JSON pipeline
    Proceed,
    /// The request receives the fallback shell; no endpoint logic runs
    RenderFallback,
}

/// Gate behavior; `Permissive` exists for interactive local debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdmissionMode {
    #[default]
    Strict,
    /// Bypass the gate entirely: every request proceeds
    Permissive,
}

/// A response format this server can negotiate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Html,
}

/// Decide whether a request qualifies as a programmatic JSON client
///
/// Admitted iff the negotiated format is JSON and the raw `Accept` header
/// names `application/json`. Both conditions are required: a `format=json`
/// override with a browser `Accept` stays ambiguous and is rejected, as is
/// a JSON `Accept` negotiated away by an explicit `format=html`.
pub fn admit(parts: &Parts, mode: AdmissionMode) -> AdmissionDecision {
    if mode == AdmissionMode::Permissive {
        return AdmissionDecision::Proceed;
    }

    let accept = parts.headers.get(ACCEPT).and_then(|value| value.to_str().ok());

    let format_is_json = negotiated_format(parts.uri.query(), accept) == ResponseFormat::Json;
    let accept_names_json = accept.is_some_and(|value| value.contains("application/json"));

    if format_is_json && accept_names_json {
        AdmissionDecision::Proceed
    } else {
        AdmissionDecision::RenderFallback
    }
}

/// Negotiate the response format for a request
///
/// An explicit `format` query parameter wins; otherwise the `Accept`
/// header's media ranges are weighed by q-value and the best supported one
/// decides. Wildcards and absent headers resolve to HTML so browsers land
/// on the shell.
pub fn negotiated_format(query: Option<&str>, accept: Option<&str>) -> ResponseFormat {
    format_override(query).unwrap_or_else(|| accept_format(accept))
}

/// Read an explicit `format=json` / `format=html` query override
fn format_override(query: Option<&str>) -> Option<ResponseFormat> {
    for pair in query?.split('&') {
        let mut pair = pair.splitn(2, '=');
        if pair.next() == Some("format") {
            return match pair.next() {
                Some("json") => Some(ResponseFormat::Json),
                Some("html") => Some(ResponseFormat::Html),
                _ => None,
            };
        }
    }
    None
}

/// Pick the best supported media range from an `Accept` header
fn accept_format(accept: Option<&str>) -> ResponseFormat {
    let Some(accept) = accept else {
        return ResponseFormat::Html;
    };

    let mut best: Option<(ResponseFormat, f32)> = None;

    for range in accept.split(',') {
        let mut params = range.split(';');
        let media = params.next().unwrap_or_default().trim();

        let quality = params
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|value| value.parse::<f32>().ok())
            .unwrap_or(1.0);

        let format = match media {
            "application/json" => ResponseFormat::Json,
            "text/html" | "text/*" | "*/*" => ResponseFormat::Html,
            _ => continue,
        };

        if best.is_none_or(|(_, current)| quality > current) {
            best = Some((format, quality));
        }
    }

    best.map_or(ResponseFormat::Html, |(format, _)| format)
}
