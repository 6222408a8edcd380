//! Renders layer reports as a nested list.
//!
//! Each layer shows one of: its datasets with metadata document links, a
//! "no metadata" note, or the error that prevented resolution. HTML error
//! pages returned in place of JSON get their own message since the raw
//! parser error is not useful to a reader.

use metadata_common::{MetadataDocument, MetadataError};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::lister::{LayerReport, Outcome};

const NO_METADATA: &str = "No metadata available";

pub fn render(reports: &[LayerReport], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(to_text(reports)),
        OutputFormat::Html => Ok(to_html(reports)),
        OutputFormat::Json => to_json(reports),
    }
}

/// User-facing description of a failure.
pub fn error_message(error: &MetadataError) -> String {
    if error.is_html_error_page() {
        format!(
            "The service returned an HTML page instead of JSON; it may be stopped or require sign-in ({})",
            error.url().unwrap_or("unknown URL")
        )
    } else {
        format!("{}: {}", error.kind(), error)
    }
}

/// Indented plain-text tree.
pub fn to_text(reports: &[LayerReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("{} <{}>\n", report.title, report.url));
        match &report.outcome {
            Outcome::Documents(documents) => {
                for (dataset, document) in documents.iter() {
                    match document {
                        MetadataDocument::Url(url) => {
                            out.push_str(&format!("  - {}: {}\n", dataset, url))
                        }
                        MetadataDocument::Passthrough(_) => {
                            out.push_str(&format!("  - {}: (no document)\n", dataset))
                        }
                    }
                }
            }
            Outcome::NoMetadata => out.push_str(&format!("  ({})\n", NO_METADATA)),
            Outcome::Failed(e) => out.push_str(&format!("  ! {}\n", error_message(e))),
        }
    }
    out
}

/// Nested `<ul>` list with links to the metadata documents.
pub fn to_html(reports: &[LayerReport]) -> String {
    let mut html = String::from("<ul class=\"layer-metadata\">\n");

    for report in reports {
        html.push_str(&format!(
            "  <li data-layer-id=\"{}\">{}\n    <ul>\n",
            escape(&report.id),
            escape(&report.title)
        ));
        match &report.outcome {
            Outcome::Documents(documents) => {
                for (dataset, document) in documents.iter() {
                    match document {
                        MetadataDocument::Url(url) => html.push_str(&format!(
                            "      <li><a href=\"{}\" target=\"_blank\">{}</a></li>\n",
                            escape(url),
                            escape(dataset)
                        )),
                        MetadataDocument::Passthrough(_) => {
                            html.push_str(&format!("      <li>{}</li>\n", escape(dataset)))
                        }
                    }
                }
            }
            Outcome::NoMetadata => html.push_str(&format!(
                "      <li class=\"no-metadata\">{}</li>\n",
                NO_METADATA
            )),
            Outcome::Failed(e) => html.push_str(&format!(
                "      <li class=\"error\">{}</li>\n",
                escape(&error_message(e))
            )),
        }
        html.push_str("    </ul>\n  </li>\n");
    }

    html.push_str("</ul>\n");
    html
}

#[derive(Serialize)]
struct JsonReport<'a> {
    id: &'a str,
    title: &'a str,
    url: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    documents: Option<&'a metadata_common::MetadataDocumentMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    kind: &'static str,
    message: String,
}

pub fn to_json(reports: &[LayerReport]) -> Result<String, serde_json::Error> {
    let entries: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| {
            let (status, documents, error) = match &report.outcome {
                Outcome::Documents(documents) => ("resolved", Some(documents), None),
                Outcome::NoMetadata => ("no_metadata", None, None),
                Outcome::Failed(e) => (
                    "failed",
                    None,
                    Some(JsonError {
                        kind: e.kind(),
                        message: e.to_string(),
                    }),
                ),
            };
            JsonReport {
                id: &report.id,
                title: &report.title,
                url: &report.url,
                status,
                documents,
                error,
            }
        })
        .collect();

    serde_json::to_string_pretty(&entries)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata_common::MetadataDocumentMap;

    fn reports() -> Vec<LayerReport> {
        let body = "<html></html>";
        let parse_error = serde_json::from_str::<serde_json::Value>(body).unwrap_err();
        vec![
            LayerReport {
                id: "roads".into(),
                title: "Roads & Rail".into(),
                url: "http://h/MapServer/1".into(),
                outcome: Outcome::Documents(MetadataDocumentMap::single(
                    "Highways",
                    "http://h/MapServer/exts/LayerMetadata/metadata/1",
                )),
            },
            LayerReport {
                id: "parcels".into(),
                title: "Parcels".into(),
                url: "http://h/Parcels/MapServer".into(),
                outcome: Outcome::NoMetadata,
            },
            LayerReport {
                id: "zoning".into(),
                title: "Zoning".into(),
                url: "http://h/Zoning/MapServer".into(),
                outcome: Outcome::Failed(MetadataError::malformed_response(
                    "http://h/Zoning/MapServer?f=json",
                    body,
                    parse_error,
                )),
            },
        ]
    }

    #[test]
    fn test_text() {
        let text = to_text(&reports());
        assert!(text.contains("Roads & Rail <http://h/MapServer/1>\n"));
        assert!(text.contains("  - Highways: http://h/MapServer/exts/LayerMetadata/metadata/1\n"));
        assert!(text.contains("  (No metadata available)\n"));
        assert!(text.contains("HTML page instead of JSON"));
    }

    #[test]
    fn test_html_escapes_and_links() {
        let html = to_html(&reports());
        assert!(html.starts_with("<ul class=\"layer-metadata\">"));
        assert!(html.contains("Roads &amp; Rail"));
        assert!(html.contains(
            "<a href=\"http://h/MapServer/exts/LayerMetadata/metadata/1\" target=\"_blank\">Highways</a>"
        ));
        assert!(html.contains("<li class=\"no-metadata\">No metadata available</li>"));
        assert!(html.contains("<li class=\"error\">The service returned an HTML page"));
    }

    #[test]
    fn test_json_statuses() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&reports()).unwrap()).unwrap();
        assert_eq!(json[0]["status"], "resolved");
        assert_eq!(
            json[0]["documents"]["Highways"],
            "http://h/MapServer/exts/LayerMetadata/metadata/1"
        );
        assert_eq!(json[1]["status"], "no_metadata");
        assert!(json[1].get("documents").is_none());
        assert_eq!(json[2]["status"], "failed");
        assert_eq!(json[2]["error"]["kind"], "MalformedResponseError");
    }

    #[test]
    fn test_plain_error_message() {
        let e = MetadataError::transport("http://h/x", "timed out");
        assert_eq!(
            error_message(&e),
            "TransportError: Request to http://h/x failed: timed out"
        );
    }
}
