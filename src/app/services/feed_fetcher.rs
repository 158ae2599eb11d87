//! Feed download and unpacking
//!
//! The open-data endpoint serves a zip archive holding a single text file
//! encoded as ISO-8859-1. [`FeedFetcher`] downloads it, reads the first
//! archive entry and returns its decoded lines.

use std::future::Future;
use std::io::{Cursor, Read};

use reqwest::Client;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};

/// Anything that can supply the raw lines of one feed download
pub trait FeedSource {
    fn fetch_lines(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// HTTP client for the zipped station feed
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: Client,
    url: String,
}

impl FeedFetcher {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            url: config.url(),
        })
    }

    /// Download URL, `base_url + dataset`
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the raw archive bytes
    pub async fn fetch_archive(&self) -> Result<Vec<u8>> {
        debug!("Requesting {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Download, unpack and decode the feed into lines
    pub async fn fetch(&self) -> Result<Vec<String>> {
        let archive = self.fetch_archive().await?;
        let contents = extract_first_entry(&archive, &self.url)?;
        let text = decode_latin1(&contents);
        let lines = split_lines(&text);
        info!("Fetched {} feed lines from {}", lines.len(), self.url);
        Ok(lines)
    }
}

impl FeedSource for FeedFetcher {
    fn fetch_lines(&self) -> impl Future<Output = Result<Vec<String>>> + Send {
        self.fetch()
    }
}

/// Read the first entry of a zip archive held in memory
pub fn extract_first_entry(archive_bytes: &[u8], url: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;
    if archive.is_empty() {
        return Err(FeedError::EmptyArchive {
            url: url.to_string(),
        });
    }

    let mut entry = archive.by_index(0)?;
    debug!("Reading archive entry '{}'", entry.name());

    let mut contents = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut contents)
        .map_err(|e| FeedError::io(format!("Failed to read archive entry from {}", url), e))?;
    Ok(contents)
}

/// Decode ISO-8859-1 bytes; each byte is the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

/// Split decoded text into lines, dropping `\n` / `\r\n` terminators
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use zip::write::SimpleFileOptions;

    fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, contents) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn config_for(server: &MockServer) -> FeedConfig {
        FeedConfig {
            base_url: format!("{}/dpd/zipopendata.php?dato=", server.uri()),
            dataset: "tiepre".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode_latin1(b"Tormentas el\xe9ctricas"), "Tormentas eléctricas");
        assert_eq!(decode_latin1(b"A\xf1elo"), "Añelo");
        assert_eq!(decode_latin1(b""), "");
    }

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines = split_lines("a;b /\r\nc;d /\r\n");
        assert_eq!(lines, vec!["a;b /", "c;d /"]);
    }

    #[test]
    fn test_extract_first_entry_only() {
        let bytes = zip_bytes(&[("tiepre.txt", &b"first"[..]), ("other.txt", &b"second"[..])]);
        assert_eq!(extract_first_entry(&bytes, "test").unwrap(), b"first");
    }

    #[test]
    fn test_extract_from_empty_archive() {
        let bytes = zip_bytes(&[]);
        assert!(matches!(
            extract_first_entry(&bytes, "test"),
            Err(FeedError::EmptyArchive { .. })
        ));
    }

    #[test]
    fn test_extract_from_garbage() {
        assert!(matches!(
            extract_first_entry(b"not a zip file", "test"),
            Err(FeedError::Archive(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_decodes_feed() {
        let server = MockServer::start().await;
        let body = zip_bytes(&[(
            "tiepre.txt",
            &b"Buenos Aires;18-Oct-2026;10:00;Despejado;10 km;22.5;21.0;60;Norte 9;1015.2 /\r\n\
              Neuqu\xe9n;18-Oct-2026;10:00;Nublado;10 km;14.0;No se calcula;48;Oeste 20;1010.0 /\r\n"[..],
        )]);

        Mock::given(method("GET"))
            .and(path("/dpd/zipopendata.php"))
            .and(query_param("dato", "tiepre"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
            .mount(&server)
            .await;

        let fetcher = FeedFetcher::new(&config_for(&server)).unwrap();
        let lines = fetcher.fetch_lines().await.unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Buenos Aires;"));
        assert!(lines[1].starts_with("Neuquén;"));
    }

    #[tokio::test]
    async fn test_fetch_reports_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = FeedFetcher::new(&config_for(&server)).unwrap();
        match fetcher.fetch_lines().await {
            Err(FeedError::HttpStatus { status, url }) => {
                assert_eq!(status, 503);
                assert!(url.ends_with("dato=tiepre"));
            }
            other => panic!("Expected HttpStatus error, got {:?}", other),
        }
    }
}
