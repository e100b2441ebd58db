//! Upstream stream relay
//!
//! Opens resolved media URLs and re-chunks their bodies for the HTTP
//! response. The relay never buffers a whole file; each upstream chunk
//! is forwarded as soon as it arrives, split when it exceeds the bound.

use bytes::Bytes;
use futures::{Stream, StreamExt};

/// Upper bound on a single relayed chunk
const MAX_CHUNK_BYTES: usize = 1024 * 1024;

/// Content type assumed when the upstream does not declare one
const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("failed to open upstream stream: {0}")]
    Connect(#[from] reqwest::Error),

    #[error("upstream stream returned status {0}")]
    UpstreamStatus(u16),
}

/// An opened upstream response ready to be relayed
pub struct RelayedStream {
    content_type: String,
    response: reqwest::Response,
}

impl RelayedStream {
    /// Content type reported by the upstream, or the default
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Consume the response into a bounded-chunk byte stream.
    ///
    /// Single pass over the body: oversized upstream chunks are split
    /// without copying, and a mid-stream upstream error terminates the
    /// stream with that error as its last item.
    pub fn into_chunks(self) -> impl Stream<Item = Result<Bytes, reqwest::Error>> {
        self.response
            .bytes_stream()
            .flat_map(|chunk| futures::stream::iter(split_chunk(chunk)))
    }
}

/// Opens upstream media connections for relaying.
///
/// Holds its own HTTP client with no total request timeout so large
/// media transfers are not cut off mid-body.
pub struct RelayService {
    client: reqwest::Client,
}

impl RelayService {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Open the resolved URL and check the upstream answers with success
    pub async fn open(&self, url: &str) -> Result<RelayedStream, RelayError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        Ok(RelayedStream {
            content_type,
            response,
        })
    }
}

/// Split one upstream chunk into pieces no larger than the bound
fn split_chunk(chunk: Result<Bytes, reqwest::Error>) -> Vec<Result<Bytes, reqwest::Error>> {
    match chunk {
        Ok(mut bytes) => {
            if bytes.len() <= MAX_CHUNK_BYTES {
                return vec![Ok(bytes)];
            }
            let mut pieces = Vec::with_capacity(bytes.len() / MAX_CHUNK_BYTES + 1);
            while bytes.len() > MAX_CHUNK_BYTES {
                pieces.push(Ok(bytes.split_to(MAX_CHUNK_BYTES)));
            }
            if !bytes.is_empty() {
                pieces.push(Ok(bytes));
            }
            pieces
        }
        Err(e) => vec![Err(e)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_chunk_passes_through() {
        let pieces = split_chunk(Ok(Bytes::from(vec![1u8; 512])));
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].as_ref().unwrap().len(), 512);
    }

    #[test]
    fn test_oversized_chunk_is_split() {
        // 2.5 MiB splits into 1 MiB + 1 MiB + 0.5 MiB with bytes preserved
        let len = MAX_CHUNK_BYTES * 5 / 2;
        let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();

        let pieces = split_chunk(Ok(Bytes::from(payload.clone())));
        assert_eq!(pieces.len(), 3);
        assert!(pieces
            .iter()
            .all(|p| p.as_ref().unwrap().len() <= MAX_CHUNK_BYTES));

        let rejoined: Vec<u8> = pieces
            .into_iter()
            .flat_map(|p| p.unwrap().to_vec())
            .collect();
        assert_eq!(rejoined, payload);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let pieces = split_chunk(Ok(Bytes::from(vec![0u8; MAX_CHUNK_BYTES * 2])));
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(|p| p.as_ref().unwrap().len() == MAX_CHUNK_BYTES));
    }
}
