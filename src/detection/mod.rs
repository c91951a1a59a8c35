//! Message detection pipeline
//!
//! payload bytes → [`SignatureFilter`] → [`ByteDecoder`] → [`CandidateExtractor`]
//! → [`MessageClassifier`] → accepted messages.
//!
//! Stateless across transactions: every call works only on the bytes it is given.

pub mod byte_decoder;
pub mod candidate_extractor;
pub mod char_class;
pub mod message_classifier;
pub mod signature_filter;

pub use byte_decoder::ByteDecoder;
pub use candidate_extractor::CandidateExtractor;
pub use message_classifier::{MessageClassifier, Verdict};
pub use signature_filter::SignatureFilter;

use crate::config::DetectionConfig;
use crate::errors::{AppError, AppResult};
use crate::types::{SignatureTable, TransactionPayload};
use serde::Serialize;
use tracing::debug;

/// Full breakdown of one payload, used by the `inspect` command
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    /// Function name when the payload is a known structured call
    pub signature: Option<String>,
    pub decoded: String,
    pub candidates: Vec<CandidateVerdict>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateVerdict {
    pub text: String,
    pub accepted: bool,
    pub reason: String,
}

impl Inspection {
    pub fn accepted(&self) -> impl Iterator<Item = &str> {
        self.candidates
            .iter()
            .filter(|c| c.accepted)
            .map(|c| c.text.as_str())
    }
}

/// Runs the detection pipeline over transaction payloads
#[derive(Debug, Clone)]
pub struct MessageDetector {
    filter: SignatureFilter,
    decoder: ByteDecoder,
    extractor: CandidateExtractor,
    classifier: MessageClassifier,
}

impl MessageDetector {
    pub fn new(config: &DetectionConfig) -> AppResult<Self> {
        Self::with_signature_table(config, SignatureTable::default())
    }

    pub fn with_signature_table(config: &DetectionConfig, table: SignatureTable) -> AppResult<Self> {
        let extractor = CandidateExtractor::new(config.min_msg_length).map_err(|e| {
            AppError::Config(format!("Invalid candidate pattern: {}", e))
        })?;
        Ok(Self {
            filter: SignatureFilter::new(table),
            decoder: ByteDecoder::new(config.decode_strategy),
            extractor,
            classifier: MessageClassifier::new(config),
        })
    }

    /// Accepted messages for one transaction
    pub fn analyse(&self, payload: &TransactionPayload) -> Vec<String> {
        if payload.is_empty() {
            return Vec::new();
        }
        if let Some(name) = self.filter.label(&payload.data) {
            debug!("Skipping tx {}: known call {}", payload.hash, name);
            return Vec::new();
        }
        self.messages_in(&payload.data)
    }

    /// Accepted messages for raw bytes (no transaction context)
    pub fn analyse_bytes(&self, data: &[u8]) -> Vec<String> {
        if data.is_empty() || self.filter.is_structured_call(data) {
            return Vec::new();
        }
        self.messages_in(data)
    }

    /// Decode, extract and classify without short-circuiting, for diagnostics
    pub fn inspect(&self, data: &[u8]) -> Inspection {
        let signature = self.filter.label(data).map(str::to_string);
        let decoded = self.decoder.decode(data);
        let candidates = self
            .extractor
            .extract(&decoded)
            .into_iter()
            .map(|text| {
                let verdict = self.classifier.classify(text);
                CandidateVerdict {
                    text: text.to_string(),
                    accepted: signature.is_none() && verdict.is_accepted(),
                    reason: verdict.to_string(),
                }
            })
            .collect();
        Inspection {
            signature,
            decoded,
            candidates,
        }
    }

    pub fn decoder(&self) -> &ByteDecoder {
        &self.decoder
    }

    fn messages_in(&self, data: &[u8]) -> Vec<String> {
        let decoded = self.decoder.decode(data);
        self.extractor
            .extract(&decoded)
            .into_iter()
            .filter(|candidate| self.classifier.is_message(candidate))
            .map(str::to_string)
            .collect()
    }
}
