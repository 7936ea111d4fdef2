//! Uniform success/failure response envelopes
//!
//! Every engine operation returns an envelope with the same field set in
//! both outcomes: a failure carries the success payload fields at their
//! zero values plus a human-readable error message. Callers branch on
//! `success` only, never on payload shape. Each envelope also records the
//! call's elapsed wall time (seconds, rounded to 2 decimals) and a fresh
//! ISO-8601 UTC timestamp.

use crate::extract::{Link, Summary, TextExtraction};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// Rounds elapsed seconds to 2 decimal places
fn elapsed_seconds(started: Instant) -> f64 {
    (started.elapsed().as_secs_f64() * 100.0).round() / 100.0
}

/// Fresh ISO-8601 UTC timestamp
fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Response envelope for link extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksEnvelope {
    pub success: bool,
    pub urls: Vec<Link>,
    pub count: usize,
    pub processing_time: f64,
    pub timestamp: String,
    pub error: Option<String>,
}

impl LinksEnvelope {
    /// Wraps extracted links in a success envelope
    pub fn success(urls: Vec<Link>, started: Instant) -> Self {
        Self {
            success: true,
            count: urls.len(),
            urls,
            processing_time: elapsed_seconds(started),
            timestamp: utc_timestamp(),
            error: None,
        }
    }

    /// Builds a failure envelope with zero-valued payload fields
    pub fn failure(error: impl ToString, started: Instant) -> Self {
        Self {
            success: false,
            urls: Vec::new(),
            count: 0,
            processing_time: elapsed_seconds(started),
            timestamp: utc_timestamp(),
            error: Some(error.to_string()),
        }
    }
}

/// Response envelope for text extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEnvelope {
    pub success: bool,
    pub text: String,
    pub title: String,
    pub meta_description: String,
    pub headings: BTreeMap<String, Vec<String>>,
    pub word_count: usize,
    pub character_count: usize,
    pub processing_time: f64,
    pub timestamp: String,
    pub error: Option<String>,
}

impl TextEnvelope {
    /// Wraps a text extraction in a success envelope
    pub fn success(extraction: TextExtraction, started: Instant) -> Self {
        Self {
            success: true,
            text: extraction.cleaned_text,
            title: extraction.title,
            meta_description: extraction.meta_description,
            headings: extraction.headings,
            word_count: extraction.word_count,
            character_count: extraction.character_count,
            processing_time: elapsed_seconds(started),
            timestamp: utc_timestamp(),
            error: None,
        }
    }

    /// Builds a failure envelope with zero-valued payload fields
    pub fn failure(error: impl ToString, started: Instant) -> Self {
        Self {
            success: false,
            text: String::new(),
            title: String::new(),
            meta_description: String::new(),
            headings: BTreeMap::new(),
            word_count: 0,
            character_count: 0,
            processing_time: elapsed_seconds(started),
            timestamp: utc_timestamp(),
            error: Some(error.to_string()),
        }
    }
}

/// Response envelope for the summary operation
///
/// Carries the full text payload plus the sentence summary, so a summary
/// consumer still receives everything a text consumer would.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEnvelope {
    pub success: bool,
    pub text: String,
    pub title: String,
    pub meta_description: String,
    pub headings: BTreeMap<String, Vec<String>>,
    pub word_count: usize,
    pub character_count: usize,
    pub summary: String,
    pub total_sentences: usize,
    pub processing_time: f64,
    pub timestamp: String,
    pub error: Option<String>,
}

impl SummaryEnvelope {
    /// Wraps a text extraction and its summary in a success envelope
    pub fn success(extraction: TextExtraction, summary: Summary, started: Instant) -> Self {
        Self {
            success: true,
            text: extraction.cleaned_text,
            title: extraction.title,
            meta_description: extraction.meta_description,
            headings: extraction.headings,
            word_count: extraction.word_count,
            character_count: extraction.character_count,
            summary: summary.summary,
            total_sentences: summary.total_sentences,
            processing_time: elapsed_seconds(started),
            timestamp: utc_timestamp(),
            error: None,
        }
    }

    /// Builds a failure envelope with zero-valued payload fields
    pub fn failure(error: impl ToString, started: Instant) -> Self {
        Self {
            success: false,
            text: String::new(),
            title: String::new(),
            meta_description: String::new(),
            headings: BTreeMap::new(),
            word_count: 0,
            character_count: 0,
            summary: String::new(),
            total_sentences: 0,
            processing_time: elapsed_seconds(started),
            timestamp: utc_timestamp(),
            error: Some(error.to_string()),
        }
    }
}
