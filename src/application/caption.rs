//! Caption suggestion use case
//!
//! Wraps the caption transport in the retry policy and absorbs every failure
//! into a fallback string: a caption request must never fail the editing
//! flow, let alone a save.

use crate::infrastructure::caption::{CaptionTransport, CAPTION_PLACEHOLDER};
use std::time::Duration;

/// Prompt used when a photo is attached to the draft
pub const PROMPT_WITH_IMAGE: &str =
    "你是Lee Kyutae风格的记录者。请看图写一句极简、治愈、带点淡淡忧伤或温暖的中文手账文案。不要超过30字。";

/// Prompt used for text-only drafts
pub const PROMPT_TEXT_ONLY: &str =
    "给我一句关于今天微小幸福的灵感文案，风格要像欧阳娜娜的Vlog旁白。";

/// Returned after all retries are exhausted
pub const CAPTION_FALLBACK: &str = "网络有点小情绪。";

/// Transport attempts per suggestion
pub const MAX_RETRIES: u32 = 3;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

pub struct CaptionService<T: CaptionTransport> {
    transport: T,
    initial_backoff: Duration,
}

impl<T: CaptionTransport> CaptionService<T> {
    pub fn new(transport: T) -> Self {
        CaptionService {
            transport,
            initial_backoff: INITIAL_BACKOFF,
        }
    }

    /// Override the first backoff delay; tests use a zero delay
    pub fn with_backoff(transport: T, initial_backoff: Duration) -> Self {
        CaptionService {
            transport,
            initial_backoff,
        }
    }

    /// Ask for a caption for the draft. Retries transport failures up to
    /// [`MAX_RETRIES`] times with doubling backoff, then falls back to
    /// [`CAPTION_FALLBACK`]. Always returns a string.
    pub fn suggest(&self, image_base64: Option<&str>) -> String {
        let prompt = if image_base64.is_some() {
            PROMPT_WITH_IMAGE
        } else {
            PROMPT_TEXT_ONLY
        };

        let mut delay = self.initial_backoff;
        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                log::info!(
                    "caption retry {} of {}, waiting {:?}",
                    attempt + 1,
                    MAX_RETRIES,
                    delay
                );
                std::thread::sleep(delay);
                delay *= 2;
            }

            match self.transport.generate(prompt, image_base64) {
                Ok(text) => {
                    let text = text.trim();
                    if text.is_empty() {
                        return CAPTION_PLACEHOLDER.to_string();
                    }
                    return text.to_string();
                }
                Err(e) => log::warn!("caption attempt {} failed: {}", attempt + 1, e),
            }
        }

        log::warn!(
            "caption suggestion failed after {} attempts, using fallback",
            MAX_RETRIES
        );
        CAPTION_FALLBACK.to_string()
    }
}
