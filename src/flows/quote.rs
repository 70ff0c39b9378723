//! Quotation cover letters.

use serde_json::json;

use crate::domain::ai::QuoteCoverLetter;
use crate::domain::Quote;
use crate::error::ApiError;
use crate::services::{GenerativeApi, Prompt};

use super::parse_output;

const INSTRUCTIONS: &str = r#"You write formal construction quotation cover letters for the Saudi market. Given the quote summary, reply with JSON only:
{"arabic": "...", "english": "..."}

Both letters address the client by name, reference the quoted total including VAT, state the validity period when one is given, and close with a professional signature block placeholder."#;

pub async fn draft_cover_letter<G: GenerativeApi>(
    genai: &G,
    quote: &Quote,
) -> Result<QuoteCoverLetter, ApiError> {
    let output = genai
        .generate(&Prompt {
            name: "quote-cover-letter",
            instructions: INSTRUCTIONS,
            input: json!({
                "client_name": &quote.client_name,
                "line_count": quote.lines.len(),
                "subtotal": quote.subtotal,
                "vat_amount": quote.vat_amount,
                "total": quote.total,
                "currency": "SAR",
                "valid_until": quote.valid_until,
            }),
            media: None,
        })
        .await?;

    parse_output(output)
}
