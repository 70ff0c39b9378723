use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ai::QuoteCoverLetter;

/// Saudi VAT rate applied to all quotations.
pub const VAT_RATE: f64 = 0.15;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
}

/// A priced line on a quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLine {
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl QuoteLine {
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Quote entity. Totals are computed server-side from the lines; clients
/// never supply them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub project_id: Uuid,
    pub client_name: String,
    pub status: QuoteStatus,
    pub lines: Vec<QuoteLine>,
    pub subtotal: f64,
    pub vat_amount: f64,
    pub total: f64,
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<QuoteCoverLetter>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuoteRequest {
    pub project_id: Uuid,
    pub client_name: String,
    pub lines: Vec<QuoteLine>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn new(req: CreateQuoteRequest) -> Self {
        let now = Utc::now();
        let subtotal: f64 = req.lines.iter().map(QuoteLine::total).sum();
        let vat_amount = subtotal * VAT_RATE;
        Self {
            id: Uuid::new_v4(),
            project_id: req.project_id,
            client_name: req.client_name,
            status: QuoteStatus::Draft,
            lines: req.lines,
            subtotal,
            vat_amount,
            total: subtotal + vat_amount,
            valid_until: req.valid_until,
            cover_letter: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_include_vat() {
        let quote = Quote::new(CreateQuoteRequest {
            project_id: Uuid::new_v4(),
            client_name: "Dar Al-Majd".into(),
            lines: vec![
                QuoteLine {
                    description: "Structural works".into(),
                    unit: "lump sum".into(),
                    quantity: 1.0,
                    unit_price: 400_000.0,
                },
                QuoteLine {
                    description: "Finishing, premium tier".into(),
                    unit: "m²".into(),
                    quantity: 350.0,
                    unit_price: 780.0,
                },
            ],
            valid_until: None,
        });

        let expected_subtotal = 400_000.0 + 350.0 * 780.0;
        assert!((quote.subtotal - expected_subtotal).abs() < 1e-6);
        assert!((quote.vat_amount - expected_subtotal * 0.15).abs() < 1e-6);
        assert!((quote.total - expected_subtotal * 1.15).abs() < 1e-6);
    }
}
