//! services/api/src/web/protocol.rs
//!
//! Defines the JSON wire format of the receipt endpoints and the conversion
//! from the raw wire receipt into the validated domain `Receipt`.

use receipt_processor_core::domain::{
    parse_amount, parse_purchase_date, parse_purchase_time, Item, Receipt, ReceiptError,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//=========================================================================================
// Request Payloads
//=========================================================================================

/// A receipt as submitted by the client. Every field is required.
#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    #[schema(example = "M&M Corner Market")]
    pub retailer: String,
    #[schema(example = "2022-01-01")]
    pub purchase_date: String,
    #[schema(example = "13:01")]
    pub purchase_time: String,
    #[schema(example = "6.49")]
    pub total: String,
    pub items: Vec<RawItem>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[schema(example = "Mountain Dew 12PK")]
    pub short_description: String,
    #[schema(example = "6.49")]
    pub price: String,
}

impl TryFrom<RawReceipt> for Receipt {
    type Error = ReceiptError;

    /// Validates every field, failing on the first one that does not parse.
    fn try_from(raw: RawReceipt) -> Result<Self, Self::Error> {
        let purchase_date = parse_purchase_date(&raw.purchase_date)?;
        let purchase_time = parse_purchase_time(&raw.purchase_time)?;
        let total = parse_amount("total", &raw.total)?;

        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Ok(Item {
                    price: parse_amount(&format!("items[{}].price", index), &item.price)?,
                    short_description: item.short_description,
                })
            })
            .collect::<Result<Vec<_>, ReceiptError>>()?;

        Ok(Receipt {
            retailer: raw.retailer,
            purchase_date,
            purchase_time,
            total,
            items,
        })
    }
}

//=========================================================================================
// Response Payloads
//=========================================================================================

/// Returned after a receipt has been processed.
#[derive(Serialize, Debug, ToSchema)]
pub struct IdResponse {
    pub id: Uuid,
}

/// The points awarded to a processed receipt.
#[derive(Serialize, Debug, ToSchema)]
pub struct PointsResponse {
    #[schema(example = 32)]
    pub points: u64,
}
