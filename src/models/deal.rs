//! Deal records from the pipeline collection.

use serde::Serialize;

use crate::models::{CIDADE_NAO_INFORMADA, SEM_NOME, SEM_STATUS, STATUS_CONTRATADO};
use crate::notion::{Page, Property};

const FIELD_NAME: &str = "Negocio";
const FIELD_STATUS: &str = "Status";
const FIELD_CITY: &str = "Cidade";
const FIELD_VALUE: &str = "Valor";

/// One row of the real-estate pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct Deal {
    pub name: String,
    pub status: String,
    pub city: String,
    pub value: f64,
}

impl Deal {
    /// Decode a deal from a queried page, substituting the fallback
    /// labels for a missing name, status, or city.
    pub fn from_page(page: &Page) -> Self {
        Self {
            name: page
                .property(FIELD_NAME)
                .and_then(Property::title_text)
                .unwrap_or(SEM_NOME)
                .to_string(),
            status: page
                .property(FIELD_STATUS)
                .and_then(Property::status_label)
                .unwrap_or(SEM_STATUS)
                .to_string(),
            city: page
                .property(FIELD_CITY)
                .and_then(Property::select_label)
                .unwrap_or(CIDADE_NAO_INFORMADA)
                .to_string(),
            value: page.number(FIELD_VALUE),
        }
    }

    /// Contracted deals are settled business; their money is tracked by
    /// the goal collection, not the open pipeline.
    pub fn is_closed(&self) -> bool {
        self.status == STATUS_CONTRATADO
    }

    /// Whether the deal resolved to a real title rather than the
    /// no-name fallback.
    pub fn is_named(&self) -> bool {
        self.name != SEM_NOME
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page(properties: serde_json::Value) -> Page {
        serde_json::from_value(json!({
            "id": "8c0a48fc-6c92-4f3e-8a11-2f5d7b9f01aa",
            "properties": properties
        }))
        .expect("page decodes")
    }

    #[test]
    fn decodes_a_fully_populated_deal() {
        let deal = Deal::from_page(&page(json!({
            "Negocio": {"type": "title", "title": [{"plain_text": "Galpão BR-101"}]},
            "Status": {"type": "status", "status": {"name": "Em progresso"}},
            "Cidade": {"type": "select", "select": {"name": "Maceió"}},
            "Valor": {"type": "number", "number": 1_250_000.0}
        })));

        assert_eq!(deal.name, "Galpão BR-101");
        assert_eq!(deal.status, "Em progresso");
        assert_eq!(deal.city, "Maceió");
        assert_eq!(deal.value, 1_250_000.0);
        assert!(!deal.is_closed());
        assert!(deal.is_named());
    }

    #[test]
    fn missing_fields_fall_back_to_labels_and_zero() {
        let deal = Deal::from_page(&page(json!({})));

        assert_eq!(deal.name, SEM_NOME);
        assert_eq!(deal.status, SEM_STATUS);
        assert_eq!(deal.city, CIDADE_NAO_INFORMADA);
        assert_eq!(deal.value, 0.0);
        assert!(!deal.is_named());
    }

    #[test]
    fn empty_title_array_counts_as_unnamed() {
        let deal = Deal::from_page(&page(json!({
            "Negocio": {"type": "title", "title": []}
        })));

        assert_eq!(deal.name, SEM_NOME);
    }

    #[test]
    fn null_status_and_select_fall_back() {
        let deal = Deal::from_page(&page(json!({
            "Status": {"type": "status", "status": null},
            "Cidade": {"type": "select", "select": null}
        })));

        assert_eq!(deal.status, SEM_STATUS);
        assert_eq!(deal.city, CIDADE_NAO_INFORMADA);
    }

    #[test]
    fn contracted_status_marks_the_deal_closed() {
        let deal = Deal::from_page(&page(json!({
            "Status": {"type": "status", "status": {"name": "Contratado"}}
        })));

        assert!(deal.is_closed());
    }
}
