//! Domain records decoded from the queried collections.

pub mod deal;
pub mod goal;
pub mod metrics;

/// Status label that marks a record as contracted (closed business).
pub const STATUS_CONTRATADO: &str = "Contratado";

/// Label applied when a record carries no status.
pub const SEM_STATUS: &str = "Sem status";

/// Label applied when a deal carries no title.
pub const SEM_NOME: &str = "Sem nome";

/// Label applied when a deal carries no city.
pub const CIDADE_NAO_INFORMADA: &str = "Não informada";
