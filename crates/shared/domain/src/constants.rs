//! User-facing strings and fixed values of the registration form (pt-BR).

/// Institutional email domain every address must end with.
pub const INSTITUTIONAL_DOMAIN: &str = "ufs.br";

pub const FORM_TITLE: &str = "Cadastro de Gestor Setorial";
pub const SUCCESS_MESSAGE: &str = "Cadastro realizado com sucesso!";
pub const SUBMIT_LABEL: &str = "Salvar";
pub const SUBMITTING_LABEL: &str = "Salvando...";
/// Label of the empty sector option.
pub const SECTOR_PLACEHOLDER: &str = "Selecione";

/// Default simulated network latency of a submission, in milliseconds.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1_000;
/// Default lifetime of the success message, in milliseconds.
pub const DEFAULT_SUCCESS_TTL_MS: u64 = 3_000;
