//! Form fields and the enumerated sector options.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// One input of the registration form.
///
/// The string form (`name`, `sector`, `email`, `phone`) is the stable key
/// renderers use to bind inputs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Sector,
    Email,
    Phone,
}

impl Field {
    /// Every field in rendering order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Sector, Self::Email, Self::Phone];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Sector => "Setor de Atuação",
            Self::Email => "E-mail",
            Self::Phone => "Telefone",
        }
    }

    /// Input hint; the sector select uses its empty option instead.
    #[must_use]
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Digite seu nome"),
            Self::Sector => None,
            Self::Email => Some("exemplo@ufs.br"),
            Self::Phone => Some("99 99999-9999"),
        }
    }
}

/// Sector options offered by the form. The string form is the option value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Sector {
    #[strum(serialize = "limpeza")]
    #[serde(rename = "limpeza")]
    Cleaning,
    #[strum(serialize = "manutencao")]
    #[serde(rename = "manutencao")]
    Maintenance,
    #[strum(serialize = "infraestrutura")]
    #[serde(rename = "infraestrutura")]
    Infrastructure,
    #[strum(serialize = "administrativo")]
    #[serde(rename = "administrativo")]
    Administrative,
    #[strum(serialize = "academico")]
    #[serde(rename = "academico")]
    Academic,
    #[strum(serialize = "tecnologia_informacao")]
    #[serde(rename = "tecnologia_informacao")]
    InformationTechnology,
}

impl Sector {
    /// Options in the order the select lists them.
    pub const ALL: [Self; 6] = [
        Self::Cleaning,
        Self::Maintenance,
        Self::Infrastructure,
        Self::Administrative,
        Self::Academic,
        Self::InformationTechnology,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cleaning => "Limpeza",
            Self::Maintenance => "Manutenção",
            Self::Infrastructure => "Infraestrutura",
            Self::Administrative => "Administrativo",
            Self::Academic => "Acadêmico",
            Self::InformationTechnology => "Tecnologia da Informação",
        }
    }
}
