//! Lead records and the request/response bodies of the leads service.
//!
//! DESIGN
//! ======
//! Field names follow the external service's JSON (`nombre`, `correo`, ...)
//! through serde renames, so the Rust side can use plain English names while
//! staying byte-compatible with the wire.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Triage state of a lead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    /// Freshly submitted, nobody has followed up yet.
    #[serde(rename = "nuevo")]
    New,
    /// Someone reached out to the lead.
    #[serde(rename = "contactado")]
    Contacted,
    /// Not worth pursuing.
    #[serde(rename = "descartado")]
    Discarded,
}

impl LeadStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::New, Self::Contacted, Self::Discarded];

    /// Wire value sent to and received from the leads service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "nuevo",
            Self::Contacted => "contactado",
            Self::Discarded => "descartado",
        }
    }

    /// Capitalized label for headings and chart slices.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "Nuevo",
            Self::Contacted => "Contactado",
            Self::Discarded => "Descartado",
        }
    }

    /// Fill color used for this status in the summary chart.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::New => "#a78bfa",
            Self::Contacted => "#60a5fa",
            Self::Discarded => "#f87171",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lead status `{0}` (expected nuevo, contactado or descartado)")]
pub struct UnknownStatus(pub String);

impl FromStr for LeadStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nuevo" | "new" => Ok(Self::New),
            "contactado" | "contacted" => Ok(Self::Contacted),
            "descartado" | "discarded" => Ok(Self::Discarded),
            _ => Err(UnknownStatus(s.to_owned())),
        }
    }
}

/// A contact-form submission tracked through the triage workflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Server-assigned identifier.
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "estado")]
    pub status: LeadStatus,
    /// RFC 3339 creation timestamp, kept as sent by the server.
    #[serde(rename = "fecha_creado")]
    pub created_at: String,
}

impl Lead {
    /// Creation date rendered as `D Mon YYYY`.
    ///
    /// Falls back to the raw server string when it is not a timestamp we can
    /// parse.
    #[must_use]
    pub fn created_date_label(&self) -> String {
        format_date_label(&self.created_at)
    }
}

fn format_date_label(raw: &str) -> String {
    let label = format_description!("[day padding:none] [month repr:short] [year]");
    let date = OffsetDateTime::parse(raw, &Rfc3339)
        .map(OffsetDateTime::date)
        .or_else(|_| Date::parse(raw, format_description!("[year]-[month]-[day]")));
    match date {
        Ok(date) => date.format(label).unwrap_or_else(|_| raw.to_owned()),
        Err(_) => raw.to_owned(),
    }
}

/// `POST /leads` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// `PATCH /leads/{id}` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(rename = "estado")]
    pub status: LeadStatus,
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` success response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Path of a single lead resource on the leads service.
#[must_use]
pub fn lead_path(id: &str) -> String {
    format!("/leads/{id}")
}
