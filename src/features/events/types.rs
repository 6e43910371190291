//! Event rows and the status derived from them. The status drives both the
//! badge on the events page and whether the register action is offered.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: i64,
    pub titulo: String,
    pub data: Option<String>,
    pub total_vagas: Option<i64>,
    pub vagas_disponiveis: Option<i64>,
    pub inscricao: Option<bool>,
    pub ativo: Option<bool>,
}

impl Event {
    /// Derived status, first match wins. Only an explicit `false` closes an
    /// event or its registrations; a null seat count means no seats left.
    pub fn status(&self) -> EventStatus {
        if self.ativo == Some(false) {
            return EventStatus::Closed;
        }
        if self.inscricao == Some(false) {
            return EventStatus::RegistrationClosed;
        }
        if self.vagas_disponiveis.unwrap_or(0) <= 0 {
            return EventStatus::Full;
        }
        EventStatus::Open
    }

    pub fn seats_label(&self) -> String {
        format!(
            "{} / {}",
            self.vagas_disponiveis.unwrap_or(0),
            self.total_vagas.unwrap_or(0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventStatus {
    Closed,
    RegistrationClosed,
    Full,
    Open,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Closed => "Evento encerrado",
            EventStatus::RegistrationClosed => "Inscrições encerradas",
            EventStatus::Full => "Vagas esgotadas",
            EventStatus::Open => "Vagas abertas",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            EventStatus::Closed => "bg-slate-200 text-slate-700",
            EventStatus::RegistrationClosed => "bg-amber-100 text-amber-800",
            EventStatus::Full => "bg-red-100 text-red-700",
            EventStatus::Open => "bg-emerald-100 text-emerald-800",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EventStatus::Open)
    }
}

/// Flag projection used by the stat cards.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EventFlags {
    pub id: i64,
    pub ativo: Option<bool>,
    pub inscricao: Option<bool>,
}

/// Events currently accepting registrations.
pub fn count_open(flags: &[EventFlags]) -> usize {
    flags
        .iter()
        .filter(|event| event.ativo == Some(true) && event.inscricao == Some(true))
        .count()
}

/// Events not yet closed, whether or not registrations are open.
pub fn count_active(flags: &[EventFlags]) -> usize {
    flags.iter().filter(|event| event.ativo == Some(true)).count()
}

/// New registration row linking a principal to an event.
#[derive(Clone, Debug, Serialize)]
pub struct NewRegistration {
    pub usuario_id: String,
    pub evento_id: i64,
}

/// Formats an ISO date (with or without a time component) as `dd/mm/yyyy`;
/// null or unparseable input renders as "-".
pub fn format_event_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%d/%m/%Y").to_string();
    }

    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(
        ativo: Option<bool>,
        inscricao: Option<bool>,
        vagas_disponiveis: Option<i64>,
    ) -> Event {
        Event {
            id: 1,
            titulo: "Semana de Tecnologia".to_string(),
            data: None,
            total_vagas: Some(10),
            vagas_disponiveis,
            inscricao,
            ativo,
        }
    }

    #[test]
    fn inactive_event_is_closed_regardless_of_other_fields() {
        assert_eq!(
            event(Some(false), Some(true), Some(5)).status(),
            EventStatus::Closed
        );
        assert_eq!(
            event(Some(false), Some(false), Some(0)).status(),
            EventStatus::Closed
        );
    }

    #[test]
    fn closed_registration_wins_over_seat_count() {
        assert_eq!(
            event(Some(true), Some(false), Some(5)).status(),
            EventStatus::RegistrationClosed
        );
    }

    #[test]
    fn zero_or_null_seats_mean_full() {
        assert_eq!(event(Some(true), Some(true), Some(0)).status(), EventStatus::Full);
        assert_eq!(event(Some(true), Some(true), None).status(), EventStatus::Full);
        assert_eq!(event(None, None, None).status(), EventStatus::Full);
    }

    #[test]
    fn open_when_active_accepting_and_seats_remain() {
        let open = event(Some(true), Some(true), Some(5));
        assert_eq!(open.status(), EventStatus::Open);
        assert!(open.status().is_open());
        assert_eq!(open.seats_label(), "5 / 10");
    }

    #[test]
    fn stat_counts_require_explicit_flags() {
        let flags = vec![
            EventFlags { id: 1, ativo: Some(true), inscricao: Some(true) },
            EventFlags { id: 2, ativo: Some(true), inscricao: Some(false) },
            EventFlags { id: 3, ativo: Some(false), inscricao: Some(true) },
            EventFlags { id: 4, ativo: None, inscricao: None },
        ];

        assert_eq!(count_open(&flags), 1);
        assert_eq!(count_active(&flags), 2);
    }

    #[test]
    fn date_formatting_handles_null_and_invalid_input() {
        assert_eq!(format_event_date(None), "-");
        assert_eq!(format_event_date(Some("amanhã")), "-");
        assert_eq!(format_event_date(Some("2026-09-15")), "15/09/2026");
        assert_eq!(
            format_event_date(Some("2026-09-15T19:30:00+00:00")),
            "15/09/2026"
        );
    }
}
